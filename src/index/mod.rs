//! Index Module
//!
//! The construction side of the service: turns a file tree into the
//! in-memory dictionary mapping every file path to the set of distinct
//! words it contains.
//!
//! ## Overview
//! Construction is a one-shot, all-or-nothing pass. The file list is
//! enumerated and the dictionary's key set fixed while still
//! single-threaded; one blocking task per file then streams the file line
//! by line and fills its own entry. If any task fails, the whole build
//! fails and the partial dictionary is discarded, so a `WordIndex` value
//! only ever exists fully built, and is read-only from then on.
//!
//! ## Submodules
//! - **`dictionary`**: the `WordIndex` handle and its read accessors.
//! - **`builder`**: the construction pass and its error type.
//! - **`scanner`**: the line/byte word scanner.

pub mod builder;
pub mod dictionary;
pub mod scanner;

#[cfg(test)]
mod tests;

pub use builder::IndexError;
pub use dictionary::WordIndex;
