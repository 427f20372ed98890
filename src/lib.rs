//! Word Search Service Library
//!
//! This library crate defines the core modules of the word-search service:
//! an in-memory index mapping every file in a tree to the set of words it
//! contains, queried over HTTP.
//!
//! ## Architecture Modules
//! The system is composed of three subsystems:
//!
//! - **`tree`**: The read-only file-tree abstraction. Defines the `FileTree`
//!   trait the rest of the system consumes, the on-disk and in-memory
//!   implementations, and the recursive file enumerator.
//! - **`index`**: The construction pass. Builds the file→word-set dictionary
//!   with one concurrent scan task per file; all-or-nothing, read-only once
//!   built.
//! - **`search`**: The query side. Fans a membership test out across every
//!   indexed file and exposes the result through the Axum HTTP handler.

pub mod index;
pub mod search;
pub mod tree;
