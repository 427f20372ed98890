//! Search Module
//!
//! The query side of the service: answers "which files contain this word"
//! against a built `WordIndex`.
//!
//! ## Overview
//! A lookup fans one task out per indexed file, tests exact word
//! membership, and collects the matching paths. No match is a first-class
//! result (`None`), distinct from the empty-keyword rejection the HTTP
//! handler performs upstream. Lookups never mutate the dictionary and may
//! run concurrently with each other.
//!
//! ## Submodules
//! - **`engine`**: the fan-out membership lookup.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: wire DTOs for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
