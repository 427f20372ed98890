//! File Tree Module
//!
//! The read-only file-tree abstraction the rest of the system is built on.
//! The index never touches the filesystem directly; it sees only the
//! narrow `FileTree` contract, so tests can swap in an in-memory tree or a
//! deliberately broken one.
//!
//! ## Submodules
//! - **`os`**: `OsTree`, a tree rooted at a directory of the local filesystem.
//! - **`memory`**: `MemoryTree`, a tree synthesized from a path→contents map.
//! - **`walker`**: recursive enumeration of every regular file under a directory.

pub mod memory;
pub mod os;
pub mod walker;


pub use memory::MemoryTree;
pub use os::OsTree;
pub use walker::{WalkError, files_under};

use std::io;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub is_dir: bool,
}

/// A read-only hierarchical store of named byte streams.
///
/// Paths are `/`-separated and relative to the tree root; the empty path
/// names the root itself. Implementations return directory listings in
/// lexical order so traversal is deterministic. Readers close on drop.
pub trait FileTree: Send + Sync + 'static {
    /// Lists the entries of the directory at `path`.
    fn read_dir(&self, path: &str) -> io::Result<Vec<TreeEntry>>;

    /// Opens the file at `path` for sequential buffered reading.
    fn open(&self, path: &str) -> io::Result<Box<dyn io::BufRead + Send>>;
}
