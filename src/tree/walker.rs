use super::{FileTree, TreeEntry};
use std::io;
use thiserror::Error;

/// Error raised when a directory traversal cannot complete.
///
/// Covers a missing root, permission problems, and I/O faults on a
/// directory read. The failing directory and the underlying cause are
/// both carried; no partial listing survives a failure.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot read directory {path:?}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Collects every regular-file path reachable under `dir`, recursing into
/// subdirectories. The empty path means the tree root. Paths come back in
/// traversal order: depth-first, each directory's entries in lexical order.
pub fn files_under<T: FileTree + ?Sized>(tree: &T, dir: &str) -> Result<Vec<String>, WalkError> {
    let mut files = Vec::new();
    walk(tree, dir, &mut files)?;
    Ok(files)
}

fn walk<T: FileTree + ?Sized>(
    tree: &T,
    dir: &str,
    files: &mut Vec<String>,
) -> Result<(), WalkError> {
    let entries = tree.read_dir(dir).map_err(|source| WalkError::ReadDir {
        path: dir.to_string(),
        source,
    })?;

    for TreeEntry { name, is_dir } in entries {
        let path = join(dir, &name);
        if is_dir {
            walk(tree, &path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
