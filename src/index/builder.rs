//! Construction pass for the word index.
//!
//! ## Responsibilities
//! - **Enumeration**: asks the walker for every file under the target
//!   directory; any enumeration failure aborts the build.
//! - **Pre-population**: fixes the dictionary's key set before any
//!   concurrent work starts, so scan tasks never create top-level entries.
//! - **Fan-out**: one blocking task per file; each scans into a task-local
//!   set and writes its own entry once.
//! - **Barrier**: drains every task before returning; the first failure
//!   wins and the partial dictionary is dropped.

use super::dictionary::WordIndex;
use super::scanner::scan_words;
use crate::tree::{FileTree, WalkError, files_under};

use dashmap::DashMap;
use std::collections::HashSet;
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

/// Error raised when the index cannot be built.
///
/// Construction is all-or-nothing: a single file failing to open or read
/// invalidates the entire build, and no dictionary is produced.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("directory walk failed: {0}")]
    Walk(#[from] WalkError),

    #[error("cannot open {path:?}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {path:?}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("file scan task failed: {0}")]
    Task(#[from] JoinError),
}

impl WordIndex {
    /// Builds the index over every file under `dir` of `tree`.
    ///
    /// The empty `dir` means the whole tree. The call returns only after
    /// every scan task has finished; on success the returned index is
    /// complete and ready for lookups, on failure no index exists at all.
    pub async fn build<T: FileTree>(tree: Arc<T>, dir: &str) -> Result<WordIndex, IndexError> {
        let paths = files_under(tree.as_ref(), dir)?;

        // Fix the key set up front, single-threaded. Scan tasks only ever
        // fill their own pre-existing entry, so the hot scanning loop
        // holds no map lock.
        let entries: Arc<DashMap<String, HashSet<String>>> =
            Arc::new(DashMap::with_capacity(paths.len()));
        for path in &paths {
            entries.insert(path.clone(), HashSet::new());
        }

        let mut tasks = JoinSet::new();
        for path in paths {
            let tree = tree.clone();
            let entries = entries.clone();
            tasks.spawn_blocking(move || scan_into(tree.as_ref(), &entries, path));
        }

        // Completion barrier: every task is drained before returning, so a
        // late failure is never reported to an already-departed caller.
        let mut failure: Option<IndexError> = None;
        while let Some(joined) = tasks.join_next().await {
            let result = match joined {
                Ok(result) => result,
                Err(join_err) => Err(IndexError::Task(join_err)),
            };
            if let Err(err) = result {
                tracing::error!("file scan failed: {err}");
                if failure.is_none() {
                    failure = Some(err);
                }
            }
        }
        if let Some(err) = failure {
            return Err(err);
        }

        tracing::info!(files = entries.len(), "word index built");
        Ok(WordIndex { entries })
    }
}

/// Scans a single file into its own dictionary entry. Runs on the
/// blocking pool; the reader closes on drop on every exit path.
fn scan_into<T: FileTree + ?Sized>(
    tree: &T,
    entries: &DashMap<String, HashSet<String>>,
    path: String,
) -> Result<(), IndexError> {
    let reader = tree.open(&path).map_err(|source| IndexError::Open {
        path: path.clone(),
        source,
    })?;

    let words = scan_words(reader).map_err(|source| IndexError::Read {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path, words = words.len(), "file scanned");

    if let Some(mut entry) = entries.get_mut(&path) {
        *entry = words;
    }
    Ok(())
}
