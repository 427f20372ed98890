use crate::index::WordIndex;
use tokio::task::JoinSet;

/// Fans a membership test out across every indexed file and collects the
/// paths whose word set contains `word` exactly.
///
/// `word` must be non-empty; callers validate before reaching this point.
/// Returns `None` when no file matches, keeping "no matches" distinct
/// from an empty result shape. Result order is unspecified.
pub async fn search(index: &WordIndex, word: &str) -> Option<Vec<String>> {
    let mut tasks = JoinSet::new();
    for path in index.paths() {
        let index = index.clone();
        let word = word.to_string();
        tasks.spawn(async move { index.contains(&path, &word).then_some(path) });
    }

    let mut matches = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some(path)) => matches.push(path),
            Ok(None) => {}
            Err(err) => tracing::warn!("lookup task failed: {err}"),
        }
    }

    if matches.is_empty() { None } else { Some(matches) }
}
