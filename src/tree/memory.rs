use super::{FileTree, TreeEntry};
use std::collections::BTreeMap;
use std::io::{self, BufRead};

/// In-memory file tree synthesized from a path → contents map.
///
/// Intermediate directories are implied by the `/`-separated keys, so a
/// single `with_file("a/b.txt", ...)` call also creates directory `a`.
/// Chiefly used to exercise the index against a known layout without
/// touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file at `path` with the given contents.
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl FileTree for MemoryTree {
    fn read_dir(&self, path: &str) -> io::Result<Vec<TreeEntry>> {
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{path}/")
        };

        // name -> is_dir; BTreeMap keeps the listing in lexical order.
        let mut children: BTreeMap<String, bool> = BTreeMap::new();
        for key in self.files.keys() {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            match rest.split_once('/') {
                Some((name, _)) => {
                    children.insert(name.to_string(), true);
                }
                None => {
                    children.entry(rest.to_string()).or_insert(false);
                }
            }
        }

        if children.is_empty() && !path.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {path}"),
            ));
        }

        Ok(children
            .into_iter()
            .map(|(name, is_dir)| TreeEntry { name, is_dir })
            .collect())
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + Send>> {
        match self.files.get(path) {
            Some(contents) => Ok(Box::new(io::Cursor::new(contents.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {path}"),
            )),
        }
    }
}
