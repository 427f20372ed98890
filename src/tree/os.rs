use super::{FileTree, TreeEntry};
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// File tree rooted at a directory of the local filesystem.
pub struct OsTree {
    root: PathBuf,
}

impl OsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }
}

impl FileTree for OsTree {
    fn read_dir(&self, path: &str) -> io::Result<Vec<TreeEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            entries.push(TreeEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + Send>> {
        let file = fs::File::open(self.resolve(path))?;
        Ok(Box::new(io::BufReader::new(file)))
    }
}
