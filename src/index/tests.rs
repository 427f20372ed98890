//! Index Module Tests
//!
//! Validates the word scanner and the construction pass.
//!
//! ## Test Scopes
//! - **Scanner**: the exact terminator set (space, comma, period),
//!   end-of-line flushing, case sensitivity.
//! - **Builder**: one entry per enumerated file, all-or-nothing failure,
//!   idempotent rebuilds, subdirectory scoping.

#[cfg(test)]
mod tests {
    use crate::index::scanner::{scan_line, scan_words};
    use crate::index::{IndexError, WordIndex};
    use crate::tree::{FileTree, MemoryTree, TreeEntry};
    use std::collections::HashSet;
    use std::io::{self, BufRead, Cursor};
    use std::sync::Arc;

    fn line_words(line: &str) -> HashSet<String> {
        let mut words = HashSet::new();
        scan_line(line, &mut words);
        words
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    // A tree whose directory listing works but whose files never open.
    struct BrokenTree;

    impl FileTree for BrokenTree {
        fn read_dir(&self, _path: &str) -> io::Result<Vec<TreeEntry>> {
            Ok(vec![TreeEntry {
                name: "locked.txt".to_string(),
                is_dir: false,
            }])
        }

        fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + Send>> {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("mock error opening {path}"),
            ))
        }
    }

    // ============================================================
    // SCANNER TESTS
    // ============================================================

    #[test]
    fn test_scan_line_splits_on_terminators() {
        let words = line_words("World, World1. Hello World");
        assert_eq!(words, set(&["World", "World1", "Hello"]));
    }

    #[test]
    fn test_scan_line_collapses_repeated_terminators() {
        let words = line_words("one,,two..  three , . four");
        assert_eq!(words, set(&["one", "two", "three", "four"]));
        assert!(!words.contains(""), "no empty words may be emitted");
    }

    #[test]
    fn test_scan_line_is_case_sensitive() {
        let words = line_words("World world WORLD");
        assert_eq!(words.len(), 3);
        assert!(words.contains("World"));
        assert!(words.contains("world"));
        assert!(words.contains("WORLD"));
    }

    #[test]
    fn test_scan_line_keeps_other_punctuation() {
        // Only space, comma, and period terminate words; everything else
        // is a word character.
        let words = line_words("foo-bar don't a!b\ttab");
        assert_eq!(words, set(&["foo-bar", "don't", "a!b\ttab"]));
    }

    #[test]
    fn test_scan_line_flushes_trailing_word() {
        let words = line_words("ends without terminator");
        assert!(words.contains("terminator"));
    }

    #[test]
    fn test_scan_line_empty() {
        assert!(line_words("").is_empty());
    }

    #[test]
    fn test_scan_line_only_terminators() {
        assert!(line_words(" ,. , .. ").is_empty());
    }

    #[test]
    fn test_scan_words_never_joins_across_lines() {
        let words = scan_words(Cursor::new("Wor\nld")).unwrap();
        assert_eq!(words, set(&["Wor", "ld"]));
    }

    #[test]
    fn test_scan_words_handles_missing_final_newline() {
        let words = scan_words(Cursor::new("first line\nlast")).unwrap();
        assert!(words.contains("last"));
    }

    #[test]
    fn test_scan_words_empty_input() {
        let words = scan_words(Cursor::new("")).unwrap();
        assert!(words.is_empty());
    }

    // ============================================================
    // BUILDER TESTS
    // ============================================================

    fn sample_tree() -> MemoryTree {
        MemoryTree::new()
            .with_file("file1.txt", "World")
            .with_file("file2.txt", "World1")
            .with_file("file3.txt", "Hello World")
            .with_file("sub/file4.txt", "nested words here")
            .with_file("empty.txt", "")
    }

    #[tokio::test]
    async fn test_build_creates_one_entry_per_file() {
        let index = WordIndex::build(Arc::new(sample_tree()), "").await.unwrap();

        let mut paths = index.paths();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                "empty.txt",
                "file1.txt",
                "file2.txt",
                "file3.txt",
                "sub/file4.txt"
            ],
            "dictionary keys must be exactly the enumerated files"
        );
    }

    #[tokio::test]
    async fn test_build_empty_tree_succeeds() {
        let index = WordIndex::build(Arc::new(MemoryTree::new()), "").await.unwrap();
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn test_build_empty_file_gets_empty_word_set() {
        let index = WordIndex::build(Arc::new(sample_tree()), "").await.unwrap();

        let words = index.words("empty.txt").expect("entry must exist");
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn test_build_records_word_sets() {
        let index = WordIndex::build(Arc::new(sample_tree()), "").await.unwrap();

        assert_eq!(index.words("file3.txt").unwrap(), set(&["Hello", "World"]));
        assert!(index.contains("file1.txt", "World"));
        assert!(!index.contains("file1.txt", "World1"));
    }

    #[tokio::test]
    async fn test_build_is_idempotent() {
        let tree = Arc::new(sample_tree());

        let first = WordIndex::build(tree.clone(), "").await.unwrap();
        let second = WordIndex::build(tree, "").await.unwrap();

        let mut first_paths = first.paths();
        let mut second_paths = second.paths();
        first_paths.sort();
        second_paths.sort();
        assert_eq!(first_paths, second_paths);

        for path in &first_paths {
            assert_eq!(
                first.words(path),
                second.words(path),
                "word set for {path} must not change between builds"
            );
        }
    }

    #[tokio::test]
    async fn test_build_scopes_to_subdirectory() {
        let index = WordIndex::build(Arc::new(sample_tree()), "sub").await.unwrap();

        assert_eq!(index.paths(), vec!["sub/file4.txt"]);
        assert!(index.contains("sub/file4.txt", "nested"));
    }

    #[tokio::test]
    async fn test_build_fails_when_any_open_fails() {
        let err = WordIndex::build(Arc::new(BrokenTree), "").await.unwrap_err();

        match err {
            IndexError::Open { path, .. } => assert_eq!(path, "locked.txt"),
            other => panic!("expected Open error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn test_build_fails_on_missing_root() {
        let err = WordIndex::build(Arc::new(sample_tree()), "missing")
            .await
            .unwrap_err();
        assert!(matches!(err, IndexError::Walk(_)));
    }

    #[tokio::test]
    async fn test_contains_rejects_unknown_path() {
        let index = WordIndex::build(Arc::new(sample_tree()), "").await.unwrap();
        assert!(!index.contains("ghost.txt", "World"));
    }
}
