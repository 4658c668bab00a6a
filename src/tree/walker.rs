//! TreeWalker - collects every entry below a root directory

use std::fs;
use std::path::Path;

use crate::error::WalkError;

use super::entry::Entry;

/// Depth-first walker over a directory tree.
///
/// The walker does not filter, print or count: every node below the root is
/// returned. Children are visited in file-name order and each directory's own
/// entry is pushed *after* its subtree, so the sequence is post-order. Consumers
/// that want parents ahead of their children iterate it in reverse.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and return all entries below it.
    ///
    /// Fails if the root is not a directory or if any directory in the tree
    /// cannot be listed; no partial result is returned.
    pub fn walk(&self, root: &Path) -> Result<Vec<Entry>, WalkError> {
        let meta = fs::metadata(root).map_err(|e| WalkError::metadata(root, e))?;
        if !meta.is_dir() {
            return Err(WalkError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut entries = Vec::new();
        self.walk_dir(root, 1, &mut entries)?;
        log::debug!("walked {}: {} entries", root.display(), entries.len());
        Ok(entries)
    }

    fn walk_dir(&self, path: &Path, depth: usize, out: &mut Vec<Entry>) -> Result<(), WalkError> {
        log::trace!("listing {} at depth {}", path.display(), depth);

        let mut children = fs::read_dir(path)
            .map_err(|e| WalkError::read_dir(path, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| WalkError::read_dir(path, e))?;
        children.sort_by_key(|a| a.file_name());

        for child in children {
            let child_path = child.path();
            // Symlinks are reported as themselves and never followed
            let meta = fs::symlink_metadata(&child_path)
                .map_err(|e| WalkError::metadata(&child_path, e))?;

            if meta.is_dir() {
                self.walk_dir(&child_path, depth + 1, out)?;
            }

            out.push(Entry::from_metadata(depth, child_path, &meta));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn summary(entries: &[Entry]) -> Vec<(usize, &str, bool)> {
        entries
            .iter()
            .map(|e| (e.depth, e.name.as_str(), e.is_dir))
            .collect()
    }

    #[test]
    fn test_walk_emits_subtree_before_directory() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "0123456789");
        tree.add_file("b/c.txt", "01234");

        let entries = TreeWalker::new().walk(tree.path()).unwrap();

        assert_eq!(
            summary(&entries),
            vec![(1, "a.txt", false), (2, "c.txt", false), (1, "b", true)]
        );
    }

    #[test]
    fn test_walk_depth_is_parent_plus_one() {
        let tree = TestTree::new();
        tree.add_file("one/two/three/leaf.txt", "");

        let entries = TreeWalker::new().walk(tree.path()).unwrap();

        for entry in &entries {
            let parent = entry.path.parent().unwrap();
            let expected = parent
                .strip_prefix(tree.path())
                .unwrap()
                .components()
                .count()
                + 1;
            assert_eq!(entry.depth, expected, "wrong depth for {}", entry.name);
        }
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_walk_records_size_and_paths() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "0123456789");
        tree.add_file("b/c.txt", "01234");

        let entries = TreeWalker::new().walk(tree.path()).unwrap();

        let a = entries.iter().find(|e| e.name == "a.txt").unwrap();
        assert_eq!(a.size_bytes, 10);
        assert_eq!(a.path, tree.path().join("a.txt"));

        let c = entries.iter().find(|e| e.name == "c.txt").unwrap();
        assert_eq!(c.size_bytes, 5);
        assert_eq!(c.path, tree.path().join("b").join("c.txt"));
    }

    #[test]
    fn test_walk_includes_hidden_entries() {
        let tree = TestTree::new();
        tree.add_file(".hidden", "");
        tree.add_dir(".git");

        let entries = TreeWalker::new().walk(tree.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();

        assert!(names.contains(&".hidden"));
        assert!(names.contains(&".git"));
    }

    #[test]
    fn test_walk_empty_directory() {
        let tree = TestTree::new();
        let entries = TreeWalker::new().walk(tree.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_walk_missing_root_fails() {
        let tree = TestTree::new();
        let missing = tree.path().join("nope");

        let err = TreeWalker::new().walk(&missing).unwrap_err();
        assert!(matches!(err, WalkError::Metadata { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn test_walk_file_root_fails() {
        let tree = TestTree::new();
        let file = tree.add_file("plain.txt", "x");

        let err = TreeWalker::new().walk(&file).unwrap_err();
        assert!(matches!(err, WalkError::NotADirectory { .. }));
        assert!(err.to_string().contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_symlinks() {
        use std::os::unix::fs::symlink;

        let tree = TestTree::new();
        tree.add_file("sub/file.txt", "");
        symlink("..", tree.path().join("sub").join("up")).unwrap();

        let entries = TreeWalker::new().walk(tree.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "up").unwrap();

        assert!(!link.is_dir);
        assert!(link.permissions.starts_with('l'));
        assert_eq!(entries.len(), 3);
    }
}
