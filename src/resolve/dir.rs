//! Loose-file traversal. This is deliberately not `walkdir`: the merge
//! contract depends on the explicit-stack depth-first order below, where
//! every file of a directory is emitted before any file of its
//! subdirectories.

use std::fs;
use std::path::{Path, PathBuf};

/// Lists every file visible from `base`, depth-first.
///
/// A `base` that is not a directory (including one that does not exist)
/// is returned as-is, treating a bare file argument as already resolved.
/// Directories that cannot be listed contribute nothing; override
/// content is optional by nature, so a partial result beats a failed
/// scan.
pub(crate) fn list_files(base: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut result = Vec::new();

    if base.is_dir() {
        let mut stack = vec![base.to_path_buf()];
        while let Some(cur_dir) = stack.pop() {
            let Ok(entries) = fs::read_dir(&cur_dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    if recursive {
                        stack.push(path);
                    }
                } else if path.is_file() {
                    result.push(path);
                }
            }
        }
    } else {
        result.push(base.to_path_buf());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_non_directory_base_is_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bare.json");
        touch(&file);
        assert_eq!(list_files(&file, true), vec![file]);

        let missing = dir.path().join("not_there");
        assert_eq!(list_files(&missing, true), vec![missing]);
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_files(dir.path(), true).is_empty());
    }

    #[test]
    fn test_non_recursive_stops_at_one_level() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.json"));
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("b.json"));

        let files = list_files(dir.path(), false);
        assert_eq!(files, vec![dir.path().join("a.json")]);
    }

    #[test]
    fn test_recursive_descends() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.json"));
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        touch(&dir.path().join("sub").join("b.json"));
        touch(&dir.path().join("sub").join("deeper").join("c.json"));

        let files = list_files(dir.path(), true);
        assert_eq!(files.len(), 3);
        assert!(files.contains(&dir.path().join("sub/deeper/c.json")));
    }

    #[test]
    fn test_files_precede_subdirectory_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("top.json"));
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("nested.json"));

        let files = list_files(dir.path(), true);
        let top = files
            .iter()
            .position(|p| p.ends_with("top.json"))
            .unwrap();
        let nested = files
            .iter()
            .position(|p| p.ends_with("nested.json"))
            .unwrap();
        assert!(top < nested);
    }
}
