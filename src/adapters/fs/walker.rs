//! Go source discovery below a workspace root.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories the Go tool itself ignores, plus hidden ones.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.starts_with('_') || name == "vendor" || name == "testdata"
}

/// Go test files always end with `_test.go`.
pub fn is_go_test_file(path: &Path) -> bool {
    path.to_string_lossy().ends_with("_test.go")
}

/// Every `*.go` file below `root`, sorted by path.
pub fn go_files(root: &Path, include_tests: bool) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "go"))
        .filter(|p| include_tests || !is_go_test_file(p))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_go_test_file() {
        assert!(is_go_test_file(Path::new("pkg/foo_test.go")));
        assert!(!is_go_test_file(Path::new("pkg/foo.go")));
        assert!(!is_go_test_file(Path::new("main.go")));
    }

    #[test]
    fn test_walks_go_files_skipping_vendor_and_hidden() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for rel in [
            "main.go",
            "pkg/store.go",
            "pkg/store_test.go",
            "pkg/README.md",
            "vendor/dep/dep.go",
            ".git/hooks/x.go",
            "testdata/fixture.go",
        ] {
            let path = root.join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "package x\n").unwrap();
        }

        let rel = |files: Vec<PathBuf>| -> Vec<String> {
            files
                .iter()
                .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
                .collect()
        };
        assert_eq!(
            rel(go_files(root, true)),
            vec!["main.go", "pkg/store.go", "pkg/store_test.go"]
        );
        assert_eq!(rel(go_files(root, false)), vec!["main.go", "pkg/store.go"]);
    }
}
