//! [`TestTree`] builder for project directory fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for laying out files.
///
/// # Example
///
/// ```rust,no_run
/// use manifest_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.file("src/tsconfig.json", "{}")
///     .file("node_modules/lib/tsconfig.json", "{}");
/// tree.assert_file_exists("src/tsconfig.json");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Native path of `rel` below the root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Forward-slash absolute form of `rel`, as resolution results spell it.
    ///
    /// `abs("")` is the root itself.
    pub fn abs(&self, rel: &str) -> String {
        let root = self.root().to_string_lossy().replace('\\', "/");
        let root = root.trim_end_matches('/');
        if rel.is_empty() {
            root.to_string()
        } else {
            format!("{root}/{rel}")
        }
    }

    /// Write `content` to `rel`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let full_path = self.path(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestTree::file: failed to create {}: {e}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("TestTree::file: failed to write {}: {e}", full_path.display()));
        self
    }

    /// Create several empty files.
    pub fn files(&self, rels: &[&str]) -> &Self {
        for rel in rels {
            self.file(rel, "");
        }
        self
    }

    /// Create an empty directory (and its parents).
    pub fn dir(&self, rel: &str) -> &Self {
        let full_path = self.path(rel);
        fs::create_dir_all(&full_path)
            .unwrap_or_else(|e| panic!("TestTree::dir: failed to create {}: {e}", full_path.display()));
        self
    }

    /// Assert that `rel` exists below the root.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}

/// Returns `true` when the current process runs as root, which bypasses
/// permission checks that some error-path tests depend on.
#[cfg(unix)]
pub fn is_root() -> bool {
    match std::process::Command::new("id").arg("-u").output() {
        Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
        Err(_) => false,
    }
}
