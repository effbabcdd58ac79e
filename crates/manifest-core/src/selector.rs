//! File selection for synthetic manifests

use manifest_fs::NormalizedPath;

/// Decides which files a synthetic manifest lists.
pub trait FileSelector: Send + Sync {
    /// Whether `path` (absolute) belongs in the manifest.
    fn select(&self, path: &NormalizedPath) -> bool;

    /// Directory names that can never contain a selected file.
    ///
    /// The walk prunes these instead of descending into them.
    fn skipped_dirs(&self) -> &[String] {
        &[]
    }
}

impl<F> FileSelector for F
where
    F: Fn(&NormalizedPath) -> bool + Send + Sync,
{
    fn select(&self, path: &NormalizedPath) -> bool {
        self(path)
    }
}

/// Selects files by extension (case-sensitive, without the dot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSelector {
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
}

impl ExtensionSelector {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            excluded_dirs: Vec::new(),
        }
    }

    /// TypeScript sources (`.ts`, `.tsx`) outside `node_modules`.
    pub fn typescript() -> Self {
        Self::new(["ts", "tsx"]).excluding(crate::convention::DEPENDENCY_DIR)
    }

    /// Never select files with `dir` as a path segment.
    pub fn excluding(mut self, dir: impl Into<String>) -> Self {
        self.excluded_dirs.push(dir.into());
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl FileSelector for ExtensionSelector {
    fn select(&self, path: &NormalizedPath) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        self.extensions.iter().any(|e| e == ext)
            && !self.excluded_dirs.iter().any(|dir| path.has_segment(dir))
    }

    fn skipped_dirs(&self) -> &[String] {
        &self.excluded_dirs
    }
}
