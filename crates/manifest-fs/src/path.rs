//! Normalized path handling for cross-platform compatibility

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A path normalized to forward slashes with `.` and `..` segments resolved.
///
/// All resolution results are carried as `NormalizedPath`, so two spellings of
/// the same file (`a/./b`, `a/c/../b`) compare equal and deduplicate. The
/// platform-native form is produced only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes, collapses repeated separators
    /// and resolves `.` and `..` lexically. A `..` that would climb above the
    /// start of the path is dropped.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner: clean(&raw) }
    }

    /// Make `path` absolute against the current directory, then normalize it.
    ///
    /// Symlinks are not resolved. Verbatim Windows prefixes (`\\?\C:\`) are
    /// simplified away.
    pub fn absolute(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let absolute = std::path::absolute(path.as_ref())?;
        Ok(Self::new(dunce::simplified(&absolute)))
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the path is rooted (`/x`, `//server/x` or `C:/x`).
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
            || self
                .inner
                .split('/')
                .next()
                .is_some_and(is_drive)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty() && *name != ".")
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Iterate over the non-empty path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }

    /// Whether any segment equals `name` exactly.
    ///
    /// `node_modules` matches `a/node_modules/b` but not `a/my_node_modules/b`.
    pub fn has_segment(&self, name: &str) -> bool {
        self.segments().any(|segment| segment == name)
    }

    /// The part of this path below `base`, without a leading separator.
    ///
    /// Returns `Some("")` when both paths are equal and `None` when this path
    /// is not inside `base`.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<&str> {
        let prefix = base.inner.trim_end_matches('/');
        let rest = self.inner.strip_prefix(prefix)?;
        if rest.is_empty() {
            return Some(rest);
        }
        rest.strip_prefix('/')
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a regular file (following symlinks).
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn clean(raw: &str) -> String {
    let network = raw.starts_with("//") && !raw.starts_with("///");
    let rooted = raw.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for part in raw.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| !is_drive(p)) {
                    parts.pop();
                }
            }
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    if network {
        format!("//{body}")
    } else if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else if parts.len() == 1 && is_drive(parts[0]) {
        format!("{body}/")
    } else {
        body
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
