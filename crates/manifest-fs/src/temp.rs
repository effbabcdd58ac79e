//! Unique temporary file allocation

use crate::{Error, NormalizedPath, Result};
use std::fs;
use std::io::Write;
use tempfile::TempDir;

/// Allocates uniquely named files inside one directory.
///
/// Every allocation creates a new file with a random name using exclusive
/// creation, so concurrent callers sharing a folder never receive the same
/// path. Files are kept after allocation; their lifetime is tied to the
/// folder, not to the allocating call.
#[derive(Debug)]
pub struct TempFolder {
    dir: NormalizedPath,
    /// Present when the folder owns its directory and removes it on drop.
    _owned: Option<TempDir>,
}

impl TempFolder {
    /// Create a private directory under the system temp location.
    ///
    /// The directory and everything allocated in it are deleted when the
    /// folder is dropped.
    pub fn new() -> Result<Self> {
        let owned = tempfile::Builder::new()
            .prefix("manifest-resolver-")
            .tempdir()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;
        let dir = NormalizedPath::absolute(owned.path()).map_err(|e| Error::io(owned.path(), e))?;
        Ok(Self {
            dir,
            _owned: Some(owned),
        })
    }

    /// Allocate inside an existing (or to-be-created) directory that is
    /// never cleaned up by this folder.
    pub fn in_dir(dir: impl AsRef<std::path::Path>) -> Result<Self> {
        let dir_ref = dir.as_ref();
        let dir = NormalizedPath::absolute(dir_ref).map_err(|e| Error::io(dir_ref, e))?;
        Ok(Self { dir, _owned: None })
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.dir
    }

    /// Create a new uniquely named file containing `content`.
    ///
    /// The name is `{prefix}<random>{suffix}`. Content is flushed to disk
    /// before the path is returned. A failed write leaves no file behind.
    pub fn write_new(&self, prefix: &str, suffix: &str, content: &[u8]) -> Result<NormalizedPath> {
        self.allocate(prefix, suffix, |file| file.write_all(content))
    }

    /// The file is only made permanent once `fill` and the sync succeed;
    /// on any earlier failure it is deleted with the `NamedTempFile`.
    fn allocate<F>(&self, prefix: &str, suffix: &str, fill: F) -> Result<NormalizedPath>
    where
        F: FnOnce(&mut fs::File) -> std::io::Result<()>,
    {
        let native_dir = self.dir.to_native();
        fs::create_dir_all(&native_dir).map_err(|e| Error::io(&native_dir, e))?;

        let mut named = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile_in(&native_dir)
            .map_err(|e| Error::io(&native_dir, e))?;

        fill(named.as_file_mut()).map_err(|e| Error::io(named.path(), e))?;
        named
            .as_file()
            .sync_all()
            .map_err(|e| Error::io(named.path(), e))?;

        let (_, path) = named.keep().map_err(|e| Error::io(&native_dir, e.error))?;
        Ok(NormalizedPath::new(path))
    }
}
