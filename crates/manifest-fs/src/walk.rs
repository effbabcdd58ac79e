//! Lazy, deterministic enumeration of regular files under a directory

use crate::{Error, NormalizedPath, Result};
use std::path::PathBuf;
use walkdir::{DirEntry, FilterEntry, WalkDir};

/// A restartable description of a directory walk.
///
/// `FileWalker` holds no open handles. Every call to [`FileWalker::iter`]
/// starts a fresh walk, so a walker can be stored and reused across
/// resolutions while always observing the current state of the tree.
///
/// Entries within a directory are visited in lexical file-name order.
/// Symlinked directories are never descended into. A symlink whose target
/// is a regular file is yielded under the link's own path.
#[derive(Debug, Clone)]
pub struct FileWalker {
    root: NormalizedPath,
    skip_dirs: Vec<String>,
}

impl FileWalker {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            skip_dirs: Vec::new(),
        }
    }

    /// Prune every directory below the root whose name is exactly `name`.
    pub fn skip_dir(mut self, name: impl Into<String>) -> Self {
        self.skip_dirs.push(name.into());
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Start a new walk.
    pub fn iter(&self) -> Files {
        let skip_dirs = self.skip_dirs.clone();
        let prune: Pruner = Box::new(move |entry: &DirEntry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !skip_dirs
                    .iter()
                    .any(|name| entry.file_name() == name.as_str())
        });

        let root = self.root.to_native();
        let inner = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(prune);

        Files { root, inner }
    }
}

impl<'a> IntoIterator for &'a FileWalker {
    type Item = Result<NormalizedPath>;
    type IntoIter = Files;

    fn into_iter(self) -> Files {
        self.iter()
    }
}

type Pruner = Box<dyn FnMut(&DirEntry) -> bool + Send>;

/// Iterator over the regular files of one walk.
///
/// Yields absolute normalized paths when the walker root is absolute. The
/// first I/O failure is yielded as an `Err`; callers are expected to stop
/// there.
pub struct Files {
    root: PathBuf,
    inner: FilterEntry<walkdir::IntoIter, Pruner>,
}

impl Iterator for Files {
    type Item = Result<NormalizedPath>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if is_regular_file(&entry) => {
                    return Some(Ok(NormalizedPath::new(entry.path())));
                }
                Ok(_) => continue,
                Err(err) => return Some(Err(Error::from_walk(&self.root, err))),
            }
        }
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

impl std::fmt::Debug for Files {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Files").field("root", &self.root).finish()
    }
}
