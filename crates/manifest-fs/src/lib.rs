//! Filesystem layer for the manifest resolver
//!
//! Provides normalized absolute paths, a restartable lazy directory walker,
//! glob-or-literal pattern matching and unique temporary file allocation.

pub mod error;
pub mod path;
pub mod pattern;
pub mod temp;
pub mod walk;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use pattern::PatternMatcher;
pub use temp::TempFolder;
pub use walk::{FileWalker, Files};
