//! Resolution context handed to every strategy

use crate::{Error, Properties, Result};
use manifest_fs::{FileWalker, NormalizedPath, PatternMatcher};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Operating mode of the embedding host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Normal analysis; per-run temporary files are allowed
    #[default]
    Standard,
    /// Embedded host that cannot keep per-run temporary files
    Restricted,
}

impl HostMode {
    pub fn allows_temp_files(self) -> bool {
        matches!(self, Self::Standard)
    }
}

impl std::fmt::Display for HostMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Restricted => write!(f, "restricted"),
        }
    }
}

/// Immutable inputs of one resolution.
///
/// Strategies only read from the context, so a single context can be shared
/// between threads running independent resolutions.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    base_dir: NormalizedPath,
    properties: Properties,
    host_mode: HostMode,
}

impl ResolutionContext {
    /// Build a context rooted at `base_dir`, made absolute against the
    /// current directory.
    ///
    /// The directory is not required to exist here; strategies that walk it
    /// report the failure.
    pub fn new(base_dir: impl AsRef<Path>, properties: Properties) -> Result<Self> {
        let base_ref = base_dir.as_ref();
        let base_dir = NormalizedPath::absolute(base_ref).map_err(|e| Error::io(base_ref, e))?;
        Ok(Self {
            base_dir,
            properties,
            host_mode: HostMode::default(),
        })
    }

    pub fn with_host_mode(mut self, host_mode: HostMode) -> Self {
        self.host_mode = host_mode;
        self
    }

    pub fn base_dir(&self) -> &NormalizedPath {
        &self.base_dir
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn host_mode(&self) -> HostMode {
        self.host_mode
    }

    /// A fresh walk description over the base directory.
    pub fn walker(&self) -> FileWalker {
        FileWalker::new(self.base_dir.clone())
    }

    /// Pattern resolution rooted at the base directory.
    pub fn matcher(&self) -> PatternMatcher {
        PatternMatcher::new(self.base_dir.clone())
    }
}
