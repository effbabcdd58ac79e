//! Resolver configuration file
//!
//! A project can check in `manifest-resolver.toml` next to its sources:
//!
//! ```toml
//! mode = "standard"          # or "restricted"
//! synthesis = true           # false never generates a manifest
//! extensions = ["ts", "tsx"] # files listed in a generated manifest
//!
//! [convention]
//! file_name = "tsconfig.json"
//!
//! [properties]
//! "sonar.typescript.tsconfigPaths" = "tsconfig.app.json, tsconfig.lib.json"
//!
//! [compiler_options]
//! strict = true
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use crate::{
    Error, ExtensionSelector, HostMode, ManifestConvention, Properties, ResolutionChain,
    ResolutionContext, Result, SynthesisStrategy,
};
use manifest_fs::TempFolder;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Default configuration file name, looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "manifest-resolver.toml";

/// Settings that shape one resolution run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    pub mode: HostMode,
    /// Whether the chain may fall back to a generated manifest
    pub synthesis: bool,
    /// Extensions selected for generated manifests
    pub extensions: Vec<String>,
    pub convention: ManifestConvention,
    pub properties: Properties,
    /// Embedded verbatim as `compilerOptions` of generated manifests
    pub compiler_options: Map<String, Value>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: HostMode::Standard,
            synthesis: true,
            extensions: vec!["ts".to_string(), "tsx".to_string()],
            convention: ManifestConvention::tsconfig(),
            properties: Properties::new(),
            compiler_options: Map::new(),
        }
    }
}

impl ResolverConfig {
    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`; the file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(?path, "Loading resolver config");
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `manifest-resolver.toml` from `base_dir`, or defaults when absent.
    pub fn discover(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(?path, "No resolver config found; using defaults");
            Ok(Self::default())
        }
    }

    /// Selector for generated manifests: configured extensions outside the
    /// excluded dependency directory.
    pub fn selector(&self) -> ExtensionSelector {
        ExtensionSelector::new(self.extensions.iter().cloned())
            .excluding(self.convention.excluded_dir.as_str())
    }

    /// Context for `base_dir` carrying these properties and mode.
    pub fn context(&self, base_dir: impl AsRef<Path>) -> Result<ResolutionContext> {
        Ok(ResolutionContext::new(base_dir, self.properties.clone())?.with_host_mode(self.mode))
    }

    /// The full chain when synthesis is enabled, the reduced one otherwise.
    pub fn chain(&self, folder: Arc<TempFolder>) -> ResolutionChain {
        if self.synthesis {
            let synthesis = SynthesisStrategy::new(folder, self.selector())
                .with_compiler_options(self.compiler_options.clone())
                .named_after(&self.convention);
            ResolutionChain::full(&self.convention, synthesis)
        } else {
            ResolutionChain::reduced(&self.convention)
        }
    }
}
