//! Manifest resolution engine
//!
//! Decides which project manifests (`tsconfig.json` and similar) a source
//! analyzer should load for a directory tree. Three strategies are tried in
//! a fixed order and the first one that finds anything wins:
//!
//! 1. **Property**: patterns the user declared in a property
//! 2. **Discovery**: every file with the well-known name, outside
//!    dependency directories
//! 3. **Synthesis**: a generated manifest listing all selected files
//!
//! # Architecture
//!
//! `manifest-core` sits above the filesystem layer and below hosts such as
//! the CLI:
//!
//! ```text
//!        manifest-cli
//!             |
//!       manifest-core
//!             |
//!        manifest-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use manifest_core::{ManifestConvention, Properties, ResolutionChain, ResolutionContext};
//!
//! let mut properties = Properties::new();
//! properties.set("sonar.typescript.tsconfigPaths", "tsconfig.app.json");
//! let context = ResolutionContext::new("/path/to/project", properties)?;
//!
//! let chain = ResolutionChain::reduced(&ManifestConvention::tsconfig());
//! for manifest in chain.resolve(&context)? {
//!     println!("{manifest}");
//! }
//! ```

pub mod chain;
pub mod config;
pub mod context;
pub mod convention;
pub mod error;
pub mod properties;
pub mod selector;
pub mod strategy;
pub mod synthesizer;

pub use chain::ResolutionChain;
pub use config::{CONFIG_FILE_NAME, ResolverConfig};
pub use context::{HostMode, ResolutionContext};
pub use convention::ManifestConvention;
pub use error::{Error, Result};
pub use properties::Properties;
pub use selector::{ExtensionSelector, FileSelector};
pub use strategy::{
    DiscoveryStrategy, ManifestPath, PropertyStrategy, ResolutionStrategy, SynthesisStrategy,
};
pub use synthesizer::SyntheticManifest;
