//! Resolution strategy abstraction
//!
//! Each strategy is one way of locating manifests. A strategy returns an
//! empty list when it finds nothing, which lets the chain fall through to
//! the next one; it returns an error only when its search could not run to
//! completion.

mod discovery;
mod property;
mod synthesis;

pub use discovery::DiscoveryStrategy;
pub use property::PropertyStrategy;
pub use synthesis::SynthesisStrategy;

use crate::{ResolutionContext, Result};
use manifest_fs::NormalizedPath;

/// Absolute, normalized path of a resolved manifest.
pub type ManifestPath = NormalizedPath;

/// One technique for locating manifests.
pub trait ResolutionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Attempt resolution.
    ///
    /// - `Ok(vec![])`: nothing found, try the next strategy
    /// - `Ok(paths)`: stop here with these manifests
    /// - `Err(_)`: the search failed; abort the whole resolution
    fn resolve(&self, context: &ResolutionContext) -> Result<Vec<ManifestPath>>;
}
