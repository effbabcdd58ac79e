use super::{ManifestPath, ResolutionStrategy};
use crate::{ManifestConvention, ResolutionContext, Result};

/// Finds manifests by their well-known file name.
///
/// Dependency directories are pruned from the walk, so a manifest shipped
/// inside an installed package is never picked up. The match is on whole
/// path segments: `node_modules_cache/` is walked normally.
#[derive(Debug, Clone)]
pub struct DiscoveryStrategy {
    file_name: String,
    excluded_dir: String,
}

impl DiscoveryStrategy {
    pub fn new(file_name: impl Into<String>, excluded_dir: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            excluded_dir: excluded_dir.into(),
        }
    }

    pub fn from_convention(convention: &ManifestConvention) -> Self {
        Self::new(&convention.file_name, &convention.excluded_dir)
    }
}

impl ResolutionStrategy for DiscoveryStrategy {
    fn name(&self) -> &str {
        "discovery"
    }

    fn resolve(&self, context: &ResolutionContext) -> Result<Vec<ManifestPath>> {
        let base_dir = context.base_dir();
        if base_dir.has_segment(&self.excluded_dir) {
            tracing::info!(
                base_dir = %base_dir,
                excluded_dir = %self.excluded_dir,
                "Base directory lies inside an excluded directory; skipping lookup"
            );
            return Ok(Vec::new());
        }

        let mut manifests = Vec::new();
        for file in context.walker().skip_dir(self.excluded_dir.as_str()).iter() {
            let file = file?;
            if file.file_name() == Some(self.file_name.as_str()) {
                manifests.push(file);
            }
        }

        tracing::info!(
            count = manifests.len(),
            files = ?manifests.iter().map(ManifestPath::as_str).collect::<Vec<_>>(),
            "Found {} {} file(s)",
            manifests.len(),
            self.file_name
        );
        Ok(manifests)
    }
}
