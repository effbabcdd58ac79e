//! Ordered fallback over resolution strategies

use crate::strategy::{
    DiscoveryStrategy, ManifestPath, PropertyStrategy, ResolutionStrategy, SynthesisStrategy,
};
use crate::{ManifestConvention, ResolutionContext, Result};

/// Runs strategies in priority order and returns the first non-empty result.
///
/// Strategies after the one that produced a result are not invoked. An
/// error from any strategy aborts the chain immediately; an all-empty run
/// returns an empty list, meaning no manifest is available.
pub struct ResolutionChain {
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl ResolutionChain {
    /// Property, then discovery, then synthesis.
    pub fn full(convention: &ManifestConvention, synthesis: SynthesisStrategy) -> Self {
        Self::with_strategies(vec![
            Box::new(PropertyStrategy::from_convention(convention)),
            Box::new(DiscoveryStrategy::from_convention(convention)),
            Box::new(synthesis),
        ])
    }

    /// Property, then discovery; never generates a manifest.
    pub fn reduced(convention: &ManifestConvention) -> Self {
        Self::with_strategies(vec![
            Box::new(PropertyStrategy::from_convention(convention)),
            Box::new(DiscoveryStrategy::from_convention(convention)),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ResolutionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the strategies in the order they run.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn resolve(&self, context: &ResolutionContext) -> Result<Vec<ManifestPath>> {
        for strategy in &self.strategies {
            tracing::debug!(strategy = strategy.name(), "Trying manifest resolution strategy");
            let manifests = strategy.resolve(context)?;
            if !manifests.is_empty() {
                tracing::debug!(
                    strategy = strategy.name(),
                    count = manifests.len(),
                    "Manifests resolved"
                );
                return Ok(manifests);
            }
        }
        tracing::debug!(base_dir = %context.base_dir(), "No manifest available");
        Ok(Vec::new())
    }
}

impl std::fmt::Debug for ResolutionChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionChain")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
