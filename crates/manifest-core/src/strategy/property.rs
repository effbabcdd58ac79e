use super::{ManifestPath, ResolutionStrategy};
use crate::{ManifestConvention, Properties, ResolutionContext, Result};
use std::collections::HashSet;

/// Resolves manifests the user declared through a property.
///
/// Two keys are recognized. When the primary key is present the alias is
/// ignored entirely, even if it is also set; the two are never merged.
#[derive(Debug, Clone)]
pub struct PropertyStrategy {
    key: String,
    alias: String,
}

impl PropertyStrategy {
    pub fn new(key: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            alias: alias.into(),
        }
    }

    pub fn from_convention(convention: &ManifestConvention) -> Self {
        Self::new(&convention.property_key, &convention.property_alias)
    }

    /// The key whose value is used, if either is declared.
    fn selected_key(&self, properties: &Properties) -> Option<&str> {
        if properties.has_key(&self.key) {
            if properties.has_key(&self.alias) {
                tracing::debug!(
                    used = %self.key,
                    ignored = %self.alias,
                    "Both manifest path properties are set; using the primary key"
                );
            }
            Some(self.key.as_str())
        } else if properties.has_key(&self.alias) {
            Some(self.alias.as_str())
        } else {
            None
        }
    }
}

impl ResolutionStrategy for PropertyStrategy {
    fn name(&self) -> &str {
        "property"
    }

    fn resolve(&self, context: &ResolutionContext) -> Result<Vec<ManifestPath>> {
        let properties = context.properties();
        let Some(property) = self.selected_key(properties) else {
            return Ok(Vec::new());
        };

        let mut unique = HashSet::new();
        let patterns: Vec<&str> = properties
            .get_string_array(property)
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .filter(|pattern| unique.insert(*pattern))
            .collect();

        tracing::info!(
            property,
            patterns = %patterns.join(","),
            "Resolving manifest files from property"
        );

        let manifests = context.matcher().resolve_all(patterns.iter().copied())?;

        tracing::info!(
            count = manifests.len(),
            files = ?manifests.iter().map(ManifestPath::as_str).collect::<Vec<_>>(),
            "Found {} manifest file(s)",
            manifests.len()
        );
        Ok(manifests)
    }
}
