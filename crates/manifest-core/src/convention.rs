//! Naming conventions of a manifest family
//!
//! A convention tells the strategies which properties to read, which file
//! name to look for and which dependency directory to skip.

use serde::{Deserialize, Serialize};

/// Well-known TypeScript project manifest name
pub const TSCONFIG_FILE_NAME: &str = "tsconfig.json";

/// Primary property declaring TypeScript manifest locations
pub const TSCONFIG_PATHS: &str = "sonar.typescript.tsconfigPaths";

/// Legacy alias of [`TSCONFIG_PATHS`], ignored when the primary key is set
pub const TSCONFIG_PATHS_ALIAS: &str = "sonar.typescript.tsconfigPath";

/// Directory holding installed dependencies
pub const DEPENDENCY_DIR: &str = "node_modules";

/// File names, property keys and exclusions for one kind of manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConvention {
    /// Exact final path segment recognized by discovery
    pub file_name: String,
    /// Property consulted first
    pub property_key: String,
    /// Property consulted only when `property_key` is absent
    pub property_alias: String,
    /// Directory segment whose subtrees discovery never enters
    pub excluded_dir: String,
}

impl ManifestConvention {
    /// Convention for a custom manifest family, skipping `node_modules`.
    pub fn new(
        file_name: impl Into<String>,
        property_key: impl Into<String>,
        property_alias: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            property_key: property_key.into(),
            property_alias: property_alias.into(),
            excluded_dir: DEPENDENCY_DIR.to_string(),
        }
    }

    /// `tsconfig.json` declared through the `sonar.typescript.tsconfigPath(s)` properties.
    pub fn tsconfig() -> Self {
        Self::new(TSCONFIG_FILE_NAME, TSCONFIG_PATHS, TSCONFIG_PATHS_ALIAS)
    }

    pub fn with_excluded_dir(mut self, dir: impl Into<String>) -> Self {
        self.excluded_dir = dir.into();
        self
    }

    /// Name parts for generated manifests: `tsconfig.json` gives
    /// (`"tsconfig-"`, `".json"`).
    pub fn temp_file_affixes(&self) -> (String, String) {
        match self.file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (format!("{stem}-"), format!(".{ext}")),
            _ => (format!("{}-", self.file_name), String::new()),
        }
    }
}

impl Default for ManifestConvention {
    fn default() -> Self {
        Self::tsconfig()
    }
}
