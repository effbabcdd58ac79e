//! Synthetic manifest construction and serialization

use crate::Result;
use manifest_fs::{NormalizedPath, TempFolder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A generated manifest listing files explicitly.
///
/// Serializes to `{"files":[...],"compilerOptions":{...}}`. The options are
/// opaque here and written exactly as supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticManifest {
    /// Absolute file paths in enumeration order
    pub files: Vec<String>,
    pub compiler_options: Map<String, Value>,
}

impl SyntheticManifest {
    pub fn new<I>(files: I, compiler_options: Map<String, Value>) -> Self
    where
        I: IntoIterator<Item = NormalizedPath>,
    {
        Self {
            files: files.into_iter().map(|f| f.as_str().to_string()).collect(),
            compiler_options,
        }
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Write to a newly allocated file in `folder` named
    /// `{prefix}<random>{suffix}` and return its path.
    pub fn write_new(&self, folder: &TempFolder, prefix: &str, suffix: &str) -> Result<NormalizedPath> {
        let json = self.to_json()?;
        Ok(folder.write_new(prefix, suffix, &json)?)
    }
}
