use super::{ManifestPath, ResolutionStrategy};
use crate::{FileSelector, ManifestConvention, ResolutionContext, Result, SyntheticManifest};
use manifest_fs::TempFolder;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Last-resort strategy: generate a manifest listing every selected file.
///
/// Each call enumerates the tree again and writes a new temporary file;
/// nothing is cached between resolutions. Under a restricted host the
/// strategy yields nothing.
pub struct SynthesisStrategy {
    folder: Arc<TempFolder>,
    selector: Arc<dyn FileSelector>,
    compiler_options: Map<String, Value>,
    prefix: String,
    suffix: String,
}

impl SynthesisStrategy {
    pub fn new(folder: Arc<TempFolder>, selector: impl FileSelector + 'static) -> Self {
        let (prefix, suffix) = ManifestConvention::tsconfig().temp_file_affixes();
        Self {
            folder,
            selector: Arc::new(selector),
            compiler_options: Map::new(),
            prefix,
            suffix,
        }
    }

    /// Options embedded verbatim in every generated manifest.
    pub fn with_compiler_options(mut self, options: Map<String, Value>) -> Self {
        self.compiler_options = options;
        self
    }

    /// Name generated files after the convention's manifest file name.
    pub fn named_after(mut self, convention: &ManifestConvention) -> Self {
        (self.prefix, self.suffix) = convention.temp_file_affixes();
        self
    }
}

impl ResolutionStrategy for SynthesisStrategy {
    fn name(&self) -> &str {
        "synthesis"
    }

    fn resolve(&self, context: &ResolutionContext) -> Result<Vec<ManifestPath>> {
        if !context.host_mode().allows_temp_files() {
            tracing::warn!(
                host_mode = %context.host_mode(),
                "Generating a temporary manifest is not supported in this host mode"
            );
            return Ok(Vec::new());
        }

        let mut walker = context.walker();
        for dir in self.selector.skipped_dirs() {
            walker = walker.skip_dir(dir.as_str());
        }

        let mut files = Vec::new();
        for file in walker.iter() {
            let file = file?;
            if self.selector.select(&file) {
                files.push(file);
            }
        }

        let manifest = SyntheticManifest::new(files, self.compiler_options.clone());
        let path = manifest.write_new(&self.folder, &self.prefix, &self.suffix)?;
        tracing::debug!(
            path = %path,
            files = manifest.files.len(),
            "Using generated manifest file"
        );
        Ok(vec![path])
    }
}

impl std::fmt::Debug for SynthesisStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesisStrategy")
            .field("folder", &self.folder.path())
            .field("compiler_options", &self.compiler_options)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .finish_non_exhaustive()
    }
}
