//! Literal-or-glob file pattern resolution
//!
//! A pattern is first tried as a literal path. Only when that does not name
//! an existing regular file is it compiled as a glob and matched against the
//! files under the base directory.

use crate::{FileWalker, NormalizedPath, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::collections::HashSet;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Resolves patterns against a fixed base directory.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    base: NormalizedPath,
}

impl PatternMatcher {
    /// `base` should be absolute; relative patterns are rooted there.
    pub fn new(base: NormalizedPath) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &NormalizedPath {
        &self.base
    }

    /// Resolve `pattern` as a plain path.
    ///
    /// Absolute patterns are taken as-is, relative ones are joined to the
    /// base. Returns the normalized path when it names a regular file.
    pub fn literal(&self, pattern: &str) -> Option<NormalizedPath> {
        let candidate = self.anchor(pattern);
        candidate.is_file().then_some(candidate)
    }

    /// Resolve one pattern to the files it names.
    ///
    /// The literal interpretation wins when it exists. Otherwise glob
    /// matches are returned in walk order. Relative globs are matched
    /// against base-relative paths, absolute globs against absolute paths;
    /// `*` and `?` never cross a `/`. A pattern with invalid glob syntax
    /// matches nothing.
    pub fn resolve(&self, pattern: &str) -> Result<Vec<NormalizedPath>> {
        tracing::debug!(pattern, base = %self.base, "Resolving file pattern");
        if let Some(file) = self.literal(pattern) {
            return Ok(vec![file]);
        }

        let anchored = self.anchor(pattern);
        let (glob_text, relative) = match anchored.relative_to(&self.base) {
            Some(rel) => (rel.to_string(), true),
            None => (anchored.as_str().to_string(), false),
        };

        if !glob_text.contains(GLOB_META) {
            tracing::debug!(pattern, "No file at literal path and no wildcard present");
            return Ok(Vec::new());
        }

        let matcher = match compile(&glob_text) {
            Ok(matcher) => matcher,
            Err(err) => {
                tracing::warn!(pattern, error = %err, "Ignoring invalid file pattern");
                return Ok(Vec::new());
            }
        };

        let walk_root = if relative {
            self.base.join(&literal_prefix(&glob_text))
        } else {
            NormalizedPath::new(literal_prefix(&glob_text))
        };
        if !walk_root.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for file in FileWalker::new(walk_root).iter() {
            let file = file?;
            let subject = if relative {
                match file.relative_to(&self.base) {
                    Some(rel) => rel,
                    None => continue,
                }
            } else {
                file.as_str()
            };
            if matcher.is_match(subject) {
                matches.push(file);
            }
        }
        Ok(matches)
    }

    /// Resolve several patterns and union the results.
    ///
    /// Output order is pattern order, then per-pattern order; a file matched
    /// by more than one pattern appears once, at its first position.
    pub fn resolve_all<'a, I>(&self, patterns: I) -> Result<Vec<NormalizedPath>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        for pattern in patterns {
            for file in self.resolve(pattern)? {
                if seen.insert(file.clone()) {
                    resolved.push(file);
                }
            }
        }
        Ok(resolved)
    }

    fn anchor(&self, pattern: &str) -> NormalizedPath {
        let path = NormalizedPath::new(pattern);
        if path.is_absolute() {
            path
        } else {
            self.base.join(pattern)
        }
    }
}

fn compile(glob: &str) -> std::result::Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(glob)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// The leading wildcard-free directories of a glob.
///
/// `src/**/tsconfig.json` gives `src`, `/abs/dir/*.json` gives `/abs/dir`
/// and `*.json` gives the empty string.
fn literal_prefix(glob: &str) -> String {
    let mut segments: Vec<&str> = glob.split('/').collect();
    // the final segment names files, never the directory to walk
    segments.pop();
    let fixed: Vec<&str> = segments
        .into_iter()
        .take_while(|segment| !segment.contains(GLOB_META))
        .collect();
    let prefix = fixed.join("/");
    if prefix.is_empty() && glob.starts_with('/') {
        "/".to_string()
    } else {
        prefix
    }
}
