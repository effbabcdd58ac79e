//! Whole-chain scenarios across the filesystem and core crates.
//!
//! Each scenario builds a project tree, runs a chain wired the way a host
//! would wire it and checks both the returned paths and what ended up in
//! the temporary folder.

use manifest_core::{
    ExtensionSelector, HostMode, ManifestConvention, ManifestPath, Properties, ResolutionChain,
    ResolutionContext, ResolverConfig, SynthesisStrategy, SyntheticManifest,
};
use manifest_fs::TempFolder;
use manifest_test_utils::TestTree;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A manifest family unrelated to TypeScript, to keep the chain generic.
fn generic_convention() -> ManifestConvention {
    ManifestConvention::new("manifest.json", "manifest.paths", "manifest.path")
}

fn strings(paths: &[ManifestPath]) -> Vec<String> {
    paths.iter().map(|p| p.as_str().to_string()).collect()
}

fn generated(folder: &TempFolder) -> Vec<std::path::PathBuf> {
    let mut entries: Vec<_> = std::fs::read_dir(folder.path().to_native())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    entries.sort();
    entries
}

fn read_manifest(path: &ManifestPath) -> SyntheticManifest {
    serde_json::from_str(&std::fs::read_to_string(path.to_native()).unwrap()).unwrap()
}

// ============================================================================
// Scenario A: declared locations win
// ============================================================================

#[test]
fn declared_pattern_wins_over_discoverable_manifests() {
    init_tracing();
    let tree = TestTree::new();
    tree.files(&[
        "manifest.json",
        "configs/build/manifest.release.json",
        "configs/test/manifest.release.json",
        "configs/test/manifest.debug.json",
    ]);
    let folder = Arc::new(TempFolder::new().unwrap());
    let convention = generic_convention();
    let chain = ResolutionChain::full(
        &convention,
        SynthesisStrategy::new(folder.clone(), |_: &ManifestPath| true).named_after(&convention),
    );

    let props: Properties = [("manifest.paths", "configs/**/manifest.release.json")]
        .into_iter()
        .collect();
    let ctx = ResolutionContext::new(tree.root(), props).unwrap();

    assert_eq!(
        strings(&chain.resolve(&ctx).unwrap()),
        vec![
            tree.abs("configs/build/manifest.release.json"),
            tree.abs("configs/test/manifest.release.json"),
        ]
    );
    assert!(generated(&folder).is_empty());
}

#[test]
fn declared_literal_path_is_the_only_result() {
    let tree = TestTree::new();
    tree.files(&["custom/manifest.json", "manifest.json"]);
    let props: Properties = [("manifest.paths", "custom/manifest.json")]
        .into_iter()
        .collect();
    let ctx = ResolutionContext::new(tree.root(), props).unwrap();

    let found = ResolutionChain::reduced(&generic_convention())
        .resolve(&ctx)
        .unwrap();
    assert_eq!(strings(&found), vec![tree.abs("custom/manifest.json")]);
}

// ============================================================================
// Scenario B: discovery skips the dependency directory
// ============================================================================

#[test]
fn discovery_skips_dependency_directory_at_any_depth() {
    init_tracing();
    let tree = TestTree::new();
    tree.files(&[
        "services/api/manifest.json",
        "node_modules/pkg/manifest.json",
        "services/web/node_modules/dep/manifest.json",
        "services/web/manifest.json",
        "manifest.json.bak",
    ]);
    let ctx = ResolutionContext::new(tree.root(), Properties::new()).unwrap();

    let found = ResolutionChain::reduced(&generic_convention())
        .resolve(&ctx)
        .unwrap();
    assert_eq!(
        strings(&found),
        vec![
            tree.abs("services/api/manifest.json"),
            tree.abs("services/web/manifest.json"),
        ]
    );
}

// ============================================================================
// Scenario C: synthesis as the last resort
// ============================================================================

#[test]
fn synthesis_lists_selected_files_with_options() {
    init_tracing();
    let tree = TestTree::new();
    tree.files(&[
        "src/index.ts",
        "src/view/App.tsx",
        "src/styles.css",
        "node_modules/lib/index.ts",
    ]);
    let folder = Arc::new(TempFolder::new().unwrap());

    let mut config = ResolverConfig::default();
    config
        .compiler_options
        .insert("allowJs".to_string(), serde_json::json!(true));
    let ctx = config.context(tree.root()).unwrap();

    let found = config.chain(folder.clone()).resolve(&ctx).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(generated(&folder), vec![found[0].to_native()]);

    let name = found[0].file_name().unwrap();
    assert!(name.starts_with("tsconfig-") && name.ends_with(".json"), "{name}");

    let manifest = read_manifest(&found[0]);
    assert_eq!(
        manifest.files,
        vec![tree.abs("src/index.ts"), tree.abs("src/view/App.tsx")]
    );
    assert_eq!(
        serde_json::Value::Object(manifest.compiler_options),
        serde_json::json!({"allowJs": true})
    );
}

#[test]
fn synthesis_with_closure_selector_embeds_options_verbatim() {
    let tree = TestTree::new();
    tree.files(&["a.ts", "b.ts", "c.js"]);
    let folder = Arc::new(TempFolder::new().unwrap());
    let options = serde_json::json!({"target": "es2020", "paths": {"@/*": ["src/*"]}});
    let serde_json::Value::Object(options) = options else {
        unreachable!()
    };

    let chain = ResolutionChain::full(
        &generic_convention(),
        SynthesisStrategy::new(folder.clone(), |path: &ManifestPath| {
            path.extension() == Some("ts")
        })
        .with_compiler_options(options.clone()),
    );
    let ctx = ResolutionContext::new(tree.root(), Properties::new()).unwrap();

    let found = chain.resolve(&ctx).unwrap();
    let manifest = read_manifest(&found[0]);
    assert_eq!(manifest.files, vec![tree.abs("a.ts"), tree.abs("b.ts")]);
    assert_eq!(manifest.compiler_options, options);
}

#[test]
fn synthesis_with_no_selected_files_still_writes_a_manifest() {
    let tree = TestTree::new();
    tree.file("README.md", "");
    let folder = Arc::new(TempFolder::new().unwrap());
    let chain = ResolutionChain::full(
        &ManifestConvention::tsconfig(),
        SynthesisStrategy::new(folder.clone(), ExtensionSelector::typescript()),
    );
    let ctx = ResolutionContext::new(tree.root(), Properties::new()).unwrap();

    let found = chain.resolve(&ctx).unwrap();
    assert_eq!(found.len(), 1);
    assert!(read_manifest(&found[0]).files.is_empty());
}

// ============================================================================
// Scenario D: restricted host
// ============================================================================

#[test]
fn restricted_host_never_touches_temp_folder() {
    init_tracing();
    let tree = TestTree::new();
    tree.files(&["src/index.ts", "src/util.ts"]);
    let folder = Arc::new(TempFolder::new().unwrap());
    let chain = ResolutionChain::full(
        &ManifestConvention::tsconfig(),
        SynthesisStrategy::new(folder.clone(), ExtensionSelector::typescript()),
    );
    let ctx = ResolutionContext::new(tree.root(), Properties::new())
        .unwrap()
        .with_host_mode(HostMode::Restricted);

    assert!(chain.resolve(&ctx).unwrap().is_empty());
    assert!(generated(&folder).is_empty());
}

// ============================================================================
// Host-owned temporary folders
// ============================================================================

#[test]
fn manifests_in_host_folder_outlive_the_folder_handle() {
    let tree = TestTree::new();
    tree.file("main.ts", "");
    let host_dir = tempfile::TempDir::new().unwrap();

    let found = {
        let folder = Arc::new(TempFolder::in_dir(host_dir.path()).unwrap());
        let config = ResolverConfig::default();
        let ctx = config.context(tree.root()).unwrap();
        config.chain(folder).resolve(&ctx).unwrap()
    };

    assert!(found[0].is_file());
    assert_eq!(read_manifest(&found[0]).files, vec![tree.abs("main.ts")]);
}
