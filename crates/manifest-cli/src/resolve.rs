//! The resolve command: config assembly, chain execution and output

use crate::cli::Cli;
use crate::error::{CliError, Result};
use manifest_core::{HostMode, ManifestPath, ResolverConfig};
use manifest_fs::TempFolder;
use serde_json::Value;
use std::sync::Arc;

/// Build the effective config: file first, then command-line overrides.
pub fn load_config(cli: &Cli) -> Result<ResolverConfig> {
    let mut config = match &cli.config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::discover(&cli.base_dir)?,
    };

    for input in &cli.properties {
        config.properties.apply_override(input)?;
    }
    if cli.restricted {
        config.mode = HostMode::Restricted;
    }
    if cli.no_synthesis {
        config.synthesis = false;
    }
    if !cli.extensions.is_empty() {
        config.extensions = cli
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
    }
    for input in &cli.options {
        let (key, value) = parse_option(input)?;
        config.compiler_options.insert(key, value);
    }

    Ok(config)
}

/// Split `KEY=VALUE`; VALUE is read as JSON and falls back to a string.
fn parse_option(input: &str) -> Result<(String, Value)> {
    let (key, raw) = input
        .split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .ok_or_else(|| CliError::user(format!("Invalid option '{input}': expected KEY=VALUE")))?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.trim().to_string(), value))
}

/// Run the chain for the command line and return the resolved manifests.
///
/// Generated manifests are written where the consumer can still read them
/// after this process exits.
pub fn run_resolve(cli: &Cli) -> Result<Vec<ManifestPath>> {
    let config = load_config(cli)?;
    let folder = match &cli.temp_dir {
        Some(dir) => TempFolder::in_dir(dir)?,
        None => TempFolder::in_dir(std::env::temp_dir())?,
    };

    let context = config.context(&cli.base_dir)?;
    let chain = config.chain(Arc::new(folder));
    tracing::debug!(?chain, base_dir = %context.base_dir(), "Resolving manifests");

    Ok(chain.resolve(&context)?)
}

/// One path per line, or a JSON array.
pub fn render(manifests: &[ManifestPath], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string(manifests)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(manifests
        .iter()
        .map(|path| format!("{path}\n"))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use manifest_test_utils::TestTree;
    use serde_json::json;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("manifest-resolve").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn option_values_are_json_or_string() {
        assert_eq!(parse_option("strict=true").unwrap(), ("strict".into(), json!(true)));
        assert_eq!(
            parse_option("lib=[\"dom\"]").unwrap(),
            ("lib".into(), json!(["dom"]))
        );
        assert_eq!(
            parse_option("target=es2022").unwrap(),
            ("target".into(), json!("es2022"))
        );
        assert!(parse_option("=x").is_err());
        assert!(parse_option("novalue").is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_discovered_config() {
        let tree = TestTree::new();
        tree.file(
            "manifest-resolver.toml",
            r#"
extensions = ["ts"]

[properties]
"sonar.typescript.tsconfigPaths" = "from-file.json"
"#,
        );
        let base = tree.root().to_string_lossy().to_string();
        let cli = parse(&[
            &base,
            "-D",
            "sonar.typescript.tsconfigPaths=from-cli.json",
            "--restricted",
            "-e",
            ".mts",
            "-o",
            "strict=true",
        ]);

        let config = load_config(&cli).unwrap();
        assert_eq!(
            config
                .properties
                .get_string_array("sonar.typescript.tsconfigPaths")
                .unwrap(),
            ["from-cli.json"]
        );
        assert_eq!(config.mode, HostMode::Restricted);
        assert_eq!(config.extensions, vec!["mts"]);
        assert_eq!(config.compiler_options.get("strict"), Some(&json!(true)));
    }

    #[test]
    fn render_plain_and_json() {
        let manifests = vec![
            ManifestPath::new("/p/a/tsconfig.json"),
            ManifestPath::new("/p/b/tsconfig.json"),
        ];
        assert_eq!(
            render(&manifests, false).unwrap(),
            "/p/a/tsconfig.json\n/p/b/tsconfig.json\n"
        );
        assert_eq!(
            render(&manifests, true).unwrap(),
            "[\"/p/a/tsconfig.json\",\"/p/b/tsconfig.json\"]\n"
        );
        assert_eq!(render(&[], false).unwrap(), "");
        assert_eq!(render(&[], true).unwrap(), "[]\n");
    }
}
