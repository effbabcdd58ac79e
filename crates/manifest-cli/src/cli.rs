//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Resolve the project manifests an analyzer should load for a directory
///
/// Tries, in order: manifests declared through properties, manifests found
/// by name outside dependency directories, and finally a generated manifest
/// listing every source file. Prints one absolute path per line.
#[derive(Parser, Debug)]
#[command(name = "manifest-resolve")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project base directory
    #[arg(default_value = ".")]
    pub base_dir: PathBuf,

    /// Config file [default: manifest-resolver.toml in the base directory, if present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set a property, e.g. -D sonar.typescript.tsconfigPaths=tsconfig.app.json
    #[arg(short = 'D', long = "property", value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Run as a restricted host: never generate a manifest
    #[arg(long)]
    pub restricted: bool,

    /// Stop after discovery instead of generating a manifest
    #[arg(long)]
    pub no_synthesis: bool,

    /// Source extension for generated manifests (replaces the configured list)
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Compiler option for generated manifests; VALUE is JSON, or a plain string
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Directory receiving generated manifests [default: system temp dir]
    #[arg(long, value_name = "DIR", env = "MANIFEST_RESOLVER_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Output as a JSON array for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["manifest-resolve"]).unwrap();
        assert_eq!(cli.base_dir, PathBuf::from("."));
        assert!(cli.properties.is_empty());
        assert!(!cli.restricted && !cli.no_synthesis && !cli.json);
    }

    #[test]
    fn repeatable_flags_accumulate() {
        let cli = Cli::try_parse_from([
            "manifest-resolve",
            "proj",
            "-D",
            "a=1",
            "--property",
            "b=2",
            "-e",
            "ts",
            "-e",
            "mts",
            "-o",
            "strict=true",
        ])
        .unwrap();

        assert_eq!(cli.base_dir, PathBuf::from("proj"));
        assert_eq!(cli.properties, vec!["a=1", "b=2"]);
        assert_eq!(cli.extensions, vec!["ts", "mts"]);
        assert_eq!(cli.options, vec!["strict=true"]);
    }
}
