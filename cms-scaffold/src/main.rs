//! cms-scaffold CLI tool

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cms_scaffold::{observability, ArtifactKind};
use commands::{ConfigOverrides, GenerateCommand, ListCommand, RenderCommand, ScaffoldContext};

#[derive(Parser)]
#[command(name = "cms-scaffold")]
#[command(version)]
#[command(
    about = "Generate schema, route and controller stubs for CMS entities",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Directory scaffolds are written under (default: src/api)
    #[arg(long, global = true, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Extension of generated route and controller files (default: js)
    #[arg(long, global = true, value_name = "EXT")]
    ext: Option<String>,

    /// Entity manifest (.json or .toml) replacing the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Configuration file (default: ./scaffold.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log generator activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write scaffolds for every entity (the default)
    Generate {
        /// Only scaffold these entities
        #[arg(long, value_name = "ENTITY")]
        only: Vec<String>,
        /// Show what would be written without touching disk
        #[arg(long)]
        dry_run: bool,
    },
    /// List entities and the paths their scaffolds use
    List,
    /// Print one rendered artifact to stdout
    Render {
        /// Entity name (e.g. `cart-item`)
        entity: String,
        /// Artifact to render
        #[arg(value_enum)]
        artifact: ArtifactKind,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.global.verbose)?;

    let config = ConfigOverrides {
        config_file: cli.global.config,
        base_dir: cli.global.base_dir,
        script_extension: cli.global.ext,
        manifest: cli.global.manifest,
    }
    .resolve()?;
    let context = ScaffoldContext::new(&config)?;

    match cli.command.unwrap_or(Commands::Generate {
        only: Vec::new(),
        dry_run: false,
    }) {
        Commands::Generate { only, dry_run } => {
            GenerateCommand::new(only, dry_run).execute(&context)?;
        }
        Commands::List => {
            ListCommand::execute(&context)?;
        }
        Commands::Render { entity, artifact } => {
            RenderCommand::new(entity, artifact).execute(&context)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["cms-scaffold"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.global.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cms-scaffold",
            "generate",
            "--only",
            "cart",
            "--only",
            "cart-item",
            "--base-dir",
            "out",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.global.base_dir, Some(PathBuf::from("out")));
        match cli.command {
            Some(Commands::Generate { only, dry_run }) => {
                assert_eq!(only, vec!["cart", "cart-item"]);
                assert!(dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_render_artifact_values() {
        let cli = Cli::try_parse_from(["cms-scaffold", "render", "cart", "controller"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Render { artifact: ArtifactKind::Controller, .. })
        ));
        assert!(Cli::try_parse_from(["cms-scaffold", "render", "cart", "migration"]).is_err());
    }
}
