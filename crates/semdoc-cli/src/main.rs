use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use semdoc_core::{Config, SemanticConventionSet};
use semdoc_registry::RegistryRenderer;

/// semdoc - Markdown reference generator for semantic attributes
#[derive(Parser)]
#[command(name = "semdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: semdoc.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the attribute registry document
    Registry {
        /// Model JSON file, or a directory of model JSON files
        #[arg(short, long)]
        model: PathBuf,

        /// Output file (overrides the configured output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail if the output file is not up to date instead of writing it
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config if specified
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else if Path::new("semdoc.toml").exists() {
        Config::from_file(Path::new("semdoc.toml")).context("Failed to load semdoc.toml")?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    match cli.command {
        Commands::Registry { model, output, check } => {
            registry_command(&config, &model, output.as_deref(), check, cli.verbose)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Registry command - render (or check) the attribute registry
fn registry_command(
    config: &Config,
    model: &Path,
    output: Option<&Path>,
    check: bool,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("{} {}", "Loading model from:".cyan(), model.display());
    }

    let semconvset = SemanticConventionSet::from_path(model)
        .with_context(|| format!("Failed to load model {}", model.display()))?;

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_path());

    if verbose {
        eprintln!(
            "{} {} conventions, {} attributes",
            "Loaded".cyan(),
            semconvset.models.len(),
            semconvset.attributes().count()
        );
    }

    tracing::debug!(output = %output_path.display(), check, "rendering registry");

    let renderer = RegistryRenderer::new(&semconvset, &config.markdown);

    if check {
        let up_to_date = renderer.is_up_to_date(&output_path)?;
        if up_to_date {
            println!("{} {}", "✓ Up to date:".green(), output_path.display());
            return Ok(());
        }

        println!("{} {}", "✗ Out of date:".red().bold(), output_path.display());
        println!("Run without --check to regenerate it.");
        std::process::exit(1);
    }

    renderer
        .render_registry(&output_path)
        .with_context(|| format!("Failed to write registry {}", output_path.display()))?;

    println!("{} {}", "Registry written to:".green(), output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_registry_args() {
        let cli = Cli::try_parse_from([
            "semdoc",
            "--verbose",
            "registry",
            "--model",
            "model",
            "--output",
            "out.md",
            "--check",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Registry { model, output, check } => {
                assert_eq!(model, PathBuf::from("model"));
                assert_eq!(output, Some(PathBuf::from("out.md")));
                assert!(check);
            }
        }
    }
}
