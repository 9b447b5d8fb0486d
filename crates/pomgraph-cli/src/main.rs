use clap::{Parser, Subcommand};
use colored::Colorize;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pomgraph_core::{Config, DependencyGraph, OutputFormat, DEFAULT_CONFIG_FILE};
use pomgraph_maven::{Manifest, MavenAnalyzer};

/// pomgraph - Declared dependency graphs for Maven projects
#[derive(Parser)]
#[command(name = "pomgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: pomgraph.toml)
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
    /// Print the declared dependency graph of a build target
    Graph {
        /// Project directory, pom.xml path, or module identifier
        target: String,

        /// Write the graph to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the manifest path a build target resolves to
    Resolve {
        /// Project directory, pom.xml path, or module identifier
        target: String,
    },

    /// Show the manifest's coordinate, parent, modules and dependencies
    Inspect {
        /// Project directory, pom.xml path, or module identifier
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(manifest_name = %config.maven.manifest_name, "using config");

    let analyzer = MavenAnalyzer::new(&config);

    match cli.command {
        Commands::Graph { target, output } => graph_command(&config, &analyzer, &target, output.as_deref()),
        Commands::Resolve { target } => resolve_command(&analyzer, &target),
        Commands::Inspect { target } => inspect_command(&analyzer, &target),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Explicit config path, then `pomgraph.toml` in the working directory, then defaults
fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(config_path) = path {
        return Config::from_file(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()));
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return Config::from_file(default_path)
            .with_context(|| format!("Failed to load config {}", default_path.display()));
    }

    tracing::debug!("no config file found, using defaults");
    Ok(Config::default())
}

/// Graph command - emit the declared dependency graph
fn graph_command(config: &Config, analyzer: &MavenAnalyzer, target: &str, output: Option<&Path>) -> Result<()> {
    let analysis = analyzer
        .analyze(target)
        .with_context(|| format!("Failed to analyze build target {target:?}"))?;

    let rendered = match config.output.format {
        OutputFormat::Json if config.output.pretty => serde_json::to_string_pretty(&analysis.graph)?,
        OutputFormat::Json => serde_json::to_string(&analysis.graph)?,
        OutputFormat::Text => render_graph_text(&analysis.graph),
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write graph to {}", path.display()))?;
            eprintln!("{} {}", "Graph saved to:".green(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Resolve command - show which manifest a target maps to
fn resolve_command(analyzer: &MavenAnalyzer, target: &str) -> Result<()> {
    let path = analyzer
        .resolver()
        .resolve(target)
        .with_context(|| format!("Failed to resolve build target {target:?}"))?;

    println!("{}", path.display());
    Ok(())
}

/// Inspect command - print the decoded manifest
fn inspect_command(analyzer: &MavenAnalyzer, target: &str) -> Result<()> {
    let (path, manifest) = analyzer
        .resolve_manifest(target)
        .with_context(|| format!("Failed to load manifest for {target:?}"))?;

    println!("{} {}", "Manifest:".bold(), path.display());
    print_manifest(&manifest);
    Ok(())
}

fn print_manifest(manifest: &Manifest) {
    println!("{} {}", "Project:".bold(), manifest.coordinate.to_string().green());
    if !manifest.name.is_empty() {
        println!("{} {}", "Name:".bold(), manifest.name);
    }
    if !manifest.description.is_empty() {
        println!("{} {}", "Description:".bold(), manifest.description);
    }
    if !manifest.url.is_empty() {
        println!("{} {}", "URL:".bold(), manifest.url);
    }
    if let Some(parent) = &manifest.parent {
        println!("{} {}", "Parent:".bold(), parent);
    }

    if manifest.is_aggregator() {
        println!();
        println!("{}", "Modules:".bold());
        for module in &manifest.modules {
            println!("  {}", module);
        }
    }

    println!();
    println!("{} {}", "Dependencies:".bold(), manifest.dependencies.len());
    for dep in &manifest.dependencies {
        let version = if dep.version.is_empty() { "(unversioned)".yellow() } else { dep.version.normal() };
        let scope = if dep.scope.is_empty() { String::new() } else { format!(" [{}]", dep.scope) };
        println!("  {} {}{}", dep.id().cyan(), version, scope.dimmed());
    }
}

/// Plain listing of a graph: direct imports in order, then distinct packages
fn render_graph_text(graph: &DependencyGraph) -> String {
    let mut out = String::new();

    out.push_str(&format!("Direct dependencies ({}):\n", graph.len_direct()));
    for import in graph.direct() {
        out.push_str(&format!("  {}\n", import.resolved));
    }

    out.push_str(&format!("\nPackages ({}):\n", graph.len_transitive()));
    for package in graph.packages_sorted() {
        out.push_str(&format!("  {}\n", package.id));
    }

    out.push_str("\nNote: depth information is not available; packages are the declared set.");
    out
}
