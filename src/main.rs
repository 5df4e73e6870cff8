//! context-stack CLI
//!
//! Entry point for the `ctx-stack` command-line tool. Loads the scope
//! directories named on the command line, resolves them, and renders
//! the requested report as text or JSON.

use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

use context_stack::conflict::detect_conflicts;
use context_stack::loader::{load_hierarchy, HierarchyPaths};
use context_stack::recommend::generate_recommendations;
use context_stack::report;
use context_stack::resolve::resolve_config;
use context_stack::scope::{ScopeConfig, ScopeLevel};

#[derive(Parser)]
#[command(name = "ctx-stack")]
#[command(about = "Resolve and diagnose layered context configuration", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the hierarchy and show the merged configuration
    Resolve(ScopeArgs),

    /// Detect conflicts and report the health score
    Doctor(ScopeArgs),

    /// Suggest improvements for the merged configuration
    Recommend(ScopeArgs),
}

#[derive(Args)]
struct ScopeArgs {
    /// Task scope directory
    #[arg(long)]
    task: Option<PathBuf>,

    /// Project scope directory (e.g., .context in the repo)
    #[arg(long)]
    project: Option<PathBuf>,

    /// User scope directory (e.g., ~/.config/ctx-stack)
    #[arg(long)]
    user: Option<PathBuf>,

    /// System scope directory
    #[arg(long)]
    system: Option<PathBuf>,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Doctor(args) => run_doctor(args),
        Commands::Recommend(args) => run_recommend(args),
    }
}

fn load_configs(args: &ScopeArgs) -> Vec<ScopeConfig> {
    let paths = HierarchyPaths {
        task: args.task.clone(),
        project: args.project.clone(),
        user: args.user.clone(),
        system: args.system.clone(),
    };

    match load_hierarchy(&paths) {
        Ok(configs) => configs,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    }
}

fn scope_map(configs: &[ScopeConfig]) -> BTreeMap<ScopeLevel, ScopeConfig> {
    configs.iter().map(|c| (c.scope, c.clone())).collect()
}

fn print_json(json: Result<String, serde_json::Error>) {
    match json {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            process::exit(2);
        }
    }
}

fn run_resolve(args: ScopeArgs) {
    let configs = load_configs(&args);
    let merged = resolve_config(&configs);

    if args.json {
        print_json(merged.to_json());
    } else {
        print!("{}", report::render_merged(&merged));
    }
}

fn run_doctor(args: ScopeArgs) {
    let configs = load_configs(&args);
    let merged = resolve_config(&configs);
    let conflicts = detect_conflicts(&merged, &scope_map(&configs));

    if args.json {
        print_json(conflicts.to_json());
    } else {
        print!("{}", report::render_conflicts(&conflicts));
    }

    if conflicts.has_errors() {
        process::exit(1);
    }
}

fn run_recommend(args: ScopeArgs) {
    let configs = load_configs(&args);
    let merged = resolve_config(&configs);
    let scopes = scope_map(&configs);
    let conflicts = detect_conflicts(&merged, &scopes);
    let recommendations = generate_recommendations(&merged, &scopes, &conflicts);

    if args.json {
        print_json(recommendations.to_json());
    } else {
        print!("{}", report::render_recommendations(&recommendations));
    }
}
