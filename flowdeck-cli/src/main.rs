//! FlowDeck CLI — inspect and export flow catalogs without the TUI.
//!
//! Commands:
//! - `summary` — role/flow/step counts
//! - `list` — roles, or one role's flows with their stories
//! - `export` — dump the catalog as JSON

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use flowdeck_core::{catalog, Catalog, Summary};

#[derive(Parser)]
#[command(name = "flowdeck", about = "FlowDeck CLI — user-flow documentation tooling")]
struct Cli {
    /// Path to a TOML catalog. Defaults to the built-in Zornicare set.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print role/flow/step counts.
    Summary,
    /// List roles, or one role's flows.
    List {
        /// Role id to expand (e.g. administrator).
        #[arg(long)]
        role: Option<String>,
    },
    /// Export the catalog as JSON.
    Export {
        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("load catalog from {}", path.display()))?,
        None => catalog::builtin(),
    };

    match cli.command {
        Commands::Summary => cmd_summary(&catalog),
        Commands::List { role } => cmd_list(&catalog, role.as_deref()),
        Commands::Export { output, pretty } => cmd_export(&catalog, output, pretty),
    }
}

fn cmd_summary(catalog: &Catalog) -> Result<()> {
    let summary = Summary::of(catalog);
    println!("Roles: {}", summary.roles);
    println!("Flows: {}", summary.flows);
    println!("Steps: {}", summary.steps);
    Ok(())
}

fn cmd_list(catalog: &Catalog, role_id: Option<&str>) -> Result<()> {
    match role_id {
        None => {
            for role in &catalog.roles {
                println!("{:<16} {} ({} flows)", role.id, role.name, role.flows.len());
            }
        }
        Some(id) => {
            let Some(role) = catalog.role(id) else {
                bail!("no such role: {id}");
            };
            println!("{} — {} flows", role.name, role.flows.len());
            for flow in &role.flows {
                println!();
                println!("  {:<28} {}", flow.id, flow.title);
                println!("    {}", flow.story);
                println!("    {} steps, touchpoints: {}", flow.steps.len(), flow.touchpoints.join(", "));
            }
        }
    }
    Ok(())
}

fn cmd_export(catalog: &Catalog, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(catalog)?
    } else {
        serde_json::to_string(catalog)?
    };
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
