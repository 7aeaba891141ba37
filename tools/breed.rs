// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
Flower Breeding Tool

Prints the exact offspring distribution of a cross.

Usage:
  cargo run --bin breed -- <species> <first> <second> [--json]

Example:
  cargo run --bin breed -- roses RrYyWwSs "RRyyWWSs:1 RRyyWWss:1" --order probability
*/

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use petal::catalog::Catalog;
use petal::config::{load_config_or_default, validate_config, OutcomeOrder, PetalConfig};
use petal::observability::{debug_flags_help, init_logging, is_debug_flag, parse_debug_flags};
use petal::report::{render_species_list, render_table};
use petal::services::{BreedRequest, BreedingService, CatalogBreedingService};

/// Exact offspring odds for a flower cross
#[derive(Parser, Debug)]
#[command(name = "breed", version, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Species key (see --list-species)
    #[arg(required_unless_present = "list_species")]
    species: Option<String>,

    /// First parent: a genotype ("RrYyWw") or weighted list ("RRyyww:1 Rryyww:2")
    #[arg(required_unless_present = "list_species")]
    first: Option<String>,

    /// Second parent, same notation as the first
    #[arg(required_unless_present = "list_species")]
    second: Option<String>,

    /// Configuration file (default: search for petal_configuration.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Species catalog TOML file (default: built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Digits after the decimal point in percentages
    #[arg(long)]
    precision: Option<usize>,

    /// Outcome order
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    /// Do not append " (seed)" to seed-grown phenotypes
    #[arg(long, default_value_t = false)]
    no_seed_annotation: bool,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// List available species and exit
    #[arg(long, default_value_t = false)]
    list_species: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum OrderArg {
    Genotype,
    Probability,
}

impl From<OrderArg> for OutcomeOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Genotype => OutcomeOrder::Genotype,
            OrderArg::Probability => OutcomeOrder::Probability,
        }
    }
}

impl Args {
    /// Config overrides for flags given on the command line
    fn config_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(path) = &self.catalog {
            overrides.insert("catalog_path".to_string(), path.display().to_string());
        }
        if let Some(precision) = self.precision {
            overrides.insert("percent_precision".to_string(), precision.to_string());
        }
        if let Some(order) = self.order {
            overrides.insert("order".to_string(), OutcomeOrder::from(order).to_string());
        }
        if self.no_seed_annotation {
            overrides.insert("annotate_seed".to_string(), "false".to_string());
        }
        overrides
    }
}

fn load_catalog(config: &PetalConfig) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Catalog::builtin().context("Failed to load built-in catalog"),
    }
}

fn main() -> Result<()> {
    // --debug-<crate> flags are handled by the observability layer, not clap
    let debug_flags = parse_debug_flags();
    let args = Args::parse_from(env::args().filter(|arg| !is_debug_flag(arg)));

    let overrides = args.config_overrides();
    let config = load_config_or_default(args.config.as_deref(), Some(&overrides))
        .context("Failed to load configuration")?;
    validate_config(&config)?;

    let _logging = init_logging(&debug_flags, &config.logging)?;
    debug!(?config, "configuration loaded");

    let catalog = load_catalog(&config)?;
    info!(species = catalog.len(), "catalog ready");
    let service = CatalogBreedingService::new(Arc::new(catalog), config.output.clone());

    if args.list_species {
        let species = service.species();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&species)?);
        } else {
            print!("{}", render_species_list(&species));
        }
        return Ok(());
    }

    let (Some(species), Some(first), Some(second)) = (args.species, args.first, args.second) else {
        bail!("species and both parents are required");
    };

    let report = service.breed(&BreedRequest::new(species, first, second))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(&report));
    }
    Ok(())
}
