//! Prints gallery catalogs as JSON for the page layer.
//!
//! Usage:
//!   gallery-catalog load morning
//!   gallery-catalog all --pretty
//!   gallery-catalog sample night --count 4
//!
//! Logs go to stderr (`RUST_LOG` overrides the default level); stdout only
//! ever carries the JSON document.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gallery_catalog::catalog::DEFAULT_SAMPLE_COUNT;
use gallery_catalog::{
    CatalogLoader, logging, resolve_category_table, resolve_site_root, sample_images,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gallery-catalog")]
#[command(about = "Scan gallery folders and print their catalogs as JSON")]
struct Cli {
    /// Site root containing public/images/gallery; discovered when omitted.
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Optional category table (JSON); defaults to the built-in table.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Catalog for one category.
    Load { category: String },
    /// Catalogs for every configured category, in table order.
    All,
    /// Placeholder records for a category.
    Sample {
        category: String,
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;
    let table = resolve_category_table(cli.config.as_deref())?;

    match cli.command {
        Command::Load { ref category } => {
            let root = resolve_site_root(cli.root.as_deref())?;
            let loader = CatalogLoader::new(&root, table);
            let catalog = loader
                .load(category)
                .with_context(|| format!("loading gallery under {}", root.display()))?;
            print_json(&catalog, cli.pretty)
        }
        Command::All => {
            let root = resolve_site_root(cli.root.as_deref())?;
            let loader = CatalogLoader::new(&root, table);
            print_json(&loader.load_all(), cli.pretty)
        }
        Command::Sample {
            ref category,
            count,
        } => print_json(&sample_images(&table, category, count), cli.pretty),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serializing catalog")?;
    println!("{rendered}");
    Ok(())
}
