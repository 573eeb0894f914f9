//! Image counts for one category or the whole site.
//!
//! Usage:
//!   gallery-stats                 # site-wide totals per time slot
//!   gallery-stats --category work # per-label counts for one gallery
//!   gallery-stats --category morning,night
//!
//! Unknown categories fail the run; site-wide totals never do.

use anyhow::{Result, bail};
use clap::Parser;
use gallery_catalog::{
    CatalogLoader, logging, resolve_category_table, resolve_site_root, split_list,
};
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gallery-stats")]
#[command(about = "Print image counts for gallery categories as JSON")]
struct Cli {
    /// Site root containing public/images/gallery; discovered when omitted.
    #[arg(long)]
    root: Option<PathBuf>,
    /// Optional category table (JSON); defaults to the built-in table.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Comma- or space-separated category keys.
    #[arg(long)]
    category: Option<String>,
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
    let root = resolve_site_root(cli.root.as_deref())?;
    let table = resolve_category_table(cli.config.as_deref())?;
    let loader = CatalogLoader::new(&root, table);

    let output = match cli.category.as_deref().map(split_list) {
        None => serde_json::to_value(loader.site_stats())?,
        Some(keys) if keys.is_empty() => bail!("--category given without any category keys"),
        Some(keys) if keys.len() == 1 => serde_json::to_value(loader.stats(&keys[0])?)?,
        Some(keys) => {
            let mut by_key = Map::new();
            for key in keys {
                let stats = loader.stats(&key)?;
                by_key.insert(key, serde_json::to_value(stats)?);
            }
            Value::Object(by_key)
        }
    };

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
