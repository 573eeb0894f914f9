pub mod catalog;
pub mod error;
pub mod logging;

pub use catalog::{
    CatalogLoader, CategoryCatalog, CategoryConfig, CategoryStats, CategoryTable, GalleryCatalog,
    ImageRecord, SiteStats, parse_image_filename, sample_images,
};
pub use error::CatalogError;

use anyhow::{Context, Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const ROOT_SENTINEL: &str = "public";
const ROOT_ENV: &str = "GALLERY_ROOT";
const TABLE_ENV: &str = "GALLERY_CATEGORIES";

fn is_site_root(candidate: &Path) -> bool {
    candidate.join(ROOT_SENTINEL).is_dir()
}

fn site_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_site_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_site_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the site checkout whose `public/` folder holds the gallery images.
///
/// Checks `GALLERY_ROOT`, then the working directory and its ancestors.
pub fn find_site_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ROOT_ENV) {
        if let Some(root) = site_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    bail!("Unable to locate the gallery site root. Set {ROOT_ENV} to a directory containing public/.");
}

/// Resolve the site root from an explicit flag, falling back to discovery.
pub fn resolve_site_root(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            if !path.is_dir() {
                bail!("site root {} is not a directory", path.display());
            }
            fs::canonicalize(path).with_context(|| format!("resolving {}", path.display()))
        }
        None => find_site_root(),
    }
}

/// Category table from an explicit path, `GALLERY_CATEGORIES`, or the built-in one.
pub fn resolve_category_table(explicit: Option<&Path>) -> Result<CategoryTable> {
    if let Some(path) = explicit {
        return CategoryTable::load(path);
    }
    match env::var(TABLE_ENV) {
        Ok(raw) if !raw.trim().is_empty() => CategoryTable::load(Path::new(raw.trim())),
        _ => Ok(CategoryTable::builtin()),
    }
}

pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
