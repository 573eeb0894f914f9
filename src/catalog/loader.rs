//! Directory scan and catalog assembly.
//!
//! Every call re-reads the category folder; nothing is cached between loads,
//! so two loads of an unchanged folder yield equal catalogs. Problems with a
//! single entry are logged and that entry is dropped. Only a key missing from
//! the category table fails a load.

use crate::catalog::config::{
    CategoryConfig, CategoryTable, FALLBACK_THEME_COLOR, FALLBACK_THEME_ICON,
};
use crate::catalog::model::{CategoryCatalog, GalleryCatalog, ImageRecord};
use crate::catalog::naming::parse_image_filename;
use crate::catalog::stats::{CategoryStats, SiteStats, category_stats, site_stats};
use crate::catalog::GALLERY_DIR;
use crate::error::CatalogError;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Builds [`GalleryCatalog`] values from `{gallery_dir}/{category}/`.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    gallery_dir: PathBuf,
    table: CategoryTable,
}

impl CatalogLoader {
    /// Loader for a site checkout; images live under `public/images/gallery`.
    pub fn new(site_root: &Path, table: CategoryTable) -> Self {
        Self::with_gallery_dir(site_root.join(GALLERY_DIR), table)
    }

    /// Loader reading category folders directly beneath `gallery_dir`.
    pub fn with_gallery_dir(gallery_dir: PathBuf, table: CategoryTable) -> Self {
        Self { gallery_dir, table }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn gallery_dir(&self) -> &Path {
        &self.gallery_dir
    }

    pub fn category_dir(&self, key: &str) -> PathBuf {
        self.gallery_dir.join(key)
    }

    /// Scan one category folder and assemble its catalog.
    ///
    /// A missing folder is an empty catalog, not an error.
    pub fn load(&self, key: &str) -> Result<GalleryCatalog, CatalogError> {
        let config = self
            .table
            .get(key)
            .ok_or_else(|| CatalogError::UnknownCategory(key.to_string()))?;
        Ok(self.assemble(config))
    }

    /// Load every configured category in table order.
    ///
    /// A category that fails to load is replaced by an empty catalog with the
    /// fallback theme so the remaining categories are unaffected.
    pub fn load_all(&self) -> Vec<CategoryCatalog> {
        self.table
            .keys()
            .map(|key| {
                let catalog = match self.load(key) {
                    Ok(catalog) => catalog,
                    Err(err) => {
                        warn!("substituting empty catalog for {key}: {err}");
                        GalleryCatalog::with_theme(FALLBACK_THEME_COLOR, FALLBACK_THEME_ICON)
                    }
                };
                CategoryCatalog {
                    key: key.to_string(),
                    catalog,
                }
            })
            .collect()
    }

    pub fn stats(&self, key: &str) -> Result<CategoryStats, CatalogError> {
        self.load(key).map(|catalog| category_stats(&catalog))
    }

    pub fn site_stats(&self) -> SiteStats {
        site_stats(&self.load_all())
    }

    fn assemble(&self, config: &CategoryConfig) -> GalleryCatalog {
        let dir = self.category_dir(&config.key);
        let mut images = scan_directory(&dir, &config.key);
        images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        let filters = derive_filters(&config.filters, &images);
        info!(
            "loaded {} image(s) and {} filter(s) for {}",
            images.len(),
            filters.len(),
            config.key
        );
        GalleryCatalog {
            filters,
            images,
            ..GalleryCatalog::empty(config)
        }
    }
}

/// Allow-listed labels that occur among `images`, in allow-list order.
pub fn derive_filters(allow_list: &[String], images: &[ImageRecord]) -> Vec<String> {
    let present: BTreeSet<&str> = images.iter().map(|image| image.category.as_str()).collect();
    allow_list
        .iter()
        .filter(|label| present.contains(label.as_str()))
        .cloned()
        .collect()
}

// Unsorted records for the supported files directly inside `dir`.
fn scan_directory(dir: &Path, category: &str) -> Vec<ImageRecord> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no image folder at {}; treating {category} as empty", dir.display());
            return Vec::new();
        }
        Err(err) => {
            warn!("unable to list {}: {err}", dir.display());
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("unable to read an entry of {}: {err}", dir.display());
                continue;
            }
        };
        if entry.path().is_dir() {
            debug!("skipping subdirectory {}", entry.path().display());
            continue;
        }
        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(
                    "skipping non UTF-8 file name {} in {category}",
                    raw.to_string_lossy()
                );
                continue;
            }
        };
        if let Some(record) = parse_image_filename(&file_name, category) {
            records.push(record);
        }
    }
    records
}
