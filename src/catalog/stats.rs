//! Counts derived from catalogs on demand; nothing here is stored.

use crate::catalog::model::{CategoryCatalog, GalleryCatalog};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub total: usize,
    /// Number of active filters, not number of distinct labels.
    pub categories: usize,
    pub by_category: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total: usize,
    pub by_time_slot: BTreeMap<String, usize>,
}

pub fn category_stats(catalog: &GalleryCatalog) -> CategoryStats {
    let mut by_category = BTreeMap::new();
    for image in &catalog.images {
        *by_category.entry(image.category.clone()).or_insert(0) += 1;
    }
    CategoryStats {
        total: catalog.images.len(),
        categories: catalog.filters.len(),
        by_category,
    }
}

pub fn site_stats(catalogs: &[CategoryCatalog]) -> SiteStats {
    let by_time_slot: BTreeMap<String, usize> = catalogs
        .iter()
        .map(|entry| (entry.key.clone(), entry.catalog.images.len()))
        .collect();
    SiteStats {
        total: by_time_slot.values().sum(),
        by_time_slot,
    }
}
