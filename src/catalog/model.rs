//! Value types handed to the gallery view and lightbox.
//!
//! Field names serialize in camelCase so the JSON emitted by the binaries is
//! exactly what the page layer consumes.

use crate::catalog::config::CategoryConfig;
use serde::{Deserialize, Serialize};

/// One cataloged image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// `{category}_{fileName}`; unique within one category's catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Filter label parsed from the filename, or the fallback sentinel.
    pub category: String,
    /// Public path `/images/gallery/{category}/{fileName}`.
    pub file_path: String,
    pub file_name: String,
}

/// Loader output for one top-level category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCatalog {
    pub theme_color: String,
    pub theme_icon: String,
    /// Allow-listed labels present among `images`, in allow-list order.
    pub filters: Vec<String>,
    /// Sorted by `file_name` ascending.
    pub images: Vec<ImageRecord>,
}

impl GalleryCatalog {
    /// Catalog with the configured theme and nothing in it.
    pub fn empty(config: &CategoryConfig) -> Self {
        Self::with_theme(&config.theme_color, &config.theme_icon)
    }

    pub(crate) fn with_theme(theme_color: &str, theme_icon: &str) -> Self {
        Self {
            theme_color: theme_color.to_string(),
            theme_icon: theme_icon.to_string(),
            filters: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Records shown when the view has `label` selected; `None` means "all".
    pub fn images_with_label<'a>(
        &'a self,
        label: Option<&'a str>,
    ) -> impl Iterator<Item = &'a ImageRecord> + 'a {
        self.images
            .iter()
            .filter(move |image| label.is_none_or(|wanted| image.category == wanted))
    }

    /// Position of a record in `images`, as the lightbox indexes it.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.images.iter().position(|image| image.id == id)
    }
}

/// A catalog tagged with the top-level key it was loaded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCatalog {
    pub key: String,
    pub catalog: GalleryCatalog,
}
