//! Per-category presentation table.
//!
//! Each top-level gallery (`morning`, `work`, ...) carries a theme color, an
//! icon, and an ordered allow-list of filter labels. The table is immutable
//! once built and is handed to the loader explicitly; there is no global
//! registry. A custom table can be read from JSON, in which case it is
//! validated as strictly as the built-in one is authored.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Version marker expected in category table files.
pub const CATEGORY_TABLE_VERSION: &str = "gallery_categories_v1";

/// Theme used when a category cannot be loaded during an aggregate load.
pub const FALLBACK_THEME_COLOR: &str = "coffee-brown";
pub const FALLBACK_THEME_ICON: &str = "☕";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub key: String,
    pub theme_color: String,
    pub theme_icon: String,
    /// Recognized filter labels, in display order.
    #[serde(default)]
    pub filters: Vec<String>,
    /// Prefix used when titling generated sample images, e.g. `朝の`.
    #[serde(default)]
    pub time_label: String,
}

impl CategoryConfig {
    fn new(
        key: &str,
        theme_color: &str,
        theme_icon: &str,
        filters: &[&str],
        time_label: &str,
    ) -> Self {
        Self {
            key: key.to_string(),
            theme_color: theme_color.to_string(),
            theme_icon: theme_icon.to_string(),
            filters: filters.iter().map(|f| f.to_string()).collect(),
            time_label: time_label.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryTableFile {
    schema_version: String,
    categories: Vec<CategoryConfig>,
}

/// Ordered, immutable mapping from category key to its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<CategoryConfig>,
}

impl CategoryTable {
    /// The four hand-authored time-of-day galleries.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CategoryConfig::new(
                    "morning",
                    "sunrise-orange",
                    "📚",
                    &["読書", "朝食", "軽作業", "コーヒータイム"],
                    "朝の",
                ),
                CategoryConfig::new(
                    "work",
                    "focus-blue",
                    "✒️",
                    &["デスクワーク", "資料作成", "アイデア", "会議"],
                    "作業中の",
                ),
                CategoryConfig::new(
                    "afternoon",
                    "warm-pink",
                    "🍰",
                    &["ティータイム", "読書", "おしゃべり", "スイーツ"],
                    "午後の",
                ),
                CategoryConfig::new(
                    "night",
                    "gold",
                    "🌙",
                    &["残業", "創作", "読書", "夜カフェ"],
                    "夜の",
                ),
            ],
        }
    }

    /// Build a table from already-constructed entries, applying the same
    /// validation as [`CategoryTable::load`].
    pub fn from_entries(entries: Vec<CategoryConfig>) -> Result<Self> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    /// Parse a category table from disk and verify its version marker.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading category table {}", path.display()))?;
        let file: CategoryTableFile = serde_json::from_str(&data)
            .with_context(|| format!("parsing category table {}", path.display()))?;

        if file.schema_version != CATEGORY_TABLE_VERSION {
            bail!(
                "unsupported category table version '{}', expected {}",
                file.schema_version,
                CATEGORY_TABLE_VERSION
            );
        }
        Self::from_entries(file.categories)
            .with_context(|| format!("validating category table {}", path.display()))
    }

    pub fn get(&self, key: &str) -> Option<&CategoryConfig> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Category keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryConfig> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_entries(entries: &[CategoryConfig]) -> Result<()> {
    if entries.is_empty() {
        bail!("category table must define at least one category");
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for entry in entries {
        validate_key(&entry.key)?;
        if !seen.insert(entry.key.as_str()) {
            bail!("duplicate category key {}", entry.key);
        }
        if entry.theme_color.trim().is_empty() {
            bail!("category {} has an empty theme_color", entry.key);
        }
        if entry.theme_icon.trim().is_empty() {
            bail!("category {} has an empty theme_icon", entry.key);
        }

        let mut labels: BTreeSet<&str> = BTreeSet::new();
        for label in &entry.filters {
            if label.trim().is_empty() {
                bail!("category {} filters must not contain empty entries", entry.key);
            }
            if !labels.insert(label.as_str()) {
                bail!("category {} lists filter '{}' twice", entry.key, label);
            }
        }
    }
    Ok(())
}

// Keys become directory names under the gallery root, so keep them to a
// single safe path segment.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("category key must not be empty");
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("category key must match ^[A-Za-z0-9_.-]+$, got {}", key);
    }
    if key.chars().all(|c| c == '.') {
        bail!("category key must not be a relative path segment, got {}", key);
    }
    Ok(())
}
