//! Image catalog wiring.
//!
//! This module turns a category folder (for example
//! `public/images/gallery/morning/`) into a [`GalleryCatalog`]: file names are
//! parsed by [`naming`], assembled and ordered by [`loader`], and the
//! per-category theme and filter allow-list come from [`config`]. Callers
//! normally hold a [`CatalogLoader`] and ask it for one or all categories.

pub mod config;
pub mod loader;
pub mod model;
pub mod naming;
pub mod sample;
pub mod stats;

pub use config::{CategoryConfig, CategoryTable};
pub use loader::{CatalogLoader, derive_filters};
pub use model::{CategoryCatalog, GalleryCatalog, ImageRecord};
pub use naming::{FALLBACK_LABEL, SUPPORTED_EXTENSIONS, parse_image_filename};
pub use sample::{DEFAULT_SAMPLE_COUNT, sample_images};
pub use stats::{CategoryStats, SiteStats, category_stats, site_stats};

/// Site-relative folder holding one subfolder per category.
pub const GALLERY_DIR: &str = "public/images/gallery";

/// Public URL prefix under which category images are served.
pub const PUBLIC_GALLERY_PREFIX: &str = "/images/gallery";

/// Public URL prefix for generated sample images.
pub const PLACEHOLDER_PREFIX: &str = "/images/placeholder";
