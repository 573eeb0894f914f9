//! `{order}_{title}_{label}.{ext}` filename convention parser.
//!
//! The order token only exists so authors can control display order through
//! plain filename sorting; it is dropped here. Names that do not follow the
//! convention still produce a record with the fallback label, while names
//! with an unsupported extension produce nothing.

use crate::catalog::model::ImageRecord;
use crate::catalog::PUBLIC_GALLERY_PREFIX;
use anyhow::{Result, bail};
use log::{debug, warn};
use std::path::Path;

/// Lower-case extensions (without the dot) that make it into a catalog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Label given to images whose name carries no usable label segment.
pub const FALLBACK_LABEL: &str = "その他";

const SEGMENT_DELIMITER: char = '_';
const MIN_CONVENTION_SEGMENTS: usize = 3;

/// Parse one directory entry name into a record for `category`.
///
/// Returns `None` for unsupported extensions and for names that cannot be
/// handled at all; the latter are logged. Never fails the caller.
pub fn parse_image_filename(file_name: &str, category: &str) -> Option<ImageRecord> {
    match try_parse(file_name, category) {
        Ok(record) => record,
        Err(err) => {
            warn!("skipping {file_name} in {category}: {err:#}");
            None
        }
    }
}

/// The lower-cased extension if it is one the gallery can display.
pub fn supported_extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_lowercase();
    SUPPORTED_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Deterministic blurb shown under an image.
pub fn describe(title: &str) -> String {
    format!("{title}の風景をお楽しみください。")
}

fn try_parse(file_name: &str, category: &str) -> Result<Option<ImageRecord>> {
    if file_name.contains('/') {
        bail!("expected a bare file name, got a path");
    }
    let Some(ext) = supported_extension(file_name) else {
        debug!("ignoring {file_name} in {category}: unsupported extension");
        return Ok(None);
    };

    let Some(stem) = Path::new(file_name).file_stem().and_then(|s| s.to_str()) else {
        bail!("no file stem before .{ext}");
    };
    let segments: Vec<&str> = stem.split(SEGMENT_DELIMITER).collect();

    let (title, label) = if segments.len() >= MIN_CONVENTION_SEGMENTS {
        let middle = segments[1..segments.len() - 1].join("_");
        let last = segments[segments.len() - 1];
        let title = if middle.is_empty() {
            file_name.to_string()
        } else {
            middle
        };
        let label = if last.is_empty() { FALLBACK_LABEL } else { last };
        (title, label.to_string())
    } else {
        (stem.to_string(), FALLBACK_LABEL.to_string())
    };

    Ok(Some(ImageRecord {
        id: format!("{category}_{file_name}"),
        description: describe(&title),
        title,
        category: label,
        file_path: format!("{PUBLIC_GALLERY_PREFIX}/{category}/{file_name}"),
        file_name: file_name.to_string(),
    }))
}
