//! Placeholder records for galleries that have no real images yet.

use crate::catalog::config::CategoryTable;
use crate::catalog::model::ImageRecord;
use crate::catalog::naming::FALLBACK_LABEL;
use crate::catalog::PLACEHOLDER_PREFIX;

pub const DEFAULT_SAMPLE_COUNT: usize = 6;

/// `count` demo records for `category`, cycling through its filter labels.
///
/// Unknown categories get an empty list rather than an error.
pub fn sample_images(table: &CategoryTable, category: &str, count: usize) -> Vec<ImageRecord> {
    let Some(config) = table.get(category) else {
        return Vec::new();
    };

    let fallback = [FALLBACK_LABEL.to_string()];
    let labels: &[String] = if config.filters.is_empty() {
        &fallback
    } else {
        &config.filters
    };

    (1..=count)
        .map(|i| {
            let label = &labels[(i - 1) % labels.len()];
            let file_name = format!("sample-{category}-{i}.jpg");
            ImageRecord {
                id: format!("{category}_sample_{i}"),
                title: format!("{}風景 {i}", config.time_label),
                description: format!(
                    "{label}の時間を表現した美しい画像です。珈琲と机のある日常の一コマをお楽しみください。"
                ),
                category: label.clone(),
                file_path: format!("{PLACEHOLDER_PREFIX}/{file_name}"),
                file_name,
            }
        })
        .collect()
}
