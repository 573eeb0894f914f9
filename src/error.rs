use thiserror::Error;

/// Failures a catalog load surfaces to its caller.
///
/// Everything that affects a single file (unsupported extension, malformed
/// name, unreadable entry) is absorbed by the loader and never shows up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested key has no entry in the category table.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
