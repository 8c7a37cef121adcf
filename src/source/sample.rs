//! Sample folder dataset embedded in the binary

use super::memory::{parse_catalog, CatalogFormat, InMemoryCatalog};
use crate::error::Result;

/// Organization that owns most of the sample folders
pub const DEFAULT_ORG_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

const SAMPLE_FOLDERS: &str = include_str!("../../data/sample_folders.json");

/// Build the sample catalog
pub fn sample_catalog() -> Result<InMemoryCatalog> {
    parse_catalog(SAMPLE_FOLDERS, CatalogFormat::Json)
}
