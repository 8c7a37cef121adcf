//! Folder source module
//!
//! Supplies the full, stably ordered folder sequence for an organization.
//!
//! # Overview
//!
//! The pagination engine only sees the [`FolderSource`] trait. Implementations:
//! - `InMemoryCatalog` - immutable catalog held in memory
//! - `FileCatalog` - catalog file re-read on every fetch
//! - `sample_catalog()` - the sample dataset embedded in the binary

mod file;
mod memory;
mod sample;
mod types;

pub use file::FileCatalog;
pub use memory::{load_catalog, parse_catalog, CatalogFormat, InMemoryCatalog};
pub use sample::{sample_catalog, DEFAULT_ORG_ID};
pub use types::{ensure_organization_id, FolderSource};

#[cfg(test)]
mod tests;
