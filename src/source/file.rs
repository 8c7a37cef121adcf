//! File-backed folder source
//!
//! Re-reads the catalog file on every fetch, so a file that disappears or is
//! corrupted between calls shows up as `DataSourceUnavailable` rather than
//! as an empty organization.

use super::memory::load_catalog;
use super::types::{ensure_organization_id, FolderSource};
use crate::error::Result;
use crate::types::{Folder, OrganizationId};
use std::path::{Path, PathBuf};

/// Folder source backed by a JSON or YAML catalog file
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    /// Create a source for the catalog at `path`; the file is not read yet
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FolderSource for FileCatalog {
    fn fetch_by_organization(&self, organization_id: OrganizationId) -> Result<Vec<Folder>> {
        ensure_organization_id(organization_id)?;
        load_catalog(&self.path)?.fetch_by_organization(organization_id)
    }
}
