//! In-memory folder catalog

use super::types::{ensure_organization_id, FolderSource};
use crate::error::{Error, Result};
use crate::types::{Folder, OrganizationId};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// On-disk encoding of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a file extension (JSON unless `.yaml`/`.yml`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Immutable catalog of folders held in memory
///
/// Folder order is the order the catalog was built with. Clones share the
/// same storage.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    folders: Arc<[Folder]>,
}

impl InMemoryCatalog {
    /// Create a catalog from folders in their canonical order
    pub fn new(folders: impl Into<Vec<Folder>>) -> Self {
        let folders: Vec<Folder> = folders.into();
        Self {
            folders: folders.into(),
        }
    }

    /// Number of folders across all organizations
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Check whether the catalog holds no folders
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// All folders, in catalog order
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Distinct organizations with their folder counts, in first-seen order
    pub fn organizations(&self) -> Vec<(OrganizationId, usize)> {
        let mut order = Vec::new();
        let mut counts: HashMap<OrganizationId, usize> = HashMap::new();

        for folder in self.folders.iter() {
            let count = counts.entry(folder.organization_id).or_insert(0);
            if *count == 0 {
                order.push(folder.organization_id);
            }
            *count += 1;
        }

        order
            .into_iter()
            .map(|id| (id, counts.get(&id).copied().unwrap_or_default()))
            .collect()
    }
}

impl From<Vec<Folder>> for InMemoryCatalog {
    fn from(folders: Vec<Folder>) -> Self {
        Self::new(folders)
    }
}

impl FolderSource for InMemoryCatalog {
    fn fetch_by_organization(&self, organization_id: OrganizationId) -> Result<Vec<Folder>> {
        ensure_organization_id(organization_id)?;

        let folders: Vec<Folder> = self
            .folders
            .iter()
            .filter(|folder| folder.belongs_to(organization_id))
            .cloned()
            .collect();

        tracing::debug!(
            "Fetched {} of {} folders for organization {}",
            folders.len(),
            self.folders.len(),
            organization_id
        );

        Ok(folders)
    }
}

/// Parse a catalog (a list of folders) from a string
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<InMemoryCatalog> {
    let folders: Vec<Folder> = match format {
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(InMemoryCatalog::new(folders))
}

/// Load a catalog file, choosing JSON or YAML by extension
///
/// Any read or parse failure is reported as
/// [`Error::DataSourceUnavailable`].
pub fn load_catalog(path: impl AsRef<Path>) -> Result<InMemoryCatalog> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        Error::unavailable(format!(
            "Failed to read catalog file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let catalog = parse_catalog(&content, CatalogFormat::from_path(path)).map_err(|e| {
        Error::unavailable(format!(
            "Failed to parse catalog file '{}': {}",
            path.display(),
            e
        ))
    })?;

    tracing::info!(
        "Loaded {} folders from catalog {}",
        catalog.len(),
        path.display()
    );

    Ok(catalog)
}
