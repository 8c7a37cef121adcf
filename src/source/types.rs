//! Folder source trait

use crate::error::{Error, Result};
use crate::types::{Folder, OrganizationId};
use std::sync::Arc;

/// Provider of an organization's folders
///
/// Implementations must return the same order on every call for an
/// unchanged backing set; pagination slices that sequence by offset.
pub trait FolderSource: Send + Sync {
    /// Fetch every folder owned by `organization_id`, in stable order
    ///
    /// A nil id is [`Error::InvalidOrganizationId`]. An organization with no
    /// folders is an empty vector, not an error.
    fn fetch_by_organization(&self, organization_id: OrganizationId) -> Result<Vec<Folder>>;
}

impl<T: FolderSource + ?Sized> FolderSource for &T {
    fn fetch_by_organization(&self, organization_id: OrganizationId) -> Result<Vec<Folder>> {
        (**self).fetch_by_organization(organization_id)
    }
}

impl<T: FolderSource + ?Sized> FolderSource for Arc<T> {
    fn fetch_by_organization(&self, organization_id: OrganizationId) -> Result<Vec<Folder>> {
        (**self).fetch_by_organization(organization_id)
    }
}

impl<T: FolderSource + ?Sized> FolderSource for Box<T> {
    fn fetch_by_organization(&self, organization_id: OrganizationId) -> Result<Vec<Folder>> {
        (**self).fetch_by_organization(organization_id)
    }
}

/// Reject the nil organization id
pub fn ensure_organization_id(organization_id: OrganizationId) -> Result<()> {
    if organization_id.is_nil() {
        return Err(Error::InvalidOrganizationId);
    }
    Ok(())
}
