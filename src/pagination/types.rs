//! Pagination request and response types

use crate::types::{Folder, OrganizationId};
use serde::{Deserialize, Serialize};

/// Request for a single page of an organization's folders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Organization whose folders are listed
    pub organization_id: OrganizationId,
    /// Maximum number of folders in the page; must be positive
    pub limit: i64,
    /// Cursor from a previous response; empty starts from the beginning
    #[serde(default)]
    pub cursor: String,
}

impl PageRequest {
    /// Request the first page
    pub fn new(organization_id: OrganizationId, limit: i64) -> Self {
        Self {
            organization_id,
            limit,
            cursor: String::new(),
        }
    }

    /// Continue from a previously issued cursor
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }
}

/// One page of folders
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageResponse {
    /// Folders in source order, at most `limit` of them
    pub folders: Vec<Folder>,
    /// Cursor for the following page; empty when this page reached the end
    pub next_cursor: String,
}

impl PageResponse {
    /// Check if another page follows this one
    pub fn has_more(&self) -> bool {
        !self.next_cursor.is_empty()
    }
}

/// Request for every folder of an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFoldersRequest {
    pub organization_id: OrganizationId,
}

impl FetchFoldersRequest {
    pub fn new(organization_id: OrganizationId) -> Self {
        Self { organization_id }
    }
}

/// Every folder of an organization
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FetchFoldersResponse {
    pub folders: Vec<Folder>,
}
