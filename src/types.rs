//! Common types used throughout org-folders
//!
//! This module contains the folder record and shared type definitions
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Type Aliases
// ============================================================================

/// Identifier of the organization that owns a folder
pub type OrganizationId = Uuid;

/// Identifier of a single folder
pub type FolderId = Uuid;

// ============================================================================
// Folder
// ============================================================================

/// A single organizational folder
///
/// Records are handed out by value; callers never hold a handle into the
/// source's shared storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder id
    pub id: FolderId,
    /// Display name
    pub name: String,
    /// Owning organization
    #[serde(rename = "org_id", alias = "organization_id")]
    pub organization_id: OrganizationId,
    /// Soft-delete marker carried from the source as-is
    #[serde(default)]
    pub deleted: bool,
}

impl Folder {
    /// Create a live (not deleted) folder
    pub fn new(id: FolderId, name: impl Into<String>, organization_id: OrganizationId) -> Self {
        Self {
            id,
            name: name.into(),
            organization_id,
            deleted: false,
        }
    }

    /// Check whether this folder belongs to the given organization
    pub fn belongs_to(&self, organization_id: OrganizationId) -> bool {
        self.organization_id == organization_id
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
