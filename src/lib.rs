//! # org-folders
//!
//! Organization-scoped folder lookup with opaque cursor pagination.
//!
//! ## Quick Start
//!
//! ```rust
//! use org_folders::pagination::{FolderPager, PageRequest};
//! use org_folders::source::{sample_catalog, DEFAULT_ORG_ID};
//! use uuid::Uuid;
//!
//! # fn main() -> org_folders::Result<()> {
//! let pager = FolderPager::new(sample_catalog()?);
//! let org = Uuid::parse_str(DEFAULT_ORG_ID).expect("valid uuid");
//!
//! let first = pager.get_page(Some(&PageRequest::new(org, 5)))?;
//! let request = PageRequest::new(org, 5).with_cursor(first.next_cursor);
//! let second = pager.get_page(Some(&request))?;
//!
//! assert_eq!(first.folders.len() + second.folders.len(), 9);
//! assert!(!second.has_more());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 FolderPager                  │
//! │   get_page(PageRequest) → PageResponse       │
//! │   get_all(FetchFoldersRequest) → folders     │
//! └──────────────┬───────────────┬───────────────┘
//!                │               │
//!        ┌───────┴──────┐ ┌──────┴──────────────┐
//!        │    cursor    │ │    FolderSource     │
//!        │ encode/decode│ │ InMemory │ File     │
//!        └──────────────┘ └─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and codes
pub mod error;

/// Folder record and shared types
pub mod types;

/// Opaque cursor encoding
pub mod cursor;

/// Folder sources
pub mod source;

/// Pagination engine
pub mod pagination;

/// Binary settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use cursor::{decode_cursor, encode_cursor};
pub use error::{Error, ErrorCode, Result};
pub use pagination::{
    FetchFoldersRequest, FetchFoldersResponse, FolderPager, PageRequest, PageResponse,
};
pub use source::{FolderSource, InMemoryCatalog};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
