//! Pagination module
//!
//! Serves an organization's folders in bounded pages linked by opaque cursors.
//!
//! # Overview
//!
//! [`FolderPager`] validates a request, resolves the start offset from the
//! cursor, slices the source's stable sequence and issues the next cursor.
//! An empty `next_cursor` means the page reached the end of the sequence.
//! A cursor past the end yields an empty page, not an error.

mod pager;
mod types;

pub use pager::{FolderPager, PageWalker};
pub use types::{FetchFoldersRequest, FetchFoldersResponse, PageRequest, PageResponse};
