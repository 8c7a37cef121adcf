//! Page slicing over a folder source

use super::types::{FetchFoldersRequest, FetchFoldersResponse, PageRequest, PageResponse};
use crate::cursor::{decode_cursor, encode_cursor};
use crate::error::{Error, Result};
use crate::source::FolderSource;
use crate::types::OrganizationId;

/// Pagination engine over a [`FolderSource`]
///
/// Holds no per-call state, so one pager can serve concurrent callers as long
/// as the source itself is safe to read concurrently.
#[derive(Debug, Clone)]
pub struct FolderPager<S> {
    source: S,
}

impl<S: FolderSource> FolderPager<S> {
    /// Create a pager over `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying folder source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every folder of an organization without slicing
    pub fn get_all(&self, request: Option<&FetchFoldersRequest>) -> Result<FetchFoldersResponse> {
        let request = request.ok_or(Error::InvalidRequest)?;
        let folders = self.source.fetch_by_organization(request.organization_id)?;
        Ok(FetchFoldersResponse { folders })
    }

    /// Fetch one page of an organization's folders
    ///
    /// Checks run in order and the first failure wins: absent request, then
    /// non-positive limit, then undecodable cursor, then the source's own
    /// organization id check.
    pub fn get_page(&self, request: Option<&PageRequest>) -> Result<PageResponse> {
        let request = request.ok_or(Error::InvalidRequest)?;

        if request.limit <= 0 {
            return Err(Error::InvalidLimit {
                limit: request.limit,
            });
        }
        let limit = usize::try_from(request.limit).unwrap_or(usize::MAX);

        let start = decode_cursor(&request.cursor)?;
        let folders = self.source.fetch_by_organization(request.organization_id)?;
        let total = folders.len();

        if start > total {
            tracing::warn!(
                "Cursor offset {} is past the end of {} folders for organization {}",
                start,
                total,
                request.organization_id
            );
        }
        let start = start.min(total);
        let end = start.saturating_add(limit).min(total);

        let next_cursor = if end == total {
            String::new()
        } else {
            encode_cursor(end)
        };

        let folders: Vec<_> = folders.into_iter().skip(start).take(end - start).collect();

        tracing::debug!(
            "Serving folders [{}, {}) of {} for organization {}",
            start,
            end,
            total,
            request.organization_id
        );

        Ok(PageResponse {
            folders,
            next_cursor,
        })
    }

    /// Walk every page of an organization, following `next_cursor`
    pub fn pages(&self, organization_id: OrganizationId, limit: i64) -> PageWalker<'_, S> {
        PageWalker {
            pager: self,
            request: PageRequest::new(organization_id, limit),
            done: false,
        }
    }
}

/// Iterator over consecutive pages
///
/// Always yields at least one page (possibly empty) and stops after the
/// first error.
#[derive(Debug)]
pub struct PageWalker<'a, S> {
    pager: &'a FolderPager<S>,
    request: PageRequest,
    done: bool,
}

impl<S: FolderSource> Iterator for PageWalker<'_, S> {
    type Item = Result<PageResponse>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.pager.get_page(Some(&self.request)) {
            Ok(page) => {
                if page.has_more() {
                    self.request.cursor.clone_from(&page.next_cursor);
                } else {
                    self.done = true;
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
