//! Listing-session pagination over the content store.

use crate::core::normalize;
use crate::domain::model::{PostPage, PostSummary};
use crate::domain::ports::ContentClient;
use crate::utils::error::{BlogError, Result};

/// Holds the posts loaded so far and the cursor to the next page.
///
/// The post list only grows, in response order; it is never reordered or
/// deduplicated — the content store is trusted not to repeat items across
/// pages. `load_next` takes `&mut self`, so a second load cannot start while
/// one is in flight on the same pager.
pub struct Pager<C: ContentClient> {
    client: C,
    posts: Vec<PostSummary>,
    next_page: Option<String>,
}

impl<C: ContentClient> Pager<C> {
    /// Query the store for the first page and start a session from it.
    pub async fn open(client: C, page_size: usize) -> Result<Self> {
        let response = client.query_posts(page_size).await?;
        let page = normalize::page(response);
        tracing::debug!(
            "Opened listing with {} posts, more available: {}",
            page.results.len(),
            page.next_page.is_some()
        );
        Ok(Self::from_page(client, page))
    }

    /// Start a session from an already-fetched first page.
    pub fn from_page(client: C, page: PostPage) -> Self {
        Self {
            client,
            posts: page.results,
            next_page: page.next_page,
        }
    }

    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Fetch the next page, append its posts in response order, and advance
    /// the cursor. Returns how many posts were appended.
    ///
    /// Fails with `PageExhaustedError` when there is no cursor, without
    /// touching the network. On a fetch failure the pager state is exactly
    /// what it was before the call; the caller may simply retry.
    pub async fn load_next(&mut self) -> Result<usize> {
        let cursor = self
            .next_page
            .as_deref()
            .ok_or(BlogError::PageExhaustedError)?;

        tracing::debug!("Loading next page from: {}", cursor);
        let response = self.client.fetch_page(cursor).await?;
        let page = normalize::page(response);

        let appended = page.results.len();
        self.posts.extend(page.results);
        self.next_page = page.next_page;

        tracing::debug!(
            "Appended {} posts ({} loaded), more available: {}",
            appended,
            self.posts.len(),
            self.next_page.is_some()
        );
        Ok(appended)
    }
}
