use crate::domain::model::{RawPost, RawQueryResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the headless content store.
///
/// All three operations return raw wire records; normalization happens in
/// `core::normalize`, so alternative backends only have to speak the wire
/// shape.
#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Query the first page of published posts.
    async fn query_posts(&self, page_size: usize) -> Result<RawQueryResponse>;

    /// Follow an opaque next-page cursor returned by an earlier query.
    async fn fetch_page(&self, cursor: &str) -> Result<RawQueryResponse>;

    /// Fetch a single post document by its slug identifier.
    async fn get_by_slug(&self, slug: &str) -> Result<RawPost>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn page_size(&self) -> usize;
    fn timeout_seconds(&self) -> u64;
}
