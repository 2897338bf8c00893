// Adapters layer: concrete implementations for external systems.

use crate::domain::model::{RawPost, RawQueryResponse};
use crate::domain::ports::{ConfigProvider, ContentClient};
use crate::utils::error::{BlogError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// `ContentClient` over a JSON-speaking headless CMS.
///
/// `endpoint` is the listing query URL; individual documents live at
/// `{endpoint}/{slug}` and pagination cursors are followed verbatim.
#[derive(Debug, Clone)]
pub struct HttpContentClient {
    endpoint: String,
    client: Client,
}

impl HttpContentClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_timeout(
            config.api_endpoint().to_string(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    async fn get_listing(&self, request: reqwest::RequestBuilder, url: &str) -> Result<RawQueryResponse> {
        let response = request.send().await?;
        tracing::debug!("Listing response status: {}", response.status());

        if !response.status().is_success() {
            return Err(BlogError::FetchError {
                url: url.to_string(),
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentClient for HttpContentClient {
    async fn query_posts(&self, page_size: usize) -> Result<RawQueryResponse> {
        tracing::debug!("Querying post listing at: {}", self.endpoint);
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("page_size", page_size.to_string())]);
        self.get_listing(request, &self.endpoint).await
    }

    async fn fetch_page(&self, cursor: &str) -> Result<RawQueryResponse> {
        tracing::debug!("Following pagination cursor: {}", cursor);
        self.get_listing(self.client.get(cursor), cursor).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<RawPost> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), slug);
        tracing::debug!("Fetching post document at: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Document response status: {}", response.status());

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BlogError::NotFoundError {
                slug: slug.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(BlogError::FetchError {
                url,
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }
}
