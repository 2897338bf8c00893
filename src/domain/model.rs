use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of results as returned by the content store.
///
/// `next_page` is an opaque cursor URL; `None` (or an absent field) means the
/// listing is exhausted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQueryResponse {
    #[serde(default)]
    pub results: Vec<RawPost>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// A post document exactly as the content store ships it.
///
/// Everything except `data` is store metadata; the normalizer keeps `uid` and
/// `first_publication_date` and drops the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub data: RawPostData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPostData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub banner: Option<RawBanner>,
    #[serde(default)]
    pub content: Vec<RawSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBanner {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<RawSpan>,
}

/// A rich-text span. The store attaches formatting metadata we never look at;
/// only the plain `text` survives normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpan {
    #[serde(default)]
    pub text: String,
}

/// The listing-page view of a post. Immutable once normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub uid: String,
    /// `None` when the store has not published the document yet.
    pub first_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// The detail-page view of a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    pub uid: String,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// Empty string when the post has no banner.
    pub banner_url: String,
    pub content: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}

impl Section {
    /// Plain-text rendition of the section body, one block per line.
    pub fn body_text(&self) -> String {
        self.body
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextBlock {
    pub text: String,
}

/// A normalized page of summaries plus the cursor to the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub results: Vec<PostSummary>,
    pub next_page: Option<String>,
}
