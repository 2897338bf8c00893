//! Mapping from raw content-store records to the internal post shapes.
//!
//! These functions never fail: absent optional fields collapse to empty
//! values, and a missing publication date stays `None` rather than being
//! substituted with a default.

use crate::domain::model::{
    PostDetail, PostPage, PostSummary, RawPost, RawQueryResponse, RawSection, RichTextBlock,
    Section,
};

pub fn summary(raw: &RawPost) -> PostSummary {
    PostSummary {
        uid: raw.uid.clone().unwrap_or_default(),
        first_publication_date: raw.first_publication_date,
        title: raw.data.title.clone(),
        subtitle: raw.data.subtitle.clone(),
        author: raw.data.author.clone(),
    }
}

pub fn detail(raw: &RawPost) -> PostDetail {
    PostDetail {
        uid: raw.uid.clone().unwrap_or_default(),
        first_publication_date: raw.first_publication_date,
        title: raw.data.title.clone(),
        subtitle: raw.data.subtitle.clone(),
        author: raw.data.author.clone(),
        banner_url: raw
            .data
            .banner
            .as_ref()
            .and_then(|banner| banner.url.clone())
            .unwrap_or_default(),
        content: raw.data.content.iter().map(section).collect(),
    }
}

/// Normalize a whole query response, preserving result order.
pub fn page(raw: RawQueryResponse) -> PostPage {
    PostPage {
        results: raw.results.iter().map(summary).collect(),
        next_page: raw.next_page,
    }
}

fn section(raw: &RawSection) -> Section {
    Section {
        heading: raw.heading.clone(),
        body: raw
            .body
            .iter()
            .map(|span| RichTextBlock {
                text: span.text.clone(),
            })
            .collect(),
    }
}
