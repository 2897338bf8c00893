//! Terminal rendering of the listing and the post detail page.
//!
//! Presentational only: everything here is a pure function from normalized
//! posts to a string.

use crate::core::reading_time;
use crate::domain::model::{PostDetail, PostSummary};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Format a publication date for display, with a placeholder for posts the
/// store has not dated yet.
pub fn date(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => "unpublished".to_string(),
    }
}

/// Render the listing page: one block per post, in load order.
pub fn listing(posts: &[PostSummary]) -> String {
    let mut out = String::new();

    for post in posts {
        out.push_str(&format!("{}\n", post.title));
        if !post.subtitle.is_empty() {
            out.push_str(&format!("  {}\n", post.subtitle));
        }
        out.push_str(&format!(
            "  {} | {} | /post/{}\n\n",
            post.author,
            date(post.first_publication_date.as_ref()),
            post.uid
        ));
    }

    out
}

/// Render the post detail page, including the estimated reading time.
pub fn post(detail: &PostDetail) -> String {
    let minutes = reading_time::estimate_minutes(&detail.content);
    let mut out = String::new();

    if !detail.banner_url.is_empty() {
        out.push_str(&format!("[banner: {}]\n\n", detail.banner_url));
    }

    out.push_str(&format!("{}\n", detail.title));
    if !detail.subtitle.is_empty() {
        out.push_str(&format!("{}\n", detail.subtitle));
    }
    out.push_str(&format!(
        "{} | {} | {} min read\n",
        detail.author,
        date(detail.first_publication_date.as_ref()),
        minutes
    ));

    for section in &detail.content {
        out.push_str(&format!("\n## {}\n\n", section.heading));
        out.push_str(&section.body_text());
        out.push('\n');
    }

    out
}

pub fn listing_json(posts: &[PostSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(posts)?)
}

pub fn post_json(detail: &PostDetail) -> Result<String> {
    Ok(serde_json::to_string_pretty(detail)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RichTextBlock, Section};
    use chrono::TimeZone;

    fn summary(uid: &str, dated: bool) -> PostSummary {
        PostSummary {
            uid: uid.to_string(),
            first_publication_date: dated
                .then(|| Utc.with_ymd_and_hms(2021, 3, 15, 10, 0, 0).unwrap()),
            title: format!("Title of {}", uid),
            subtitle: "A subtitle".to_string(),
            author: "Ada".to_string(),
        }
    }

    #[test]
    fn test_date_formatting() {
        let dated = Utc.with_ymd_and_hms(2021, 3, 15, 10, 0, 0).unwrap();
        assert_eq!(date(Some(&dated)), "15 Mar 2021");
        assert_eq!(date(None), "unpublished");
    }

    #[test]
    fn test_listing_shows_posts_in_order() {
        let out = listing(&[summary("first", true), summary("second", false)]);

        let first = out.find("Title of first").unwrap();
        let second = out.find("Title of second").unwrap();
        assert!(first < second);
        assert!(out.contains("15 Mar 2021"));
        assert!(out.contains("unpublished"));
        assert!(out.contains("/post/first"));
    }

    #[test]
    fn test_post_includes_reading_time_and_sections() {
        let detail = PostDetail {
            uid: "how-to-sail".to_string(),
            first_publication_date: None,
            title: "How to sail".to_string(),
            subtitle: String::new(),
            author: "Ada".to_string(),
            banner_url: "https://images.example.com/banner.png".to_string(),
            content: vec![Section {
                heading: "Getting started".to_string(),
                body: vec![RichTextBlock {
                    text: "Hoist the sail.".to_string(),
                }],
            }],
        };

        let out = post(&detail);
        assert!(out.contains("[banner: https://images.example.com/banner.png]"));
        assert!(out.contains("1 min read"));
        assert!(out.contains("## Getting started"));
        assert!(out.contains("Hoist the sail."));
    }

    #[test]
    fn test_post_without_banner_or_content() {
        let detail = PostDetail {
            uid: "empty".to_string(),
            first_publication_date: None,
            title: "Empty".to_string(),
            subtitle: String::new(),
            author: "Ada".to_string(),
            banner_url: String::new(),
            content: vec![],
        };

        let out = post(&detail);
        assert!(!out.contains("[banner:"));
        assert!(out.contains("0 min read"));
    }

    #[test]
    fn test_listing_json_round_trips_field_names() {
        let out = listing_json(&[summary("first", true)]).unwrap();
        assert!(out.contains("\"uid\": \"first\""));
        assert!(out.contains("\"first_publication_date\""));
    }
}
