pub mod normalize;
pub mod pagination;
pub mod reading_time;

pub use crate::domain::model::{PostDetail, PostPage, PostSummary, RichTextBlock, Section};
pub use crate::domain::ports::{ConfigProvider, ContentClient};
pub use crate::utils::error::Result;
pub use pagination::Pager;
