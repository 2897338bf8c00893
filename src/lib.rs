pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use crate::adapters::HttpContentClient;
pub use crate::config::SiteConfig;
pub use crate::core::{pagination::Pager, reading_time};
pub use crate::utils::error::{BlogError, Result};
