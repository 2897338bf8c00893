//! Site configuration, loaded from a TOML file.

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub api: ApiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Display title shown above the listing.
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Listing query URL of the content store.
    pub endpoint: String,
    /// Posts requested per listing page.
    pub page_size: usize,
    pub timeout_seconds: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection::default(),
            api: ApiSection::default(),
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "small-blog".to_string(),
        }
    }
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            page_size: 20,
            timeout_seconds: 30,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file. Validation is separate so that
    /// CLI overrides can be applied first.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&raw)?;
        Ok(config)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint", &self.api.endpoint)?;
        validate_positive_number("api.page_size", self.api.page_size, 1)?;
        validate_positive_number("api.timeout_seconds", self.api.timeout_seconds as usize, 1)?;
        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn page_size(&self) -> usize {
        self.api.page_size
    }

    fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BlogError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_file_parses_all_sections() {
        let file = write_config(
            r#"
            [site]
            title = "Spacetraveling"

            [api]
            endpoint = "https://cms.example.com/api/posts"
            page_size = 5
            timeout_seconds = 10
            "#,
        );

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.site.title, "Spacetraveling");
        assert_eq!(config.api_endpoint(), "https://cms.example.com/api/posts");
        assert_eq!(config.page_size(), 5);
        assert_eq!(config.timeout_seconds(), 10);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let file = write_config(
            r#"
            [api]
            endpoint = "https://cms.example.com/api/posts"
            "#,
        );

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.site.title, "small-blog");
        assert_eq!(config.page_size(), 20);
        assert_eq!(config.timeout_seconds(), 30);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let file = write_config("this = is not [valid");
        let err = SiteConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BlogError::TomlError(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SiteConfig::from_file(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, BlogError::IoError(_)));
    }

    #[test]
    fn test_validate_rejects_default_empty_endpoint() {
        let config = SiteConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = SiteConfig::default();
        config.api.endpoint = "https://cms.example.com/api/posts".to_string();
        config.api.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_good_config() {
        let mut config = SiteConfig::default();
        config.api.endpoint = "https://cms.example.com/api/posts".to_string();
        assert!(config.validate().is_ok());
    }
}
