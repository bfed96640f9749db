//! Site configuration (webrender.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    #[serde(rename = "in")]
    pub input: PathBuf,
    #[serde(rename = "out")]
    pub output: PathBuf,

    // Values copied onto every page for the layout
    #[serde(rename = "ga")]
    pub analytics_id: String,
    #[serde(rename = "base")]
    pub url_base: String,
    #[serde(rename = "logger")]
    pub url_logger: String,

    // Content transforms
    pub track_links: bool,

    // Blog
    pub blog_tagline: String,

    #[serde(default)]
    pub feed: FeedConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("src"),
            output: PathBuf::from("public"),

            analytics_id: String::new(),
            url_base: "https://example.com".to_string(),
            url_logger: String::new(),

            track_links: false,

            blog_tagline:
                "Artisanal, <em>hand-crafted</em> blog posts imbued with delayed <em>regrets</em>"
                    .to_string(),

            feed: FeedConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("read config {:?}", path))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).with_context(|| format!("parse config {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url_base.trim_end_matches('/')
    }
}

/// Identity of the generated Atom feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub title: String,
    /// Feed id; defaults to a tag URI derived from the base URL when empty
    pub id: String,
    pub author: String,
    pub author_uri: Option<String>,
    pub author_email: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: "web log".to_string(),
            id: String::new(),
            author: "John Doe".to_string(),
            author_uri: None,
            author_email: None,
        }
    }
}
