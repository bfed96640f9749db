//! webrender: render a tree of markdown and static files into a website
//!
//! Markdown pages are rendered and wrapped in a shared Tera layout, other
//! files are copied as-is, and a directory of pages additionally gets a blog
//! index, an Atom feed and a plain-text sitemap.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;

pub use error::{Error, Result};

use std::path::Path;

/// The main webrender application
pub struct Webrender {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Layout every rendered page is wrapped in
    pub layout: templates::TemplateRenderer,
}

impl Webrender {
    /// Create an instance using the bundled layout
    pub fn new(config: config::SiteConfig) -> anyhow::Result<Self> {
        let layout = templates::TemplateRenderer::new()?;
        Ok(Self { config, layout })
    }

    /// Create an instance whose layout is read from a file
    pub fn with_layout_file<P: AsRef<Path>>(
        config: config::SiteConfig,
        path: P,
    ) -> anyhow::Result<Self> {
        let layout = templates::TemplateRenderer::from_file(path)?;
        Ok(Self { config, layout })
    }

    /// Generate the static site
    pub fn generate(&self) -> anyhow::Result<commands::generate::Summary> {
        commands::generate::run(&self.config, &self.layout)
    }
}
