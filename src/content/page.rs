//! Page model

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{FrontMatter, MarkdownRenderer};
use crate::error::{Error, Result};

/// One content unit: a source file or a generated artifact.
///
/// The serialized fields form the layout template context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    /// Source path relative to the input root
    #[serde(skip)]
    pub source: String,

    /// Output path relative to the output root, `/`-separated
    #[serde(skip)]
    pub path: String,

    /// Destination file
    #[serde(skip)]
    pub output: PathBuf,

    /// Copied verbatim instead of rendered through the layout
    #[serde(skip)]
    pub pass_through: bool,

    /// File content, minus the front-matter block for markdown pages
    #[serde(skip)]
    pub raw: Vec<u8>,

    // Front matter
    pub date: String,
    pub description: String,
    pub header: String,
    pub style: String,
    pub title: String,

    // Filled in before output
    pub main: String,
    pub analytics_id: String,
    pub url_absolute: String,
    pub url_base: String,
    pub url_canonical: String,
    pub url_logger: String,
}

impl Page {
    /// Create a page from its relative name and contents.
    ///
    /// Rendered pages starting with `---` have their front matter parsed;
    /// `.md` pages are converted to HTML and renamed to `.html`.
    pub fn new(name: &str, raw: Vec<u8>, pass_through: bool) -> Result<Self> {
        let mut page = Page {
            source: name.to_string(),
            path: name.to_string(),
            pass_through,
            raw,
            ..Default::default()
        };

        if !pass_through {
            if let Some((yaml, body)) = FrontMatter::split(&page.raw) {
                let fm = FrontMatter::parse(yaml).map_err(|source| Error::FrontMatterParse {
                    path: name.to_string(),
                    source,
                })?;
                let body = body.to_vec();
                page.apply_front_matter(fm);
                page.raw = body;
            } else if page.raw.starts_with(super::frontmatter::DELIMITER) {
                tracing::debug!("{}: no closing front-matter delimiter, using whole file", name);
            }
        }

        if is_markdown(name) {
            let stem = name.strip_suffix(".md").unwrap_or(name);
            page.path = format!("{}.html", stem);
            page.main = MarkdownRenderer::new().render(&String::from_utf8_lossy(&page.raw));
        }

        Ok(page)
    }

    /// Place the page's output under `root`
    pub fn with_output_root(mut self, root: &Path) -> Self {
        self.output = root.join(&self.path);
        self
    }

    /// File name of the output path
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Whether the output is an HTML document
    pub fn is_html(&self) -> bool {
        Path::new(&self.path)
            .extension()
            .map(|ext| ext == "html")
            .unwrap_or(false)
    }

    fn apply_front_matter(&mut self, fm: FrontMatter) {
        self.date = fm.date.unwrap_or_default();
        self.description = fm.description.unwrap_or_default();
        self.header = fm.header.unwrap_or_default();
        self.style = fm.style.unwrap_or_default();
        self.title = fm.title.unwrap_or_default();
    }
}

/// Check if a file is a markdown file
pub fn is_markdown(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|ext| ext == "md")
        .unwrap_or(false)
}
