//! Page layout rendered with the Tera template engine
//!
//! The bundled layout is embedded in the binary; a custom layout file can
//! replace it at runtime.

use std::collections::HashMap;
use std::error::Error as _;
use std::path::Path;
use tera::{Context, Tera};

use crate::content::Page;
use crate::error::{Error, Result};

/// Name the page layout is registered under
pub const LAYOUT: &str = "layout.html";

/// A named template capable of rendering a page into a full document
pub trait Layout: Sync {
    fn execute(&self, name: &str, page: &Page) -> Result<Vec<u8>>;
}

/// Template renderer with the bundled layout
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with the bundled layout loaded
    pub fn new() -> anyhow::Result<Self> {
        Self::with_layout(include_str!("layout.html"))
    }

    /// Create a renderer whose layout is read from `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read layout {:?}: {}", path, e))?;
        tracing::debug!("Loaded layout from {:?}", path);
        Self::with_layout(&source)
    }

    /// Create a renderer from layout source text
    pub fn with_layout(source: &str) -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        // Page fields carry HTML fragments
        tera.autoescape_on(vec![]);

        tera.add_raw_template(LAYOUT, source)?;
        tera.register_filter("strip_html", strip_html_filter);

        Ok(Self { tera })
    }
}

impl Layout for TemplateRenderer {
    fn execute(&self, name: &str, page: &Page) -> Result<Vec<u8>> {
        let fail = |e: tera::Error| Error::TemplateExecution {
            path: page.path.clone(),
            message: error_chain(&e),
        };
        let context = Context::from_serialize(page).map_err(fail)?;
        let html = self.tera.render(name, &context).map_err(fail)?;
        Ok(html.into_bytes())
    }
}

/// Tera reports the interesting cause several sources deep
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(result))
}
