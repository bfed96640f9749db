//! Content module - handles pages, front matter and markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod page;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use page::Page;
