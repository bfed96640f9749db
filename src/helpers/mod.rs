//! Helper functions for URLs and rendered HTML

mod html;
mod url;

pub use html::*;
pub use url::*;
