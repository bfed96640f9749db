//! Plain-text sitemap: one canonical URL per line

use crate::content::Page;

/// Output file name of the sitemap
pub const SITEMAP_PATH: &str = "sitemap.txt";

/// Newline-joined canonical URLs of `pages`, in order
pub fn build_sitemap(pages: &[Page]) -> Vec<u8> {
    pages
        .iter()
        .map(|page| page.url_canonical.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes()
}
