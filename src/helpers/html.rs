//! HTML post-processing applied to rendered page bodies

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref HEADING_WEBP: Regex =
        Regex::new(r#"<h[1-6]><img src="([^"]*?)\.webp" alt="([^"]*)"\s*/?></h[1-6]>"#).unwrap();
    static ref ANCHOR: Regex = Regex::new(r#"<a href="([^"]*)">"#).unwrap();
}

/// Turn heading-wrapped `.webp` images into `<picture>` elements
///
/// # Examples
/// ```
/// use webrender::helpers::rewrite_image_blocks;
/// let html = rewrite_image_blocks(r#"<h4><img src="/a.webp" alt="A" /></h4>"#);
/// assert!(html.contains(r#"<source type="image/jpeg" srcset="/a.jpg">"#));
/// ```
pub fn rewrite_image_blocks(html: &str) -> String {
    HEADING_WEBP
        .replace_all(html, |caps: &Captures| {
            let src = &caps[1];
            let alt = &caps[2];
            format!(
                r#"
<picture>
        <source type="image/webp" srcset="{src}.webp">
        <source type="image/jpeg" srcset="{src}.jpg">
        <img src="{src}.png" alt="{alt}">
</picture>
"#
            )
        })
        .into_owned()
}

/// Add a `ping` attribute reporting clicks to `logger` on every plain anchor
pub fn rewrite_links(html: &str, logger: &str, src: &str) -> String {
    ANCHOR
        .replace_all(html, |caps: &Captures| {
            let dst = &caps[1];
            format!(r#"<a href="{dst}" {}>"#, ping(logger, src, dst))
        })
        .into_owned()
}

/// `ping` attribute for a link from `src` to `dst`
pub fn ping(logger: &str, src: &str, dst: &str) -> String {
    format!(r#"ping="{logger}?trigger=ping&src={src}&dst={dst}""#)
}
