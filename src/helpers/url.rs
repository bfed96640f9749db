//! URL helper functions

/// Map an output path to the public path it is served at
///
/// # Examples
/// ```
/// use webrender::helpers::canonicalize;
/// assert_eq!(canonicalize("blog/index.html"), "/blog/");
/// assert_eq!(canonicalize("about.html"), "/about/");
/// assert_eq!(canonicalize("feed.atom"), "/feed.atom");
/// ```
pub fn canonicalize(path: &str) -> String {
    let url = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    let Some(stem) = url.strip_suffix(".html") else {
        return url;
    };
    let stem = match stem.strip_suffix("index") {
        Some(dir) if dir.ends_with('/') => dir,
        _ => stem,
    };
    if stem.ends_with('/') {
        stem.to_string()
    } else {
        format!("{}/", stem)
    }
}

/// Generate a full URL from the site base and a canonical path
pub fn full_url(base: &str, url_absolute: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), url_absolute)
}
