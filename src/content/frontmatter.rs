//! Front-matter parsing

use serde::{Deserialize, Serialize};

/// Delimiter that opens and closes a front-matter block
pub const DELIMITER: &[u8] = b"---";

/// Front-matter data from a markdown page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub date: Option<String>,
    pub description: Option<String>,
    /// Raw HTML placed in the layout header
    pub header: Option<String>,
    /// Name of the stylesheet variant the layout should use
    pub style: Option<String>,
    pub title: Option<String>,
}

impl FrontMatter {
    /// Split content into its front-matter block and body.
    ///
    /// Returns `None` unless the content starts with `---` and a second `---`
    /// closes the block. The text before the first delimiter is always empty.
    pub fn split(content: &[u8]) -> Option<(&[u8], &[u8])> {
        let rest = content.strip_prefix(DELIMITER)?;
        let end = find(rest, DELIMITER)?;
        Some((&rest[..end], &rest[end + DELIMITER.len()..]))
    }

    /// Parse a YAML front-matter block
    pub fn parse(yaml: &[u8]) -> Result<Self, serde_yaml::Error> {
        // serde_yaml rejects an empty document
        if yaml.iter().all(u8::is_ascii_whitespace) {
            return Ok(FrontMatter::default());
        }
        serde_yaml::from_slice(yaml)
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
