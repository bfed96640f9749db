//! Atom 1.0 feed of blog posts

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::error::{Error, Result};

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Output file name of the feed
pub const FEED_PATH: &str = "feed.atom";

#[derive(Debug, Clone, Serialize)]
#[serde(rename = "feed")]
pub struct Feed {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    pub title: String,
    pub id: String,
    #[serde(rename = "link")]
    pub links: Vec<Link>,
    pub updated: String,
    pub author: Person,
    #[serde(rename = "entry")]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    #[serde(rename = "@rel")]
    pub rel: String,
    #[serde(rename = "@href")]
    pub href: String,
    #[serde(rename = "@type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "$text")]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub title: String,
    pub link: Link,
    pub id: String,
    pub published: String,
    pub updated: String,
    pub author: Person,
    pub summary: Text,
}

/// Date part of the derived `tag:` feed id
const TAG_DATE: &str = "2020";

impl Feed {
    /// Create an empty feed stamped with the current time.
    ///
    /// Without a configured `feed.id` the id is a tag URI on the base URL
    /// host with a fixed date, so it stays the same between runs.
    pub fn new(config: &SiteConfig) -> Self {
        let base = config.base_url();
        let id = if config.feed.id.is_empty() {
            let host = base
                .split("://")
                .nth(1)
                .unwrap_or(base)
                .trim_end_matches('/');
            format!("tag:{},{}:{}", host, TAG_DATE, host)
        } else {
            config.feed.id.clone()
        };

        Self {
            xmlns: ATOM_NS,
            title: config.feed.title.clone(),
            id,
            links: vec![
                Link {
                    rel: "self".to_string(),
                    href: format!("{}/{}", base, FEED_PATH),
                    mime_type: "application/atom+xml".to_string(),
                },
                Link {
                    rel: "alternate".to_string(),
                    href: format!("{}/blog/", base),
                    mime_type: "text/html".to_string(),
                },
            ],
            updated: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            author: Person {
                name: config.feed.author.clone(),
                uri: config.feed.author_uri.clone(),
                email: config.feed.author_email.clone(),
            },
            entries: Vec::new(),
        }
    }

    /// Append an entry for a post published on `date` (`YYYY-MM-DD`)
    pub fn push(&mut self, title: &str, url_canonical: &str, date: &str) {
        if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            tracing::warn!("{}: {:?} is not a YYYY-MM-DD date", url_canonical, date);
        }
        let stamp = format!("{}T00:00:00Z", date);
        self.entries.push(Entry {
            title: title.to_string(),
            link: Link {
                rel: "alternate".to_string(),
                href: url_canonical.to_string(),
                mime_type: "text/html".to_string(),
            },
            id: url_canonical.to_string(),
            published: stamp.clone(),
            updated: stamp,
            author: self.author.clone(),
            summary: Text {
                kind: "text".to_string(),
                body: title.to_string(),
            },
        });
    }

    /// Encode as tab-indented XML
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        let mut ser = Serializer::new(&mut xml);
        ser.indent('\t', 1);
        self.serialize(ser)
            .map_err(|e| Error::FeedEncode(e.to_string()))?;
        xml.push('\n');
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedConfig;

    fn config() -> SiteConfig {
        SiteConfig {
            url_base: "https://example.com/".to_string(),
            feed: FeedConfig {
                title: "a log".to_string(),
                id: "tag:example.com,2020:example.com".to_string(),
                author: "Someone".to_string(),
                author_uri: Some("https://example.com".to_string()),
                author_email: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_feed_identity() {
        let feed = Feed::new(&config());
        assert_eq!(feed.links[0].href, "https://example.com/feed.atom");
        assert_eq!(feed.links[1].href, "https://example.com/blog/");
        assert_eq!(feed.author.name, "Someone");
        assert!(feed.updated.ends_with('Z'));
    }

    #[test]
    fn test_default_id_from_base() {
        let mut config = config();
        config.feed.id.clear();
        let feed = Feed::new(&config);
        assert_eq!(feed.id, "tag:example.com,2020:example.com");

        config.url_base = "https://blog.example.org/".to_string();
        assert_eq!(Feed::new(&config).id, "tag:blog.example.org,2020:blog.example.org");
    }

    #[test]
    fn test_entry() {
        let mut feed = Feed::new(&config());
        feed.push("B", "https://example.com/blog/2023-06-01-b/", "2023-06-01");
        let entry = &feed.entries[0];
        assert_eq!(entry.id, "https://example.com/blog/2023-06-01-b/");
        assert_eq!(entry.link.href, entry.id);
        assert_eq!(entry.published, "2023-06-01T00:00:00Z");
        assert_eq!(entry.updated, entry.published);
        assert_eq!(entry.summary.body, "B");
        assert_eq!(entry.author, feed.author);
    }

    #[test]
    fn test_to_xml() {
        let mut feed = Feed::new(&config());
        feed.push("Fish & Chips", "https://example.com/blog/2023-01-01-a/", "2023-01-01");
        feed.push("B", "https://example.com/blog/2023-06-01-b/", "2023-06-01");
        let xml = feed.to_xml().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(xml.contains("<feed xmlns=\"http://www.w3.org/2005/Atom\">"));
        assert!(xml.contains("\n\t<title>a log</title>"));
        assert!(xml.contains(
            "<link rel=\"self\" href=\"https://example.com/feed.atom\" type=\"application/atom+xml\""
        ));
        assert!(xml.contains("\n\t\t<title>Fish &amp; Chips</title>"));
        assert!(xml.contains("<summary type=\"text\">B</summary>"));
        assert!(xml.contains("<uri>https://example.com</uri>"));
        assert!(!xml.contains("<email>"));
        assert_eq!(xml.matches("<entry>").count(), 2);
        assert!(xml.find("2023-01-01-a").unwrap() < xml.find("2023-06-01-b").unwrap());
        assert!(xml.trim_end().ends_with("</feed>"));
    }
}
