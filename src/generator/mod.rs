//! Generator module - derives blog, feed and sitemap pages and writes the site

pub mod feed;
pub mod sitemap;

use rayon::prelude::*;
use std::borrow::Cow;
use std::fs;

use crate::config::SiteConfig;
use crate::content::loader::check_unique_outputs;
use crate::content::Page;
use crate::error::{Error, Result};
use crate::helpers::{canonicalize, full_url, ping, rewrite_image_blocks, rewrite_links};
use crate::templates::{Layout, LAYOUT};

pub use feed::{Feed, FEED_PATH};
pub use sitemap::{build_sitemap, SITEMAP_PATH};

/// Output path of the page that lists all blog posts
const BLOG_INDEX: &str = "blog/index.html";

/// Fills derived page fields and writes pages to disk
pub struct Generator<'a> {
    config: &'a SiteConfig,
    layout: &'a dyn Layout,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(config: &'a SiteConfig, layout: &'a dyn Layout) -> Self {
        Self { config, layout }
    }

    /// Fill derived fields across the page set.
    ///
    /// Every page gets the shared configuration values and its URLs. With
    /// more than one page the set is also sorted, the blog index and posts
    /// are filled in, and the feed and sitemap pages are appended.
    pub fn fill(&self, mut pages: Vec<Page>) -> Result<Vec<Page>> {
        for page in pages.iter_mut() {
            self.stamp(page);
        }

        if pages.len() <= 1 {
            tracing::debug!("Single page, skipping blog, feed and sitemap");
            return Ok(pages);
        }

        pages.sort_by(|a, b| b.source.cmp(&a.source));

        let mut feed = Feed::new(self.config);
        let mut list = String::from("<ul>\n");
        let mut blog_index = None;

        for (i, page) in pages.iter_mut().enumerate() {
            if is_blog_page(page) {
                if page.path == BLOG_INDEX {
                    blog_index = Some(i);
                } else if page.file_name() == "index.html" {
                    tracing::debug!("Not treating nested index {} as a post", page.source);
                } else {
                    self.fill_post(page);
                    list.push_str(&self.list_item(page));
                    feed.push(&page.title, &page.url_canonical, &page.date);
                }
            }

            if page.is_html() {
                if self.config.track_links {
                    page.main = rewrite_links(&page.main, &self.config.url_logger, &page.url_canonical);
                }
                page.main = rewrite_image_blocks(&page.main);
            }
        }
        list.push_str("</ul>\n");

        match blog_index {
            Some(i) => {
                let index = &mut pages[i];
                index.main = list;
                index.header = format!(
                    "{}\n<p>{}</p>",
                    self.blog_title(&full_url(self.config.base_url(), "/blog/")),
                    self.config.blog_tagline
                );
            }
            None if !feed.entries.is_empty() => {
                tracing::warn!("Found {} blog posts but no blog index", feed.entries.len());
            }
            None => {}
        }
        tracing::info!("Filled {} blog posts", feed.entries.len());

        let xml = feed.to_xml()?;
        pages.push(self.generated(FEED_PATH, xml.into_bytes())?);
        let urls = build_sitemap(&pages);
        pages.push(self.generated(SITEMAP_PATH, urls)?);

        check_unique_outputs(&pages)?;
        Ok(pages)
    }

    /// Write every page, rendering non pass-through pages through the layout.
    ///
    /// Pages are written in parallel; all failures are collected.
    pub fn write(&self, pages: &[Page]) -> Result<()> {
        let errors: Vec<Error> = pages
            .par_iter()
            .filter_map(|page| self.write_page(page).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Output(errors))
        }
    }

    fn write_page(&self, page: &Page) -> Result<()> {
        if let Some(parent) = page.output.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents: Cow<[u8]> = if page.pass_through {
            Cow::Borrowed(&page.raw)
        } else {
            Cow::Owned(self.layout.execute(LAYOUT, page)?)
        };

        fs::write(&page.output, contents).map_err(|source| Error::OutputWrite {
            path: page.output.clone(),
            source,
        })?;
        tracing::debug!("Wrote {:?}", page.output);
        Ok(())
    }

    /// Copy configuration values onto the page and compute its URLs
    fn stamp(&self, page: &mut Page) {
        let base = self.config.base_url();
        page.analytics_id = self.config.analytics_id.clone();
        page.url_base = base.to_string();
        page.url_logger = self.config.url_logger.clone();
        page.url_absolute = canonicalize(&page.path);
        page.url_canonical = full_url(base, &page.url_absolute);
    }

    /// Date a post from its file name and give it the blog header
    fn fill_post(&self, page: &mut Page) {
        page.date = page.file_name().chars().take(10).collect();
        page.header = format!(
            "{}\n<p><time datetime=\"{date}\">{date}</time></p>",
            self.blog_title(&page.url_canonical),
            date = page.date
        );
    }

    /// Blog index entry linking to a post
    fn list_item(&self, page: &Page) -> String {
        let ping = if self.config.track_links {
            format!(" {}", ping(&self.config.url_logger, "/blog/", &page.url_canonical))
        } else {
            String::new()
        };
        format!(
            "<li><time datetime=\"{date}\">{date}</time> | <a href=\"{}\"{}>{}</a></li>\n",
            page.url_absolute,
            ping,
            page.title,
            date = page.date
        )
    }

    /// Heading linking back to the blog index from the page at `src`
    fn blog_title(&self, src: &str) -> String {
        let ping = if self.config.track_links {
            format!(" {}", ping(&self.config.url_logger, src, "/blog/"))
        } else {
            String::new()
        };
        format!("<h2><a href=\"/blog/\"{}>b<em>log</em></a></h2>", ping)
    }

    fn generated(&self, name: &str, raw: Vec<u8>) -> Result<Page> {
        let mut page = Page::new(name, raw, true)?.with_output_root(&self.config.output);
        self.stamp(&mut page);
        Ok(page)
    }
}

/// Rendered pages below a `blog` directory
fn is_blog_page(page: &Page) -> bool {
    !page.pass_through && format!("/{}", page.path).contains("/blog/")
}
