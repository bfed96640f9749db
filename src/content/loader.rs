//! Content loader - reads pages from the input file or directory

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

use super::page::{is_markdown, Page};
use crate::error::{Error, Result};

/// Loads pages from an input path and places them under an output root
pub struct ContentLoader<'a> {
    input: &'a Path,
    output: &'a Path,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(input: &'a Path, output: &'a Path) -> Self {
        Self { input, output }
    }

    /// Load every page below the input path.
    ///
    /// A regular file yields exactly one page; a directory is walked
    /// recursively and the first error aborts the load.
    pub fn load(&self) -> Result<Vec<Page>> {
        let metadata = fs::metadata(self.input).map_err(|source| Error::InputNotFound {
            path: self.input.to_path_buf(),
            source,
        })?;

        let pages = if metadata.is_dir() {
            self.load_dir()?
        } else {
            let name = self
                .input
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            tracing::debug!("Single file mode: {:?}", self.input);
            vec![self.load_file(self.input, &name)?]
        };

        check_unique_outputs(&pages)?;
        Ok(pages)
    }

    fn load_dir(&self) -> Result<Vec<Page>> {
        let mut pages = Vec::new();

        // Symlinks are not followed into directories; a linked directory
        // fails to read as a file and aborts the load.
        for entry in WalkDir::new(self.input).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::InputRead {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.input.to_path_buf()),
                message: e.to_string(),
            })?;
            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(self.input).unwrap_or(path);
            let name = slash_path(relative);
            pages.push(self.load_file(path, &name)?);
        }

        Ok(pages)
    }

    /// Load a single file; anything that isn't markdown passes through
    fn load_file(&self, path: &Path, name: &str) -> Result<Page> {
        let raw = fs::read(path).map_err(|e| Error::InputRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let page = Page::new(name, raw, !is_markdown(name))?;
        tracing::debug!("Loaded {} -> {}", name, page.path);
        Ok(page.with_output_root(self.output))
    }
}

/// Join path components with `/` regardless of platform
fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Reject page sets where two pages would write the same file
pub fn check_unique_outputs(pages: &[Page]) -> Result<()> {
    let mut seen: HashMap<&Path, &str> = HashMap::with_capacity(pages.len());
    for page in pages {
        if let Some(first) = seen.insert(&page.output, &page.source) {
            return Err(Error::DuplicateOutput {
                path: page.output.clone(),
                first: first.to_string(),
                second: page.source.clone(),
            });
        }
    }
    Ok(())
}
