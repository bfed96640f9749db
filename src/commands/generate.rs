//! Generate the static site

use anyhow::{Context, Result};
use std::time::Instant;

use crate::config::SiteConfig;
use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::templates::Layout;

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Pages read from the input path
    pub loaded: usize,
    /// Files written below the output directory
    pub written: usize,
}

/// Read, fill and write the site described by `config`
pub fn run(config: &SiteConfig, layout: &dyn Layout) -> Result<Summary> {
    let start = Instant::now();

    let pages = ContentLoader::new(&config.input, &config.output)
        .load()
        .context("Process input")?;
    let loaded = pages.len();
    tracing::info!("Loaded {} pages from {:?}", loaded, config.input);

    let generator = Generator::new(config, layout);
    let pages = generator.fill(pages).context("Process fill")?;

    generator.write(&pages).context("Process output")?;
    let written = pages.len();

    let duration = start.elapsed();
    tracing::info!(
        "Wrote {} files to {:?} in {:.2}s",
        written,
        config.output,
        duration.as_secs_f64()
    );

    Ok(Summary { loaded, written })
}
