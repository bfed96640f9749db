//! CLI entry point for webrender

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webrender::config::SiteConfig;
use webrender::Webrender;

#[derive(Parser)]
#[command(name = "webrender")]
#[command(version)]
#[command(about = "Render markdown and static files into a website", long_about = None)]
struct Cli {
    /// Input file or directory [default: src]
    #[arg(long = "in")]
    input: Option<PathBuf>,

    /// Output directory [default: public]
    #[arg(long = "out")]
    output: Option<PathBuf>,

    /// Analytics id
    #[arg(long)]
    ga: Option<String>,

    /// Base url, without a trailing slash
    #[arg(long)]
    base: Option<String>,

    /// Click logger endpoint
    #[arg(long)]
    logger: Option<String>,

    /// Site configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layout template replacing the bundled one
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Add ping attributes reporting link clicks to the logger
    #[arg(long)]
    track_links: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    /// Apply command line values over the loaded configuration
    fn merge_into(self, mut config: SiteConfig) -> SiteConfig {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(ga) = self.ga {
            config.analytics_id = ga;
        }
        if let Some(base) = self.base {
            config.url_base = base;
        }
        if let Some(logger) = self.logger {
            config.url_logger = logger;
        }
        if self.track_links {
            config.track_links = true;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "webrender=debug,info"
    } else {
        "webrender=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let layout = cli.layout.clone();
    let config = cli.merge_into(config);

    let site = match layout {
        Some(path) => Webrender::with_layout_file(config, path)?,
        None => Webrender::new(config)?,
    };

    let summary = site.generate()?;
    println!(
        "Rendered {} pages into {} files",
        summary.loaded, summary.written
    );

    Ok(())
}
