use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fakestore::config::Config;
use fakestore::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "fakestore", version, about = "Browse the FakeStore catalog in the terminal")]
struct Cli {
    /// Store API base URL (overrides `[api] base_url`)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Product cards per grid row (overrides `[display] columns`)
    #[arg(long, value_name = "N")]
    columns: Option<u16>,

    /// Skip downloading product pictures
    #[arg(long)]
    no_images: bool,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(columns) = self.columns {
            config.display.columns = columns;
        }
        if self.no_images {
            config.display.images = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    fakestore::ui::run(config)
}
