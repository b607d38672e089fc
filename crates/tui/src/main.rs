mod app;
mod block_font;

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};
use winzones_core::{
    config::{self, AppConfig},
    SiteContent,
};

/// Terminal edition of the WinZones gaming site.
#[derive(Debug, Parser)]
#[command(name = "winzones", version, about)]
struct Cli {
    /// Config file to read instead of the default location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON site content replacing the built-in copy.
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Show messaging links instead of opening them.
    #[arg(long)]
    no_open: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => {
            config::ensure_default_config()?;
            AppConfig::load()?
        }
    };
    if let Some(path) = cli.content {
        config.content_path = Some(path);
    }
    if cli.no_open {
        config.open_links = false;
    }

    let content: SiteContent = config.site_content()?;
    info!(
        site = %content.site.name,
        games = content.games.len(),
        open_links = config.open_links,
        "Loaded site content"
    );

    let mut app = app::WinZonesApp::new(content, &config);
    app.run().await
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_path = log_dir.join("winzones.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // The terminal belongs to the UI, so logs only go to the file.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
