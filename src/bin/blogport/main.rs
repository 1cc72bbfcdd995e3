use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use spdlog::{info, warn};

use blogport::importer::run_import;
use blogport::logger::configure_logger;

use crate::config::open_config;

mod config;

/// Converts a Blogger export into post files, published posts in `_posts`
/// and drafts in `_drafts`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Blogger export file (Settings -> Other -> Back up content)
    export_file: PathBuf,

    /// Optional TOML config path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config)?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    if let Some(location) = config.log.as_ref().and_then(|l| l.location.as_ref()) {
        info!("Logging to {}", location.display());
    }

    let summary = run_import(&args.export_file, &config)?;
    info!("Imported {} posts and {} drafts, {} comments attached, {} entries ignored",
        summary.published, summary.drafts, summary.comments, summary.ignored);

    Ok(())
}
