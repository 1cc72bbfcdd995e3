use std::path::PathBuf;

use anyhow::{Context, Result};

use blogport::config::{read_config, Config};

/// Without a config path the defaults reproduce the plain import:
/// `_posts` and `_drafts` in the current directory, comments not rendered.
/// A log file is only written when `[log] location` is set.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let Some(cfg_path) = cfg_path else {
        return Ok(Config::default());
    };

    read_config(&cfg_path)
        .with_context(|| format!("Reading config from {}", cfg_path.display()))
}
