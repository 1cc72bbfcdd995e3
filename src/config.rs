use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ImportError, Result};
use crate::post::RenderOptions;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub drafts_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            posts_dir: PathBuf::from("_posts"),
            drafts_dir: PathBuf::from("_drafts"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Render {
    pub render_comments: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    #[serde(default = "default_level")]
    pub level: LogLevel,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub render: Render,
    pub log: Option<Log>,
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            render_comments: self.render.render_comments,
            ..Default::default()
        }
    }
}

pub fn parse_config(cfg_content: &str) -> Result<Config> {
    toml::from_str::<Config>(cfg_content)
        .map_err(|e| ImportError::Config(format!("Error parsing configuration file: {}", e)))
}

pub fn read_config(cfg_path: &Path) -> Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path).map_err(|e| {
        ImportError::Config(format!("Error opening configuration file {}: {}", cfg_path.display(), e))
    })?;

    parse_config(&cfg_content)
}
