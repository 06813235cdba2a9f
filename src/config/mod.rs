pub mod cli;
pub mod toml_config;

use crate::domain::model::MenuSource;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

pub const DEFAULT_BASE_DIR: &str = "tmp/southfork";
pub const DEFAULT_OUTPUT_FILE: &str = "menu.normalized.json";
pub const DEFAULT_ID_PREFIX: &str = "sfg";

pub fn default_sources() -> Vec<MenuSource> {
    [
        ("Dinner", "dinner.html"),
        ("Lunch", "lunch.html"),
        ("Brunch", "brunch.html"),
        ("Happy Hour", "happy-hour.html"),
        ("Cocktails", "cocktails.html"),
        ("Desserts", "dessert.html"),
        ("Kids", "kids.html"),
    ]
    .into_iter()
    .map(|(label, path)| MenuSource::new(label, path))
    .collect()
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "menu-extract")]
#[command(about = "Convert saved stylish price list pages into a normalized menu JSON")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with sources and output settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Directory holding the input pages and the output file")]
    pub base_dir: Option<String>,

    #[arg(long, help = "Output file name, relative to the base directory")]
    pub output_file: Option<String>,

    #[arg(long, help = "Prefix spliced into every category and item id")]
    pub id_prefix: Option<String>,

    #[arg(
        long = "source",
        value_name = "LABEL=PATH",
        value_parser = parse_source_arg,
        help = "Menu section and its page; repeat to replace the default list"
    )]
    pub sources: Vec<MenuSource>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
fn parse_source_arg(raw: &str) -> std::result::Result<MenuSource, String> {
    let (label, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=PATH, got '{}'", raw))?;
    Ok(MenuSource::new(label.trim(), path.trim()))
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Layer defaults, then the TOML file, then explicit flags.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?.into_run_config()
            }
            None => RunConfig::default(),
        };

        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(output_file) = &self.output_file {
            config.output_file = output_file.clone();
        }
        if let Some(id_prefix) = &self.id_prefix {
            config.id_prefix = id_prefix.clone();
        }
        if !self.sources.is_empty() {
            config.sources = self.sources.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub base_dir: String,
    pub output_file: String,
    pub id_prefix: String,
    pub sources: Vec<MenuSource>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_dir: DEFAULT_BASE_DIR.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            sources: default_sources(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn sources(&self) -> &[MenuSource] {
        &self.sources
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn id_prefix(&self) -> &str {
        &self.id_prefix
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("base_dir", &self.base_dir)?;
        validation::validate_path("output_file", &self.output_file)?;
        validation::validate_slug("id_prefix", &self.id_prefix)?;
        validation::validate_non_empty_list("sources", &self.sources)?;
        for source in &self.sources {
            validation::validate_non_empty_string("sources.label", &source.label)?;
            validation::validate_path("sources.path", &source.path)?;
        }
        validation::validate_unique("sources.path", self.sources.iter().map(|s| s.path.as_str()))?;
        Ok(())
    }
}
