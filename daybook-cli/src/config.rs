//! Presentation defaults for the CLI. The chart of accounts is not configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{config_path, ensure_daybook_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Where `monthly_journal_MM_YYYY.csv` is written when `--output` is not given
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Shown next to amounts in the console summary
    pub currency: String,
    pub preview_lines: usize,
    /// tracing filter used when DAYBOOK_LOG is unset
    pub log_level: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            currency: "AED".to_string(),
            preview_lines: 20,
            log_level: "warn".to_string(),
        }
    }
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Config for commands that must not depend on the optional file: any
/// problem (no HOME, unreadable or malformed file) yields the defaults plus
/// the error, so the caller can report it once logging is up.
pub fn config_or_default(loaded: Result<Config>) -> (Config, Option<anyhow::Error>) {
    match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

pub fn save_config_to(p: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    ensure_daybook_home()?;
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&p, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
