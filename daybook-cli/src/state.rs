use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `~/.daybook`, where the optional config file lives
pub fn daybook_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".daybook"))
}

pub fn ensure_daybook_home() -> Result<PathBuf> {
    let dir = daybook_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(daybook_home()?.join("config.toml"))
}
