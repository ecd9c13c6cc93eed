use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};

pub const APP_NAME: &str = "sprig";

fn config_dir() -> PathBuf {
    // Use ~/.config on both Linux and macOS (not ~/Library/Application Support)
    #[cfg(unix)]
    {
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".config")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        dirs::config_dir()
            .expect("Unable to find config directory")
            .join(APP_NAME)
    }
}

fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Optional user configuration. Everything has a default; CLI flags override
/// whatever the file sets.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Run `git pull` after every checkout, as if `-p` were always passed.
    pub pull: bool,

    /// Never enumerate remote branches, as if `-l` were always passed.
    pub local: bool,

    /// Run `git fetch` before listing branches, as if `-u` were always passed.
    pub update: bool,

    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct ThemeConfig {
    /// Selection highlight background
    pub accent: ThemeColor,
    /// Foreground drawn over the selection highlight
    pub highlight_fg: ThemeColor,
    /// Tag on remote-only branches
    pub remote: ThemeColor,
    pub muted: ThemeColor,
    pub border: ThemeColor,
    pub error: ThemeColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: ThemeColor::Named(NamedColor::Cyan),
            highlight_fg: ThemeColor::Named(NamedColor::Black),
            remote: ThemeColor::Named(NamedColor::Yellow),
            muted: ThemeColor::Named(NamedColor::DarkGray),
            border: ThemeColor::Named(NamedColor::DarkGray),
            error: ThemeColor::Named(NamedColor::Red),
        }
    }
}

/// A color either named (`accent = "magenta"`) or RGB (`accent = [255, 0, 255]`).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
}

pub fn load_config_from_str(s: &str) -> Result<Config> {
    let config: Config = toml::from_str(s)?;
    Ok(config)
}

/// Load `~/.config/sprig/config.toml`; a missing file yields the defaults.
pub fn load_config() -> Result<Config> {
    let config_file = config_file();
    if !config_file.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&config_file)
        .with_context(|| format!("failed to read {}", config_file.display()))?;
    load_config_from_str(&contents)
        .with_context(|| format!("invalid config at {}", config_file.display()))
}
