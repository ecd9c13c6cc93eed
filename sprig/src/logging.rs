use anyhow::{Context, Result};
use sprig_core::config::APP_NAME;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "sprig.log";

/// `--log` raises the file logger from warnings-only to full debug traces.
pub fn level_for(debug: bool) -> log::LevelFilter {
    if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

/// `$XDG_CACHE_HOME/sprig/sprig.log`, or `~/.cache/sprig/sprig.log` when the
/// variable is unset or empty.
fn resolve_log_file() -> Result<PathBuf> {
    let cache = match std::env::var("XDG_CACHE_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .context("cannot determine home directory")?
            .join(".cache"),
    };
    Ok(cache.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Logging goes to a file only; stdout belongs to the shell and the alternate
/// screen to the TUI. Returns the file being logged to.
pub fn init(debug: bool) -> Result<PathBuf> {
    let log_file = resolve_log_file()?;
    if let Some(dir) = log_file.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
    }
    simple_log::file(
        log_file.to_string_lossy().into_owned(),
        level_for(debug),
        10,
        10,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    log::debug!("logging to {}", log_file.display());
    Ok(log_file)
}
