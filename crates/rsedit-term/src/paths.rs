use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "rsedit")
}

/// Directory for rsedit's log files, created if missing.
/// Location: `~/.local/share/rsedit/logs` (XDG-compliant)
pub fn log_dir() -> Result<PathBuf> {
    let dirs = project_dirs().context("Could not determine data directory")?;
    let dir = dirs.data_dir().join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    Ok(dir)
}

/// Default config file location: `~/.config/rsedit/config.yaml`.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.yaml"))
}
