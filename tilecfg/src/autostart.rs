//! Runs the user's startup script once, detached.
use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::UserConfig;

/// Start the autostart script without waiting for it and return its pid. The script is fire
/// and forget: its handle is dropped and its exit status is never looked at. Failing to start
/// it is logged and otherwise ignored.
pub fn run(config: &UserConfig) -> Option<u32> {
    let path = match config.autostart_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!("Could not resolve autostart script: {err:#}");
            return None;
        }
    };
    if !path.exists() {
        tracing::debug!("No autostart script at {}", path.display());
        return None;
    }
    match run_script(&path) {
        Ok(pid) => {
            tracing::info!("Started autostart script {}", path.display());
            tracing::debug!("Autostart script running as pid {pid}");
            Some(pid)
        }
        Err(err) => {
            tracing::warn!("Unable to run autostart script {}: {err}", path.display());
            None
        }
    }
}

fn run_script(path: &Path) -> Result<u32> {
    let child = Command::new(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(child.id())
}
