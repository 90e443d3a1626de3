//! User-editable part of the configuration: everything that is data rather than structure.

mod checks;
mod default;
pub mod keybind;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tilecfg_core::models::{FloatRule, Group, Settings};
use tilecfg_core::{DuplicatePolicy, ModMask, WidgetDefaults};
use xdg::BaseDirectories;

use crate::utils::file_handler::load_config_file;
use crate::ThemeSetting;

/// General configuration, read from `config.ron` (or `config.toml`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    pub modkey: ModMask,
    /// Spawned by `mod + Return`.
    pub terminal: String,
    /// At most nine, each gets a number key.
    pub groups: Vec<Group>,
    pub log_level: String,
    /// Script run once at startup; `~` and environment variables are expanded. Defaults to
    /// `autostart.sh` in the config directory.
    pub autostart: Option<String>,
    pub settings: Settings,
    pub widget_defaults: WidgetDefaults,
    pub duplicate_policy: DuplicatePolicy,
    /// Appended to the stock float rules.
    pub float_rules: Vec<FloatRule>,
}

/// Read the configuration from the default location, falling back to the built-in one.
///
/// The load error is handed back so it can be reported once logging is set up, which in turn
/// needs the loaded `log_level`.
pub fn load() -> (UserConfig, Option<anyhow::Error>) {
    load_or_default(None)
}

/// Like [`load`], reading `path` when given.
pub fn load_or_default(path: Option<PathBuf>) -> (UserConfig, Option<anyhow::Error>) {
    match load_config_file(path) {
        Ok(config) => (config, None),
        Err(err) => (UserConfig::default(), Some(err)),
    }
}

/// # Errors
///
/// Fails when the xdg base directories cannot be determined.
pub fn config_dir() -> Result<BaseDirectories> {
    Ok(BaseDirectories::with_prefix("tilecfg")?)
}

impl UserConfig {
    /// Where the autostart script lives, with `~` and variables expanded.
    ///
    /// # Errors
    ///
    /// Fails when the configured path references an unset variable or the config directory
    /// cannot be created.
    pub fn autostart_path(&self) -> Result<PathBuf> {
        match &self.autostart {
            Some(path) => Ok(PathBuf::from(shellexpand::full(path)?.into_owned())),
            None => Ok(config_dir()?.place_config_file("autostart.sh")?),
        }
    }

    /// Load the theme next to the config file. `theme.ron` wins over `theme.toml`; with
    /// neither present the built-in theme is used.
    ///
    /// # Errors
    ///
    /// Fails when the theme file found cannot be read or parsed.
    pub fn try_theme(&self, dir: &Path) -> Result<ThemeSetting> {
        for name in ["theme.ron", "theme.toml"] {
            let path = dir.join(name);
            if path.exists() {
                tracing::debug!("Theme file '{}' found.", path.display());
                return ThemeSetting::load(path);
            }
        }
        Ok(ThemeSetting::default())
    }

    /// [`Self::try_theme`], logging a broken theme file and using the built-in theme instead.
    pub fn theme(&self, dir: &Path) -> ThemeSetting {
        self.try_theme(dir).unwrap_or_else(|err| {
            tracing::error!("Error loading theme, using defaults: {err:#}");
            ThemeSetting::default()
        })
    }
}
