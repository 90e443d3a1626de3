use crate::{config::config_dir, ThemeSetting, UserConfig};
use anyhow::{Context, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

const COMMENT_HEADER: &str = r#"// tilecfg: keys, groups and bar options for the tiling window manager.
// Colors, borders and bar geometry live in theme.ron next to this file.
// Run `tilecfg-check` after editing.

"#;

/// Serialization targets for the built configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Ron,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

/// # Errors
///
/// Fails when the xdg base directories cannot be determined or created.
pub fn get_default_path() -> Result<PathBuf> {
    Ok(config_dir()?.place_config_file("config.ron")?)
}

pub fn check_file_type(path: impl AsRef<Path>) -> ConfigFileType {
    if path.as_ref().extension() == Some(OsStr::new("toml")) {
        ConfigFileType::TomlFile
    } else {
        ConfigFileType::RonFile
    }
}

/// Load the configuration from `path`, or from the config directory when `path` is `None`.
/// In the config directory `config.ron` wins over `config.toml`; with neither present the
/// default configuration is written to `config.ron` and returned.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or the default cannot be written.
pub fn load_config_file(path: Option<PathBuf>) -> Result<UserConfig> {
    tracing::debug!("Loading config file");

    if let Some(path) = path {
        return load_file(&path);
    }

    let ron_file = get_default_path()?;
    let toml_file = ron_file.with_extension("toml");
    if ron_file.exists() {
        tracing::debug!("Config file '{}' found.", ron_file.display());
        load_file(&ron_file)
    } else if toml_file.exists() {
        tracing::debug!("Config file '{}' found.", toml_file.display());
        load_file(&toml_file)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = UserConfig::default();
        write_to_file(&ron_file, &config)?;
        Ok(config)
    }
}

/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_theme_file(path: impl AsRef<Path>) -> Result<ThemeSetting> {
    load_file(path.as_ref())
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let parsed = match check_file_type(path) {
        ConfigFileType::RonFile => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            ron.from_str(&contents)?
        }
        ConfigFileType::TomlFile => toml::from_str(&contents)?,
    };
    Ok(parsed)
}

/// Write `value` as pretty RON behind the comment header.
///
/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file<T: Serialize>(ron_file: &Path, value: &T) -> Result<()> {
    let ron = serialize(value, Format::Ron)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)
        .with_context(|| format!("Creating {}", ron_file.display()))?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}

/// # Errors
///
/// Fails when `value` cannot be represented in `format`.
pub fn serialize<T: Serialize>(value: &T, format: Format) -> Result<String> {
    match format {
        Format::Ron => {
            let ron_pretty_conf = PrettyConfig::new()
                .depth_limit(2)
                .extensions(Extensions::IMPLICIT_SOME);
            Ok(to_string_pretty(value, ron_pretty_conf)?)
        }
        Format::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecfg_core::ModMask;

    #[test]
    fn written_default_has_header_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        write_to_file(&path, &UserConfig::default()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(COMMENT_HEADER));
        assert_eq!(
            load_config_file(Some(path)).unwrap(),
            UserConfig::default()
        );
    }

    #[test]
    fn loads_toml_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "modkey = [\"mod1\", \"shift\"]\nterminal = \"kitty\"\n").unwrap();

        let config = load_config_file(Some(path)).unwrap();
        assert_eq!(config.modkey, ModMask::Mod1 | ModMask::Shift);
        assert_eq!(config.terminal, "kitty");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(modkey: \"hyper\")").unwrap();
        assert!(load_config_file(Some(path)).is_err());
        assert!(load_config_file(Some(dir.path().join("missing.ron"))).is_err());
    }

    #[test]
    fn theme_file_loads_from_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.ron");
        fs::write(&path, "(bar_size: 28, bar_opacity: 1.0)").unwrap();
        let theme = load_theme_file(&path).unwrap();
        assert_eq!(theme.bar_size, 28);
        assert_eq!(theme.palette, ThemeSetting::default().palette);
    }

    #[test]
    fn json_output_is_valid_json() {
        let json = serialize(&UserConfig::default(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["terminal"], "tilix");
    }
}
