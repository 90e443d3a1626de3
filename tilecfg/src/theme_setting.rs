use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tilecfg_core::models::{Color, ColorValue, LayoutStyle, Margins, Palette};
use tilecfg_core::widgets::WORKSPACE_ROLES;
use tilecfg_core::ConfigError;

use crate::bar::SEGMENT_ROLES;
use crate::utils::file_handler::load_theme_file;

/// Colors and geometry, kept apart from the rest of the configuration so a theme can be swapped
/// without touching bindings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeSetting {
    pub palette: Palette,
    pub border_width: u32,
    pub border_focus: Color,
    pub margin: CustomMargins,
    pub floating_border_focus: Color,
    pub bar_size: u32,
    pub bar_opacity: f32,
}

impl ThemeSetting {
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Read a theme file, RON or TOML by extension.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        load_theme_file(path).with_context(|| format!("Invalid theme {}", path.display()))
    }

    /// Border and margin shared by the tiling layouts.
    ///
    /// # Errors
    ///
    /// Fails when the margin list is empty or longer than four entries.
    pub fn layout_style(&self) -> std::result::Result<LayoutStyle, ConfigError> {
        let margin = Margins::try_from(self.margin.clone()).map_err(ConfigError::InvalidMargins)?;
        Ok(LayoutStyle {
            border_focus: Some(self.border_focus.clone()),
            border_normal: None,
            border_width: Some(self.border_width),
            margin: Some(margin),
        })
    }

    /// Every role the bars look up and the palette lacks.
    pub fn missing_roles(&self) -> Vec<&'static str> {
        let required: Vec<&'static str> = WORKSPACE_ROLES
            .iter()
            .chain(SEGMENT_ROLES.iter())
            .copied()
            .collect();
        self.palette.missing(&required)
    }
}

impl Default for ThemeSetting {
    fn default() -> Self {
        ThemeSetting {
            palette: default_palette(),
            border_width: 1,
            border_focus: color(BORDER_FOCUS),
            margin: CustomMargins::Int(4),
            floating_border_focus: color(FLOATING_BORDER_FOCUS),
            bar_size: 25,
            bar_opacity: 0.8,
        }
    }
}

const BORDER_FOCUS: &str = "#F07178";
const FLOATING_BORDER_FOCUS: &str = "#ffff";

const DEFAULT_PALETTE: [(&str, &str); 13] = [
    ("dark", "#0f101a"),
    ("grey", "#F07178"),
    ("light", "#f1ffff"),
    ("text", "#0f101a"),
    ("focus", "#a151d3"),
    ("active", "#f1ffff"),
    ("inactive", "#f1ffff"),
    ("urgent", "#4c566a"),
    ("color1", "#a151d3"),
    ("color2", "#F07178"),
    ("color3", "#fb9f7f"),
    ("color4", "#ffd47e"),
    ("color5", "#c3e88d"),
];

// Every literal above is a valid color, checked at compile time.
const _: () = {
    assert!(Color::is_hex(BORDER_FOCUS));
    assert!(Color::is_hex(FLOATING_BORDER_FOCUS));
    let mut i = 0;
    while i < DEFAULT_PALETTE.len() {
        assert!(Color::is_hex(DEFAULT_PALETTE[i].1));
        i += 1;
    }
};

fn color(hex: &'static str) -> Color {
    Color::from_static(hex)
}

/// The built-in dark palette used when no theme file exists.
pub fn default_palette() -> Palette {
    let mut palette = Palette::new();
    for (role, hex) in DEFAULT_PALETTE {
        palette.insert(role, ColorValue::Pair([color(hex), color(hex)]));
    }
    palette
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CustomMargins {
    Int(u32),
    // format: [top, right, bottom, left] as per HTML
    Vec(Vec<u32>),
}

impl TryFrom<CustomMargins> for Margins {
    type Error = &'static str;

    fn try_from(c: CustomMargins) -> std::result::Result<Self, Self::Error> {
        match c {
            CustomMargins::Int(size) => Ok(Self::new(size)),
            CustomMargins::Vec(vec) => match vec.as_slice() {
                [size] => Ok(Self::new(*size)),
                [vertical, horizontal] => Ok(Self::new_from_pair(*vertical, *horizontal)),
                [top, horizontal, bottom] => Ok(Self::new_from_triple(*top, *horizontal, *bottom)),
                [top, right, bottom, left] => Ok(Self {
                    top: *top,
                    right: *right,
                    bottom: *bottom,
                    left: *left,
                }),
                [] => Err("Empty margin or border array"),
                _ => Err("Too many entries in margin or border array"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_custom_theme_toml() {
        let config = r##"
border_width = 2
border_focus = "#FFB53A"
margin = [4, 8]
bar_size = 30
bar_opacity = 1.0

[palette]
dark = "#222222"
focus = ["#a151d3", "#F07178"]
"##;
        let theme: ThemeSetting = toml::from_str(config).unwrap();

        assert_eq!(theme.border_width, 2);
        assert_eq!(theme.border_focus, color("#FFB53A"));
        assert_eq!(theme.margin, CustomMargins::Vec(vec![4, 8]));
        assert_eq!(theme.bar_size, 30);
        assert_eq!(theme.floating_border_focus, color("#ffff"));
        assert_eq!(
            theme.palette.resolve("focus").unwrap().focused(),
            &color("#F07178")
        );
        assert!(theme.missing_roles().contains(&"color1"));
    }

    #[test]
    fn deserialize_custom_theme_ron() {
        let config = r##"(
    border_width: 0,
    margin: 5,
    palette: {
        "dark": "#0f101a",
        "text": ["#0f101a", "#0f101a"],
    },
)"##;
        let theme: ThemeSetting = ron::from_str(config).unwrap();
        assert_eq!(theme.border_width, 0);
        assert_eq!(theme.margin, CustomMargins::Int(5));
        assert!(theme.palette.contains("text"));
        assert_eq!(theme.bar_opacity, 0.8);
    }

    #[test]
    fn invalid_color_in_theme_fails() {
        let res = toml::from_str::<ThemeSetting>(r#"border_focus = "F07178""#);
        assert!(res.is_err());
    }

    #[test]
    fn margins_from_lists() {
        let convert = |v: Vec<u32>| Margins::try_from(CustomMargins::Vec(v));
        assert_eq!(convert(vec![3]), Ok(Margins::new(3)));
        assert_eq!(convert(vec![1, 2]), Ok(Margins::new_from_pair(1, 2)));
        assert_eq!(convert(vec![1, 2, 3]), Ok(Margins::new_from_triple(1, 2, 3)));
        assert_eq!(
            convert(vec![1, 2, 3, 4]),
            Ok(Margins {
                top: 1,
                right: 2,
                bottom: 3,
                left: 4
            })
        );
        assert_eq!(convert(vec![]), Err("Empty margin or border array"));
        assert_eq!(
            convert(vec![1, 2, 3, 4, 5]),
            Err("Too many entries in margin or border array")
        );
    }

    #[test]
    fn invalid_margin_fails_layout_style() {
        let theme = ThemeSetting {
            margin: CustomMargins::Vec(vec![]),
            ..ThemeSetting::default()
        };
        assert_eq!(
            theme.layout_style(),
            Err(ConfigError::InvalidMargins("Empty margin or border array"))
        );
    }

    #[test]
    fn load_reports_malformed_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "bar_opacity = \"oops\"\n").unwrap();
        let err = ThemeSetting::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("theme.toml"));
    }

    #[test]
    fn default_theme_defines_every_bar_role() {
        assert!(ThemeSetting::default().missing_roles().is_empty());
    }
}
