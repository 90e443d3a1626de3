//! A personal tiling window manager configuration built on [`tilecfg_core`].
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]
pub mod autostart;
pub mod bar;
pub mod config;
pub mod theme_setting;
pub mod utils;

pub use config::UserConfig;
pub use theme_setting::ThemeSetting;

use tilecfg_core::models::{
    Bar, FloatingLayout, Layout, LayoutKind, LayoutStyle, Palette, Screen,
};
use tilecfg_core::{Config, ConfigBuilder, Result, WidgetFactory};

/// Assemble the full configuration for the host.
///
/// # Errors
///
/// Fails on anything [`ConfigBuilder::build`] rejects and on color roles missing from
/// `palette`.
pub fn build(user: &UserConfig, palette: &Palette) -> Result<Config> {
    build_with_theme(user, &ThemeSetting::with_palette(palette.clone()))
}

/// Like [`build`], with layout borders, margins and bar geometry taken from the theme.
///
/// # Errors
///
/// See [`build`]; an invalid margin list also fails.
pub fn build_with_theme(user: &UserConfig, theme: &ThemeSetting) -> Result<Config> {
    let factory = WidgetFactory::new(&theme.palette);
    let keymap = config::keybind::keymap(user)?;
    let layout_style = theme.layout_style()?;

    let screens = [bar::primary_widgets(&factory)?, bar::secondary_widgets(&factory)?]
        .into_iter()
        .map(|widgets| {
            Screen::with_bar(Bar::new(widgets, theme.bar_size).opacity(theme.bar_opacity))
        });

    let mut floating_layout = FloatingLayout::with_default_rules(user.float_rules.clone());
    floating_layout.style = LayoutStyle {
        border_focus: Some(theme.floating_border_focus.clone()),
        ..LayoutStyle::default()
    };

    ConfigBuilder::new(keymap)
        .groups(user.groups.iter().cloned())
        .layouts(layouts(&layout_style))
        .floating_layout(floating_layout)
        .mouse(config::keybind::mouse(user.modkey))
        .screens(screens)
        .widget_defaults(user.widget_defaults.clone())
        .settings(user.settings.clone())
        .build()
}

/// Columns, Max and TreeTab, in cycling order. Max ignores borders and margins.
fn layouts(style: &LayoutStyle) -> Vec<Layout> {
    vec![
        Layout::styled(LayoutKind::Columns, style.clone()),
        Layout::new(LayoutKind::Max),
        Layout::styled(LayoutKind::TreeTab, style.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecfg_core::models::{ColorValue, Command, WindowProps};
    use tilecfg_core::{ConfigError, ModMask};

    #[test]
    fn personal_config_builds() {
        let user = UserConfig::default();
        let config = build(&user, &theme_setting::default_palette()).unwrap();

        assert_eq!(config.groups().len(), 4);
        assert_eq!(config.layouts().len(), 3);
        assert_eq!(config.screens().len(), 2);
        assert_eq!(config.mouse().len(), 3);
        assert_eq!(config.settings().wmname, "LG3D");

        let mod_shift = ModMask::Mod4 | ModMask::Shift;
        let to_misc = config.key(mod_shift, "4").unwrap();
        assert_eq!(
            to_misc.commands,
            vec![Command::ToGroup(user.groups[3].name.clone())]
        );
        assert_eq!(
            config.key(ModMask::Mod4, "r").unwrap().commands,
            vec![Command::SpawnPrompt]
        );
    }

    #[test]
    fn personal_float_rules() {
        let config = build(&UserConfig::default(), &theme_setting::default_palette()).unwrap();
        let floating = config.floating_layout();
        assert!(floating.should_float(&WindowProps::with_class("confirmreset")));
        assert!(!floating.should_float(&WindowProps::with_class("normalapp").titled("normal")));
    }

    #[test]
    fn palette_without_bar_role_fails() {
        let full = theme_setting::default_palette();
        let mut palette = Palette::new();
        for role in full.roles().filter(|r| *r != "color3") {
            palette.insert(role, ColorValue::Single(full.resolve(role).unwrap().0));
        }
        assert_eq!(
            build(&UserConfig::default(), &palette),
            Err(ConfigError::UnknownColorRole("color3".to_owned()))
        );
    }
}
