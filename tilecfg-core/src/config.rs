//! The assembled configuration handed to the host.
use serde::Serialize;
use std::collections::HashSet;

use crate::errors::{ConfigError, Result};
use crate::keymap::KeymapBuilder;
use crate::models::{
    FloatingLayout, Group, KeyBinding, Layout, MouseBinding, Screen, Settings,
};
use crate::utils::modmask_lookup::ModMask;
use crate::widgets::WidgetDefaults;

/// A validated configuration. It can only be obtained from [`ConfigBuilder::build`] and is
/// never changed afterwards; a reload builds a new one.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    modkey: ModMask,
    keys: Vec<KeyBinding>,
    groups: Vec<Group>,
    layouts: Vec<Layout>,
    floating_layout: FloatingLayout,
    mouse: Vec<MouseBinding>,
    screens: Vec<Screen>,
    widget_defaults: WidgetDefaults,
    extension_defaults: WidgetDefaults,
    settings: Settings,
}

impl Config {
    pub fn modkey(&self) -> ModMask {
        self.modkey
    }

    /// Manual bindings followed by the generated group bindings.
    pub fn keys(&self) -> &[KeyBinding] {
        &self.keys
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// In the order the host cycles through them.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn floating_layout(&self) -> &FloatingLayout {
        &self.floating_layout
    }

    pub fn mouse(&self) -> &[MouseBinding] {
        &self.mouse
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn widget_defaults(&self) -> &WidgetDefaults {
        &self.widget_defaults
    }

    /// Defaults for launcher-style extensions (prompts, menus).
    pub fn extension_defaults(&self) -> &WidgetDefaults {
        &self.extension_defaults
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The binding for a combo, if any.
    pub fn key(&self, modifiers: ModMask, key: &str) -> Option<&KeyBinding> {
        self.keys.iter().find(|b| b.combo() == (modifiers, key))
    }
}

/// Collects the sections of a configuration and checks them together.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    keymap: KeymapBuilder,
    groups: Vec<Group>,
    layouts: Vec<Layout>,
    floating_layout: FloatingLayout,
    mouse: Vec<MouseBinding>,
    screens: Vec<Screen>,
    widget_defaults: WidgetDefaults,
    extension_defaults: Option<WidgetDefaults>,
    settings: Settings,
}

impl ConfigBuilder {
    /// Start from manually declared key bindings. Group bindings are added by [`Self::build`].
    pub fn new(keymap: KeymapBuilder) -> Self {
        Self {
            keymap,
            groups: vec![],
            layouts: vec![],
            floating_layout: FloatingLayout::default(),
            mouse: vec![],
            screens: vec![],
            widget_defaults: WidgetDefaults::default(),
            extension_defaults: None,
            settings: Settings::default(),
        }
    }

    #[must_use]
    pub fn groups(mut self, groups: impl IntoIterator<Item = Group>) -> Self {
        self.groups.extend(groups);
        self
    }

    #[must_use]
    pub fn layouts(mut self, layouts: impl IntoIterator<Item = Layout>) -> Self {
        self.layouts.extend(layouts);
        self
    }

    #[must_use]
    pub fn floating_layout(mut self, floating_layout: FloatingLayout) -> Self {
        self.floating_layout = floating_layout;
        self
    }

    #[must_use]
    pub fn mouse(mut self, mouse: impl IntoIterator<Item = MouseBinding>) -> Self {
        self.mouse.extend(mouse);
        self
    }

    #[must_use]
    pub fn screens(mut self, screens: impl IntoIterator<Item = Screen>) -> Self {
        self.screens.extend(screens);
        self
    }

    #[must_use]
    pub fn widget_defaults(mut self, defaults: WidgetDefaults) -> Self {
        self.widget_defaults = defaults;
        self
    }

    /// Without this, extensions share the widget defaults.
    #[must_use]
    pub fn extension_defaults(mut self, defaults: WidgetDefaults) -> Self {
        self.extension_defaults = Some(defaults);
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Check every section and assemble the configuration.
    ///
    /// # Errors
    ///
    /// Duplicate group names, key or mouse combos bound twice, groups past the ninth, empty
    /// group, layout or screen lists, and invalid bars or widgets.
    pub fn build(self) -> Result<Config> {
        if self.groups.is_empty() {
            return Err(ConfigError::Missing("group"));
        }
        if self.layouts.is_empty() {
            return Err(ConfigError::Missing("layout"));
        }
        if self.screens.is_empty() {
            return Err(ConfigError::Missing("screen"));
        }
        check_unique_groups(&self.groups)?;
        check_unique_mouse(&self.mouse)?;
        for bar in self.screens.iter().filter_map(|s| s.bar.as_ref()) {
            bar.validate()?;
        }

        let modkey = self.keymap.modkey();
        let mut keymap = self.keymap;
        keymap.with_groups(&self.groups)?;
        let keys = keymap.build()?;
        tracing::debug!(
            "Built {} key bindings for {} groups",
            keys.len(),
            self.groups.len()
        );

        let extension_defaults = self
            .extension_defaults
            .unwrap_or_else(|| self.widget_defaults.clone());
        Ok(Config {
            modkey,
            keys,
            groups: self.groups,
            layouts: self.layouts,
            floating_layout: self.floating_layout,
            mouse: self.mouse,
            screens: self.screens,
            widget_defaults: self.widget_defaults,
            extension_defaults,
            settings: self.settings,
        })
    }
}

fn check_unique_groups(groups: &[Group]) -> Result<()> {
    let mut names = HashSet::new();
    for group in groups {
        if !names.insert(group.name.as_str()) {
            return Err(ConfigError::DuplicateGroup(group.name.clone()));
        }
    }
    Ok(())
}

fn check_unique_mouse(mouse: &[MouseBinding]) -> Result<()> {
    let mut combos = HashSet::new();
    for binding in mouse {
        if !combos.insert((binding.modifiers, binding.button)) {
            return Err(ConfigError::DuplicateMouseBinding {
                modifiers: binding.modifiers.to_string(),
                button: binding.button.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Bar, Clock, Color, ColorValue, Command, Cpu, LayoutKind, Palette, Widget, WidgetKind,
    };
    use crate::utils::modmask_lookup::Button;
    use crate::widgets::WidgetFactory;

    fn keymap() -> KeymapBuilder {
        let mut keymap = KeymapBuilder::new(ModMask::Mod4);
        keymap.bind(&["mod"], "Return", [Command::spawn("alacritty")]).unwrap();
        keymap
    }

    fn screen(widgets: Vec<Widget>) -> Screen {
        Screen::with_bar(Bar::new(widgets, 25).opacity(0.8))
    }

    fn minimal() -> ConfigBuilder {
        ConfigBuilder::new(keymap())
            .groups([Group::new("WEB")])
            .layouts([Layout::new(LayoutKind::Max)])
            .screens([Screen { bar: None }])
    }

    #[test]
    fn end_to_end_two_groups_one_screen() {
        let palette = Palette::new()
            .with("text", ColorValue::Single("#0f101a".parse::<Color>().unwrap()))
            .with("dark", ColorValue::Single("#0f101a".parse::<Color>().unwrap()));
        let factory = WidgetFactory::new(&palette);
        let widgets = vec![
            factory.separator().unwrap(),
            Widget::plain(WidgetKind::Cpu(Cpu {
                format: "CPU {load_percent}%".to_owned(),
                update_interval: 0.5,
            })),
            Widget::plain(WidgetKind::Clock(Clock {
                format: "%d/%m/%Y - %H:%M ".to_owned(),
            })),
        ];

        let config = ConfigBuilder::new(keymap())
            .groups([Group::new("WEB"), Group::new("DEV")])
            .layouts([Layout::new(LayoutKind::Columns)])
            .screens([screen(widgets)])
            .build()
            .unwrap();

        let moved = config.key(ModMask::Mod4 | ModMask::Shift, "2").unwrap();
        assert_eq!(moved.commands, vec![Command::ToGroup("DEV".to_owned())]);
        assert_eq!(config.keys().len(), 1 + 2 * 2);

        let names: Vec<&str> = config.screens()[0].widgets().iter().map(Widget::name).collect();
        assert_eq!(names, ["Sep", "CPU", "Clock"]);
        assert_eq!(config.extension_defaults(), config.widget_defaults());
    }

    #[test]
    fn duplicate_group_names_are_rejected() {
        let res = minimal().groups([Group::new("WEB")]).build();
        assert_eq!(res, Err(ConfigError::DuplicateGroup("WEB".to_owned())));
    }

    #[test]
    fn empty_sections_are_rejected() {
        let res = ConfigBuilder::new(keymap())
            .layouts([Layout::new(LayoutKind::Max)])
            .screens([Screen { bar: None }])
            .build();
        assert_eq!(res, Err(ConfigError::Missing("group")));

        let res = ConfigBuilder::new(keymap())
            .groups([Group::new("WEB")])
            .screens([Screen { bar: None }])
            .build();
        assert_eq!(res, Err(ConfigError::Missing("layout")));
    }

    #[test]
    fn manual_key_shadowing_a_group_key_is_rejected() {
        let mut keymap = keymap();
        keymap.bind(&["mod"], "1", [Command::NextLayout]).unwrap();
        let res = ConfigBuilder::new(keymap)
            .groups([Group::new("WEB")])
            .layouts([Layout::new(LayoutKind::Max)])
            .screens([Screen { bar: None }])
            .build();
        assert!(matches!(res, Err(ConfigError::DuplicateBinding { .. })));
    }

    #[test]
    fn duplicate_mouse_combo_is_rejected() {
        let res = minimal()
            .mouse([
                MouseBinding::click(ModMask::Mod4, Button::Button2, Command::BringToFront),
                MouseBinding::click(ModMask::Mod4, Button::Button2, Command::KillWindow),
            ])
            .build();
        assert_eq!(
            res,
            Err(ConfigError::DuplicateMouseBinding {
                modifiers: "mod4".to_owned(),
                button: "Button2".to_owned(),
            })
        );
    }

    #[test]
    fn invalid_widget_fails_the_build() {
        let cpu = Widget::plain(WidgetKind::Cpu(Cpu {
            format: "CPU {load_percent}%".to_owned(),
            update_interval: 0.0,
        }));
        let res = minimal().screens([screen(vec![cpu])]).build();
        assert!(matches!(res, Err(ConfigError::InvalidInterval { .. })));
    }
}
