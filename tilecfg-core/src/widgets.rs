//! Builds styled widgets out of palette roles.
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::models::{
    Font, GroupBox, HighlightMethod, Palette, Sep, TextBox, Widget, WidgetKind, WidgetStyle,
};

/// Slanted divider drawn between two colored segments (nf-oct-triangle_left).
pub const POWERLINE_GLYPH: &str = "\u{f438}";
const POWERLINE_FONTSIZE: u32 = 37;
const POWERLINE_PADDING: i32 = -3;

/// Roles the shared workspace widgets look up.
pub const WORKSPACE_ROLES: [&str; 8] = [
    "text", "dark", "light", "focus", "urgent", "active", "inactive", "grey",
];

/// Font, size and padding for widgets that don't set their own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetDefaults {
    pub font: Font,
    pub fontsize: u32,
    pub padding: i32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: Font::new("UbuntuMono Nerd Font").bold(),
            fontsize: 16,
            padding: 1,
        }
    }
}

impl WidgetDefaults {
    /// Fill every unset font, size and padding field of `style` from the defaults. Fields the
    /// widget sets itself always win.
    pub fn merge(&self, style: WidgetStyle) -> WidgetStyle {
        WidgetStyle {
            font: style.font.or_else(|| Some(self.font.clone())),
            fontsize: style.fontsize.or(Some(self.fontsize)),
            padding: style.padding.or(Some(self.padding)),
            ..style
        }
    }

    pub fn apply(&self, widget: Widget) -> Widget {
        Widget {
            style: self.merge(widget.style),
            ..widget
        }
    }
}

/// Resolves color roles against a palette while building widgets. Any role the palette lacks
/// turns into an error at construction time.
#[derive(Debug, Clone, Copy)]
pub struct WidgetFactory<'p> {
    palette: &'p Palette,
}

impl<'p> WidgetFactory<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Foreground and background from two roles.
    ///
    /// # Errors
    ///
    /// Fails when either role is missing from the palette.
    pub fn base(&self, fg: &str, bg: &str) -> Result<WidgetStyle> {
        Ok(WidgetStyle {
            foreground: Some(self.palette.resolve(fg)?),
            background: Some(self.palette.resolve(bg)?),
            ..WidgetStyle::default()
        })
    }

    /// Background only, for widgets without text.
    ///
    /// # Errors
    ///
    /// Fails when the role is missing from the palette.
    pub fn background(&self, bg: &str) -> Result<WidgetStyle> {
        Ok(WidgetStyle {
            background: Some(self.palette.resolve(bg)?),
            ..WidgetStyle::default()
        })
    }

    /// An invisible 5px gap in the default colors.
    ///
    /// # Errors
    ///
    /// Fails when `text` or `dark` is missing from the palette.
    pub fn separator(&self) -> Result<Widget> {
        Ok(Widget::new(
            WidgetKind::Sep(Sep { linewidth: 0 }),
            self.base("text", "dark")?.padding(5),
        ))
    }

    /// A glyph from an icon font.
    ///
    /// # Errors
    ///
    /// Fails when either role is missing from the palette.
    pub fn icon(&self, fg: &str, bg: &str, fontsize: u32, text: &str) -> Result<Widget> {
        Ok(Widget::new(
            WidgetKind::TextBox(TextBox {
                text: text.to_owned(),
            }),
            self.base(fg, bg)?.fontsize(fontsize).padding(3),
        ))
    }

    /// The divider between a segment colored `bg` and the next one colored `fg`.
    ///
    /// # Errors
    ///
    /// Fails when either role is missing from the palette.
    pub fn powerline(&self, fg: &str, bg: &str) -> Result<Widget> {
        Ok(Widget::new(
            WidgetKind::TextBox(TextBox {
                text: POWERLINE_GLYPH.to_owned(),
            }),
            self.base(fg, bg)?
                .fontsize(POWERLINE_FONTSIZE)
                .padding(POWERLINE_PADDING),
        ))
    }

    /// Group indicator for every group, block highlighted.
    ///
    /// # Errors
    ///
    /// Fails when any of [`WORKSPACE_ROLES`] is missing from the palette.
    pub fn group_box(&self) -> Result<Widget> {
        let p = self.palette;
        let group_box = GroupBox {
            margin_y: 3,
            margin_x: 0,
            padding_y: 8,
            padding_x: 5,
            borderwidth: 1,
            active: p.resolve("active")?,
            inactive: p.resolve("inactive")?,
            rounded: false,
            highlight_method: HighlightMethod::Block,
            urgent_alert_method: HighlightMethod::Block,
            urgent_border: p.resolve("urgent")?,
            this_current_screen_border: p.resolve("focus")?,
            this_screen_border: p.resolve("grey")?,
            other_current_screen_border: p.resolve("dark")?,
            other_screen_border: p.resolve("dark")?,
            disable_drag: true,
        };
        Ok(Widget::new(
            WidgetKind::GroupBox(Box::new(group_box)),
            self.base("light", "dark")?
                .font(Font::new("UbuntuMono Nerd Font"))
                .fontsize(24),
        ))
    }

    /// The prefix every bar variant starts with: separator, group box, separator, window
    /// name, separator.
    ///
    /// # Errors
    ///
    /// Fails when any of [`WORKSPACE_ROLES`] is missing from the palette.
    pub fn workspaces(&self) -> Result<Vec<Widget>> {
        Ok(vec![
            self.separator()?,
            self.group_box()?,
            self.separator()?,
            Widget::new(
                WidgetKind::WindowName,
                self.base("focus", "dark")?.fontsize(14).padding(5),
            ),
            self.separator()?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;
    use crate::models::{Color, ColorValue};

    fn palette() -> Palette {
        let c = |s: &str| ColorValue::Single(s.parse::<Color>().unwrap());
        Palette::new()
            .with("text", c("#0f101a"))
            .with("dark", c("#0f101a"))
            .with("light", c("#f1ffff"))
            .with("focus", c("#a151d3"))
            .with("urgent", c("#4c566a"))
            .with("active", c("#f1ffff"))
            .with("inactive", c("#4c566a"))
            .with("grey", c("#F07178"))
            .with("color1", c("#a151d3"))
    }

    #[test]
    fn powerline_uses_glyph_and_fixed_size() {
        let palette = palette();
        let factory = WidgetFactory::new(&palette);
        let widget = factory.powerline("color1", "dark").unwrap();
        assert_eq!(
            widget.kind,
            WidgetKind::TextBox(TextBox {
                text: POWERLINE_GLYPH.to_owned()
            })
        );
        assert_eq!(widget.style.fontsize, Some(37));
        assert_eq!(widget.style.padding, Some(-3));
        assert_eq!(
            widget.style.foreground,
            Some(palette.resolve("color1").unwrap())
        );
        assert_eq!(
            widget.style.background,
            Some(palette.resolve("dark").unwrap())
        );
    }

    #[test]
    fn unknown_role_fails_construction() {
        let palette = palette();
        let factory = WidgetFactory::new(&palette);
        assert_eq!(
            factory.powerline("color5", "dark"),
            Err(ConfigError::UnknownColorRole("color5".to_owned()))
        );
        assert_eq!(
            factory.icon("text", "color7", 16, "?"),
            Err(ConfigError::UnknownColorRole("color7".to_owned()))
        );
    }

    #[test]
    fn workspaces_prefix_order() {
        let palette = palette();
        let names: Vec<&str> = WidgetFactory::new(&palette)
            .workspaces()
            .unwrap()
            .iter()
            .map(Widget::name)
            .collect();
        assert_eq!(names, ["Sep", "GroupBox", "Sep", "WindowName", "Sep"]);
    }

    #[test]
    fn workspaces_need_every_workspace_role() {
        for role in WORKSPACE_ROLES {
            let mut palette = Palette::new();
            for other in WORKSPACE_ROLES.iter().filter(|r| **r != role) {
                palette.insert(*other, ColorValue::Single("#000".parse().unwrap()));
            }
            assert_eq!(
                WidgetFactory::new(&palette).workspaces(),
                Err(ConfigError::UnknownColorRole(role.to_owned())),
                "missing {role}"
            );
        }
    }

    #[test]
    fn merge_keeps_explicit_fields() {
        let defaults = WidgetDefaults::default();
        let merged = defaults.merge(WidgetStyle::default().fontsize(37).padding(-3));
        assert_eq!(merged.fontsize, Some(37));
        assert_eq!(merged.padding, Some(-3));
        assert_eq!(merged.font, Some(defaults.font.clone()));

        let filled = defaults.merge(WidgetStyle::default());
        assert_eq!(filled.fontsize, Some(16));
        assert_eq!(filled.padding, Some(1));
    }
}
