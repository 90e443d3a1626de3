use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ColorPair;
use crate::errors::{ConfigError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font family plus weight, rendered the way fontconfig names it (`UbuntuMono Nerd Font Bold`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct Font {
    pub family: String,
    pub weight: FontWeight,
}

impl Font {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::Regular,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
}

impl FromStr for Font {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::Missing("font family"));
        }
        Ok(match s.strip_suffix(" Bold") {
            Some(family) => Self::new(family).bold(),
            None => Self::new(s),
        })
    }
}

impl TryFrom<String> for Font {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Font> for String {
    fn from(font: Font) -> Self {
        font.to_string()
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            FontWeight::Regular => f.write_str(&self.family),
            FontWeight::Bold => write!(f, "{} Bold", self.family),
        }
    }
}

/// Visual parameters every widget understands. `None` means "take the bar default".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WidgetStyle {
    pub foreground: Option<ColorPair>,
    pub background: Option<ColorPair>,
    pub font: Option<Font>,
    pub fontsize: Option<u32>,
    pub padding: Option<i32>,
}

impl WidgetStyle {
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn fontsize(mut self, size: u32) -> Self {
        self.fontsize = Some(size);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = Some(padding);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMethod {
    #[default]
    Border,
    Block,
    Text,
    Line,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoryUnit {
    K,
    #[default]
    M,
    G,
}

/// Unit prefix for network rates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitPrefix {
    K,
    M,
    G,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sep {
    pub linewidth: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupBox {
    pub margin_y: i32,
    pub margin_x: i32,
    pub padding_y: i32,
    pub padding_x: i32,
    pub borderwidth: u32,
    pub active: ColorPair,
    pub inactive: ColorPair,
    pub rounded: bool,
    pub highlight_method: HighlightMethod,
    pub urgent_alert_method: HighlightMethod,
    pub urgent_border: ColorPair,
    pub this_current_screen_border: ColorPair,
    pub this_screen_border: ColorPair,
    pub other_current_screen_border: ColorPair,
    pub other_screen_border: ColorPair,
    pub disable_drag: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cpu {
    pub format: String,
    pub update_interval: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThermalSensor {
    /// Temperature in °C from which the foreground switches to the alert color.
    pub threshold: f32,
    pub update_interval: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Memory {
    pub format: String,
    pub measure_mem: MemoryUnit,
    pub update_interval: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Net {
    pub format: String,
    pub update_interval: f64,
    pub use_bits: bool,
    pub prefix: Option<UnitPrefix>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentLayoutIcon {
    pub scale: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    /// strftime format
    pub format: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum WidgetKind {
    Sep(Sep),
    TextBox(TextBox),
    GroupBox(Box<GroupBox>),
    WindowName,
    Prompt,
    Systray,
    Cpu(Cpu),
    ThermalSensor(ThermalSensor),
    Memory(Memory),
    Net(Net),
    CurrentLayoutIcon(CurrentLayoutIcon),
    CurrentLayout,
    Clock(Clock),
}

const CPU_FIELDS: &[&str] = &["load_percent", "freq_current", "freq_max", "freq_min"];
const MEMORY_FIELDS: &[&str] = &[
    "MemUsed",
    "MemTotal",
    "MemFree",
    "MemPercent",
    "Buffers",
    "Active",
    "Inactive",
    "Shmem",
    "SwapTotal",
    "SwapFree",
    "SwapUsed",
    "SwapPercent",
    "mm",
    "ms",
];
const NET_FIELDS: &[&str] = &["interface", "down", "up", "total"];

/// One element of a status bar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Widget {
    pub kind: WidgetKind,
    #[serde(default)]
    pub style: WidgetStyle,
}

impl Widget {
    pub fn new(kind: WidgetKind, style: WidgetStyle) -> Self {
        Self { kind, style }
    }

    pub fn plain(kind: WidgetKind) -> Self {
        Self::new(kind, WidgetStyle::default())
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            WidgetKind::Sep(_) => "Sep",
            WidgetKind::TextBox(_) => "TextBox",
            WidgetKind::GroupBox(_) => "GroupBox",
            WidgetKind::WindowName => "WindowName",
            WidgetKind::Prompt => "Prompt",
            WidgetKind::Systray => "Systray",
            WidgetKind::Cpu(_) => "CPU",
            WidgetKind::ThermalSensor(_) => "ThermalSensor",
            WidgetKind::Memory(_) => "Memory",
            WidgetKind::Net(_) => "Net",
            WidgetKind::CurrentLayoutIcon(_) => "CurrentLayoutIcon",
            WidgetKind::CurrentLayout => "CurrentLayout",
            WidgetKind::Clock(_) => "Clock",
        }
    }

    pub fn update_interval(&self) -> Option<f64> {
        match &self.kind {
            WidgetKind::Cpu(w) => Some(w.update_interval),
            WidgetKind::ThermalSensor(w) => Some(w.update_interval),
            WidgetKind::Memory(w) => Some(w.update_interval),
            WidgetKind::Net(w) => Some(w.update_interval),
            _ => None,
        }
    }

    /// Checks the parameters a host would otherwise reject while rendering.
    ///
    /// # Errors
    ///
    /// Non-positive update intervals, unknown format placeholders and broken strftime
    /// strings.
    pub fn validate(&self) -> Result<()> {
        if let Some(interval) = self.update_interval() {
            if !(interval.is_finite() && interval > 0.0) {
                return Err(ConfigError::InvalidInterval {
                    widget: self.name().to_owned(),
                    interval,
                });
            }
        }
        match &self.kind {
            WidgetKind::Cpu(w) => check_placeholders(self.name(), &w.format, CPU_FIELDS),
            WidgetKind::Memory(w) => check_placeholders(self.name(), &w.format, MEMORY_FIELDS),
            WidgetKind::Net(w) => check_placeholders(self.name(), &w.format, NET_FIELDS),
            WidgetKind::Clock(w) => check_strftime(&w.format),
            WidgetKind::CurrentLayoutIcon(w) if w.scale.is_nan() || w.scale <= 0.0 => {
                Err(ConfigError::InvalidScale(w.scale))
            }
            _ => Ok(()),
        }
    }
}

fn check_strftime(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidClockFormat(format.to_owned()));
    }
    Ok(())
}

/// Every `{name}` or `{name:spec}` placeholder must be one the widget fills in.
fn check_placeholders(widget: &str, format: &str, known: &[&str]) -> Result<()> {
    let mut rest = format;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        // `{{` is an escaped brace
        if let Some(stripped) = after.strip_prefix('{') {
            rest = stripped;
            continue;
        }
        let close = after.find('}').ok_or_else(|| ConfigError::InvalidFormat {
            widget: widget.to_owned(),
            format: format.to_owned(),
        })?;
        let field = after[..close].split(':').next().unwrap_or_default().trim();
        if !known.contains(&field) {
            return Err(ConfigError::InvalidFormat {
                widget: widget.to_owned(),
                format: format.to_owned(),
            });
        }
        rest = &after[close + 1..];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu(format: &str, update_interval: f64) -> Widget {
        Widget::plain(WidgetKind::Cpu(Cpu {
            format: format.to_owned(),
            update_interval,
        }))
    }

    #[test]
    fn font_parses_weight_suffix() {
        let font: Font = "UbuntuMono Nerd Font Bold".parse().unwrap();
        assert_eq!(font.family, "UbuntuMono Nerd Font");
        assert_eq!(font.weight, FontWeight::Bold);
        assert_eq!(font.to_string(), "UbuntuMono Nerd Font Bold");
        assert_eq!(Font::new("Hack").to_string(), "Hack");
    }

    #[test]
    fn update_interval_must_be_positive() {
        assert!(cpu("CPU {load_percent}%", 0.5).validate().is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                cpu("CPU {load_percent}%", bad).validate(),
                Err(ConfigError::InvalidInterval { .. })
            ));
        }
    }

    #[test]
    fn memory_format_with_specs_is_accepted() {
        let memory = Widget::plain(WidgetKind::Memory(Memory {
            format: "RAM {MemUsed: .0f}{mm} /{MemTotal: .0f}{mm} | {MemPercent}%".to_owned(),
            measure_mem: MemoryUnit::M,
            update_interval: 0.5,
        }));
        assert!(memory.validate().is_ok());
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        assert!(matches!(
            cpu("CPU {load}%", 1.0).validate(),
            Err(ConfigError::InvalidFormat { .. })
        ));
        assert!(matches!(
            cpu("CPU {load_percent%", 1.0).validate(),
            Err(ConfigError::InvalidFormat { .. })
        ));
        assert!(cpu("{{literal}} {load_percent}", 1.0).validate().is_ok());
    }

    #[test]
    fn clock_format_is_checked() {
        let ok = Widget::plain(WidgetKind::Clock(Clock {
            format: "%d/%m/%Y - %H:%M ".to_owned(),
        }));
        assert!(ok.validate().is_ok());
        let bad = Widget::plain(WidgetKind::Clock(Clock {
            format: "%Q".to_owned(),
        }));
        assert_eq!(
            bad.validate(),
            Err(ConfigError::InvalidClockFormat("%Q".to_owned()))
        );
    }
}
