use serde::{Deserialize, Serialize};

use super::Widget;
use crate::errors::{ConfigError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarPosition {
    #[default]
    Top,
    Bottom,
}

/// An ordered list of widgets, rendered left to right.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Height in pixels.
    pub size: u32,
    pub opacity: f32,
    #[serde(default)]
    pub position: BarPosition,
}

impl Bar {
    pub fn new(widgets: Vec<Widget>, size: u32) -> Self {
        Self {
            widgets,
            size,
            opacity: 1.0,
            position: BarPosition::Top,
        }
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// # Errors
    ///
    /// Fails on a zero size, an opacity outside `0.0..=1.0` or an invalid widget.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ConfigError::InvalidBarSize);
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidOpacity(self.opacity));
        }
        self.widgets.iter().try_for_each(Widget::validate)
    }
}

/// What is drawn on one physical display. The host pairs screens with monitors by position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Screen {
    pub bar: Option<Bar>,
}

impl Screen {
    pub fn with_bar(bar: Bar) -> Self {
        Self { bar: Some(bar) }
    }

    pub fn widgets(&self) -> &[Widget] {
        self.bar
            .as_ref()
            .map(|bar| bar.widgets.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WidgetKind;

    #[test]
    fn opacity_outside_unit_range_is_rejected() {
        let bar = Bar::new(vec![Widget::plain(WidgetKind::Prompt)], 25).opacity(1.5);
        assert_eq!(bar.validate(), Err(ConfigError::InvalidOpacity(1.5)));
        assert!(bar.opacity(0.8).validate().is_ok());
    }

    #[test]
    fn zero_sized_bar_is_rejected() {
        assert_eq!(
            Bar::new(vec![], 0).validate(),
            Err(ConfigError::InvalidBarSize)
        );
    }

    #[test]
    fn screen_without_bar_has_no_widgets() {
        assert!(Screen { bar: None }.widgets().is_empty());
    }
}
