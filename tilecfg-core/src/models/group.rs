use serde::{Deserialize, Serialize};

use super::LayoutKind;

/// A named workspace. The name doubles as the lookup key for per-group bindings, so it must be
/// unique; it may carry an icon glyph in front of the label (`" DEV"`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    /// Layout the host selects the first time the group is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutKind>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: None,
        }
    }

    /// The label without a leading icon glyph.
    pub fn label(&self) -> &str {
        match self.name.split_once(' ') {
            Some((icon, label)) if !icon.is_ascii() => label.trim_start(),
            _ => &self.name,
        }
    }
}

impl From<&str> for Group {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
