use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{Color, Margins};

/// The window arrangement strategies a host can cycle through. The arrangement itself is the
/// host's business, this is only the identifier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Columns,
    Max,
    Stack,
    Bsp,
    Matrix,
    MonadTall,
    MonadWide,
    RatioTile,
    Tile,
    TreeTab,
    VerticalTile,
    Zoomy,
    Floating,
}

const LAYOUT_NAMES: [(LayoutKind, &str); 13] = [
    (LayoutKind::Columns, "columns"),
    (LayoutKind::Max, "max"),
    (LayoutKind::Stack, "stack"),
    (LayoutKind::Bsp, "bsp"),
    (LayoutKind::Matrix, "matrix"),
    (LayoutKind::MonadTall, "monadtall"),
    (LayoutKind::MonadWide, "monadwide"),
    (LayoutKind::RatioTile, "ratiotile"),
    (LayoutKind::Tile, "tile"),
    (LayoutKind::TreeTab, "treetab"),
    (LayoutKind::VerticalTile, "verticaltile"),
    (LayoutKind::Zoomy, "zoomy"),
    (LayoutKind::Floating, "floating"),
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

impl FromStr for LayoutKind {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        LAYOUT_NAMES
            .iter()
            .find(|(_, name)| *name == lowered)
            .map(|(kind, _)| *kind)
            .ok_or_else(|| ParseLayoutError(s.to_owned()))
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = LAYOUT_NAMES
            .iter()
            .find(|(kind, _)| kind == self)
            .map_or("unknown", |(_, name)| *name);
        f.write_str(name)
    }
}

/// Styling shared between layouts. Unset fields leave the host default in place.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutStyle {
    pub border_focus: Option<Color>,
    pub border_normal: Option<Color>,
    pub border_width: Option<u32>,
    pub margin: Option<Margins>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub kind: LayoutKind,
    #[serde(default)]
    pub style: LayoutStyle,
}

impl Layout {
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            style: LayoutStyle::default(),
        }
    }

    pub fn styled(kind: LayoutKind, style: LayoutStyle) -> Self {
        Self { kind, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_names_round_trip() {
        for (kind, name) in LAYOUT_NAMES {
            assert_eq!(kind.to_string(), name);
            assert_eq!(name.parse::<LayoutKind>(), Ok(kind));
        }
        assert_eq!("TreeTab".parse::<LayoutKind>(), Ok(LayoutKind::TreeTab));
    }

    #[test]
    fn unknown_layout_is_rejected() {
        assert_eq!(
            "spiral".parse::<LayoutKind>(),
            Err(ParseLayoutError("spiral".to_owned()))
        );
    }
}
