use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// A `#`-prefixed hex color. Three, four, six and eight digit forms are accepted, the longer
/// forms carrying alpha in the last position (`#0000003b`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// For color literals in code.
    ///
    /// # Panics
    ///
    /// Panics when `hex` is not a valid color. Literal tables can be checked at compile time
    /// with [`Color::is_hex`] in a `const` assertion.
    pub fn from_static(hex: &'static str) -> Self {
        assert!(Self::is_hex(hex), "invalid color literal {hex}");
        Self(hex.to_owned())
    }

    /// `#` followed by 3, 4, 6 or 8 hex digits.
    pub const fn is_hex(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.is_empty() || bytes[0] != b'#' {
            return false;
        }
        if !matches!(bytes.len() - 1, 3 | 4 | 6 | 8) {
            return false;
        }
        let mut i = 1;
        while i < bytes.len() {
            if !bytes[i].is_ascii_hexdigit() {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_hex(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(ConfigError::InvalidColor(s.to_owned()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A (normal, focus-equivalent) pair. Widgets that support per-monitor active/inactive
/// colouring always take a pair; single colors are widened with [`ColorPair::uniform`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorPair(pub Color, pub Color);

impl ColorPair {
    pub fn uniform(color: Color) -> Self {
        Self(color.clone(), color)
    }

    pub fn normal(&self) -> &Color {
        &self.0
    }

    pub fn focused(&self) -> &Color {
        &self.1
    }
}

/// What a palette role maps to: a single color or an explicit pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ColorValue {
    Single(Color),
    Pair([Color; 2]),
}

impl From<ColorValue> for ColorPair {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Single(c) => ColorPair::uniform(c),
            ColorValue::Pair([normal, focused]) => ColorPair(normal, focused),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_hex_lengths() {
        for s in ["#fff", "#ffff", "#0f101a", "#0000003b"] {
            assert!(s.parse::<Color>().is_ok(), "{s} should parse");
        }
    }

    #[test]
    fn rejects_malformed_colors() {
        for s in ["0f101a", "#0f101", "#zzzzzz", "#", "red"] {
            assert_eq!(
                s.parse::<Color>(),
                Err(ConfigError::InvalidColor(s.to_owned()))
            );
        }
    }

    #[test]
    fn hex_check_is_usable_in_const_context() {
        const OK: bool = Color::is_hex("#0f101a");
        const NO_HASH: bool = Color::is_hex("0f101a");
        assert!(OK);
        assert!(!NO_HASH);
        assert!(!Color::is_hex("#0f10g1"));
        assert!(!Color::is_hex("#"));
    }

    #[test]
    #[should_panic(expected = "invalid color literal red")]
    fn bad_literal_panics_in_every_build() {
        let _ = Color::from_static("red");
    }

    #[test]
    fn single_value_widens_to_identical_pair() {
        let c: Color = "#a151d3".parse().unwrap();
        let pair: ColorPair = ColorValue::Single(c.clone()).into();
        assert_eq!(pair.normal(), &c);
        assert_eq!(pair.focused(), &c);
    }

    #[test]
    fn deserializing_validates() {
        let ok: Result<ColorValue, _> = serde_json::from_str(r##"["#0f101a", "#0f101a"]"##);
        assert!(matches!(ok, Ok(ColorValue::Pair(_))));
        let bad: Result<ColorValue, _> = serde_json::from_str(r#""blue""#);
        assert!(bad.is_err());
    }
}
