use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{LayoutStyle, WindowType};
use crate::errors::{ConfigError, Result};

/// A string matcher for window properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PatternRepr", into = "PatternRepr")]
pub enum Pattern {
    Exact(String),
    /// Must match the whole property value; `source` is kept for display and serialization.
    Regex { source: String, regex: Regex },
}

// What a pattern looks like in a config file
#[derive(Serialize, Deserialize)]
enum PatternRepr {
    Exact(String),
    Regex(String),
}

impl Pattern {
    pub fn exact(s: impl Into<String>) -> Self {
        Self::Exact(s.into())
    }

    /// Regular expressions follow RE2 syntax, see <https://github.com/google/re2/wiki/Syntax>.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if `source` does not compile.
    pub fn regex(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{source})$"))
            .map_err(|_| ConfigError::InvalidPattern(source.clone()))?;
        Ok(Self::Regex { source, regex })
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Exact(s) => s == value,
            Self::Regex { regex, .. } => regex.is_match(value),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(s) | Self::Regex { source: s, .. } => s,
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Regex { source: a, .. }, Self::Regex { source: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl TryFrom<PatternRepr> for Pattern {
    type Error = ConfigError;

    fn try_from(repr: PatternRepr) -> Result<Self> {
        match repr {
            PatternRepr::Exact(s) => Ok(Self::Exact(s)),
            PatternRepr::Regex(s) => Self::regex(s),
        }
    }
}

impl From<Pattern> for PatternRepr {
    fn from(p: Pattern) -> Self {
        match p {
            Pattern::Exact(s) => Self::Exact(s),
            Pattern::Regex { source, .. } => Self::Regex(source),
        }
    }
}

/// The window properties rules are evaluated against, as the display layer reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProps {
    /// Instance part of `WM_CLASS`
    pub res_name: Option<String>,
    /// Class part of `WM_CLASS`
    pub res_class: Option<String>,
    /// `_NET_WM_NAME`, falling back to `WM_NAME`
    pub title: Option<String>,
    pub window_type: Option<WindowType>,
}

impl WindowProps {
    pub fn with_class(class: impl Into<String>) -> Self {
        let class = class.into();
        Self {
            res_name: Some(class.clone()),
            res_class: Some(class),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Forces matching windows to float. A rule looks at exactly one property.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum FloatRule {
    /// Either component of `WM_CLASS`
    Class(Pattern),
    Title(Pattern),
    WindowType(WindowType),
}

impl FloatRule {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(Pattern::exact(name))
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self::Title(Pattern::exact(title))
    }

    pub fn matches(&self, window: &WindowProps) -> bool {
        let hit = |pattern: &Pattern, value: &Option<String>| {
            value.as_deref().map_or(false, |v| pattern.matches(v))
        };
        match self {
            Self::Class(p) => hit(p, &window.res_name) || hit(p, &window.res_class),
            Self::Title(p) => hit(p, &window.title),
            Self::WindowType(t) => window.window_type == Some(*t),
        }
    }
}

/// The floating layout the host falls back to for windows matched by `rules`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FloatingLayout {
    pub rules: Vec<FloatRule>,
    #[serde(default)]
    pub style: LayoutStyle,
}

impl FloatingLayout {
    /// Rules every host ships with: transient window types and the usual dialog classes.
    pub fn default_rules() -> Vec<FloatRule> {
        let types = [
            WindowType::Utility,
            WindowType::Notification,
            WindowType::Toolbar,
            WindowType::Splash,
            WindowType::Dialog,
        ]
        .into_iter()
        .map(FloatRule::WindowType);
        let classes = [
            "file_progress",
            "confirm",
            "dialog",
            "download",
            "error",
            "notification",
            "splash",
            "toolbar",
        ]
        .into_iter()
        .map(FloatRule::class);
        types.chain(classes).collect()
    }

    /// `default_rules` followed by `extra`.
    pub fn with_default_rules(extra: impl IntoIterator<Item = FloatRule>) -> Self {
        let mut rules = Self::default_rules();
        rules.extend(extra);
        Self {
            rules,
            style: LayoutStyle::default(),
        }
    }

    /// True when any rule matches; rule order never changes the outcome.
    pub fn should_float(&self, window: &WindowProps) -> bool {
        self.rules.iter().any(|rule| rule.matches(window))
    }
}
