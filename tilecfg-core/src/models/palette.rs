use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::color::{ColorPair, ColorValue};
use crate::errors::{ConfigError, Result};

/// Maps semantic role names (`text`, `dark`, `focus`, `color1`, ...) to colors.
///
/// Widgets never carry raw colors from the bar definition, they ask the palette for a role and
/// the lookup fails loudly if the role is missing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Palette {
    roles: BTreeMap<String, ColorValue>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, role: impl Into<String>, value: ColorValue) -> Self {
        self.roles.insert(role.into(), value);
        self
    }

    pub fn insert(&mut self, role: impl Into<String>, value: ColorValue) -> Option<ColorValue> {
        self.roles.insert(role.into(), value)
    }

    /// Resolve a role to a color pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownColorRole`] when the role is not defined.
    pub fn resolve(&self, role: &str) -> Result<ColorPair> {
        self.roles
            .get(role)
            .cloned()
            .map(ColorPair::from)
            .ok_or_else(|| ConfigError::UnknownColorRole(role.to_owned()))
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Roles out of `required` that this palette does not define.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|role| !self.contains(role))
            .collect()
    }
}
