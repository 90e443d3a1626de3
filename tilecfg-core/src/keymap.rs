//! Turns declared `(modifiers, key, commands)` entries and the group list into the flat list
//! of bindings a host grabs.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{ConfigError, Result};
use crate::models::{Command, Group, KeyBinding};
use crate::utils::modmask_lookup::{into_mod, ModMask};

/// Modifier names standing in for the configured mod key.
const MODKEY_PLACEHOLDERS: [&str; 2] = ["mod", "modkey"];

/// Groups past this position have no number key left to bind.
pub const MAX_NUMBERED_GROUPS: usize = 9;

/// What happens when two bindings share a modifier set and key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Refuse to build.
    #[default]
    Reject,
    /// Keep the later binding and log the shadowed one.
    LastWins,
}

#[derive(Debug, Clone)]
pub struct KeymapBuilder {
    modkey: ModMask,
    policy: DuplicatePolicy,
    bindings: Vec<KeyBinding>,
}

impl KeymapBuilder {
    pub fn new(modkey: ModMask) -> Self {
        Self {
            modkey,
            policy: DuplicatePolicy::default(),
            bindings: vec![],
        }
    }

    pub fn modkey(&self) -> ModMask {
        self.modkey
    }

    /// Everything declared so far, duplicates included.
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    #[must_use]
    pub fn policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve modifier names, substituting `mod`/`modkey` with the configured mod key.
    ///
    /// # Errors
    ///
    /// Fails on unknown modifier names.
    pub fn modifiers<S: AsRef<str>>(&self, names: &[S]) -> Result<ModMask> {
        names.iter().try_fold(ModMask::empty(), |mask, name| {
            let name = name.as_ref();
            if MODKEY_PLACEHOLDERS.contains(&name) {
                return Ok(mask | self.modkey);
            }
            into_mod(name)
                .map(|m| mask | m)
                .ok_or_else(|| ConfigError::InvalidModifier(name.to_owned()))
        })
    }

    /// Declare a binding. Several commands are run in sequence by one binding.
    ///
    /// # Errors
    ///
    /// Fails on unknown modifier names or when no command is given.
    pub fn bind<S: AsRef<str>>(
        &mut self,
        modifiers: &[S],
        key: &str,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<&mut Self> {
        let modifiers = self.modifiers(modifiers)?;
        let commands: Vec<Command> = commands.into_iter().collect();
        if commands.is_empty() {
            return Err(ConfigError::Missing("command per binding"));
        }
        self.bindings.push(KeyBinding::new(modifiers, key, commands));
        Ok(self)
    }

    /// Append the "activate" and "move window to" bindings for every group.
    ///
    /// # Errors
    ///
    /// See [`group_bindings`].
    pub fn with_groups(&mut self, groups: &[Group]) -> Result<&mut Self> {
        self.bindings.extend(group_bindings(self.modkey, groups)?);
        Ok(self)
    }

    /// Flatten into the final binding list, applying the duplicate policy.
    ///
    /// # Errors
    ///
    /// With [`DuplicatePolicy::Reject`], fails on the first combo bound twice.
    pub fn build(self) -> Result<Vec<KeyBinding>> {
        let mut seen: HashMap<(ModMask, String), usize> = HashMap::new();
        let mut bindings: Vec<KeyBinding> = Vec::with_capacity(self.bindings.len());

        for binding in self.bindings {
            let combo = (binding.modifiers, binding.key.clone());
            let Some(earlier) = seen.get(&combo).copied() else {
                seen.insert(combo, bindings.len());
                bindings.push(binding);
                continue;
            };
            let first = &bindings[earlier];
            match self.policy {
                DuplicatePolicy::Reject => return Err(duplicate_error(first, &binding)),
                DuplicatePolicy::LastWins => {
                    tracing::warn!(
                        "{} + {}: `{}` shadows `{}`",
                        binding.modifiers,
                        binding.key,
                        binding.describe_commands(),
                        first.describe_commands(),
                    );
                    // the later binding takes the earlier one's slot
                    bindings[earlier] = binding;
                }
            }
        }
        Ok(bindings)
    }
}

/// For the group at 1-based position `i`, bind `mod + i` to show it and `mod + shift + i` to
/// send the focused window there.
///
/// # Errors
///
/// Returns [`ConfigError::UnbindableGroup`] for groups past the ninth.
pub fn group_bindings(modkey: ModMask, groups: &[Group]) -> Result<Vec<KeyBinding>> {
    let mut bindings = Vec::with_capacity(groups.len() * 2);
    for (index, group) in groups.iter().enumerate() {
        let position = index + 1;
        if position > MAX_NUMBERED_GROUPS {
            return Err(ConfigError::UnbindableGroup {
                name: group.name.clone(),
                position,
            });
        }
        let key = position.to_string();
        bindings.push(KeyBinding::new(
            modkey,
            key.clone(),
            vec![Command::ToScreen(group.name.clone())],
        ));
        bindings.push(KeyBinding::new(
            modkey | ModMask::Shift,
            key,
            vec![Command::ToGroup(group.name.clone())],
        ));
    }
    Ok(bindings)
}

/// Every pair of bindings sharing a combo, in declaration order. Unlike
/// [`KeymapBuilder::build`] this does not stop at the first collision.
pub fn find_duplicates(bindings: &[KeyBinding]) -> Vec<(&KeyBinding, &KeyBinding)> {
    let mut seen: HashMap<(ModMask, &str), &KeyBinding> = HashMap::new();
    let mut duplicates = vec![];
    for binding in bindings {
        if let Some(earlier) = seen.insert(binding.combo(), binding) {
            duplicates.push((earlier, binding));
        }
    }
    duplicates
}

pub(crate) fn duplicate_error(first: &KeyBinding, second: &KeyBinding) -> ConfigError {
    ConfigError::DuplicateBinding {
        modifiers: second.modifiers.to_string(),
        key: second.key.clone(),
        first: first.describe_commands(),
        second: second.describe_commands(),
    }
}
