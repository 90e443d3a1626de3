use serde::{Deserialize, Serialize};
use std::fmt;

use super::Command;
use crate::utils::modmask_lookup::{Button, ModMask};

/// One keyboard shortcut. Several commands run in the order given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: ModMask,
    pub key: String,
    pub commands: Vec<Command>,
}

impl KeyBinding {
    pub fn new(modifiers: ModMask, key: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            modifiers,
            key: key.into(),
            commands,
        }
    }

    /// The part of the binding the host grabs; two bindings with the same combo collide.
    pub fn combo(&self) -> (ModMask, &str) {
        (self.modifiers, self.key.as_str())
    }

    pub(crate) fn describe_commands(&self) -> String {
        let parts: Vec<String> = self.commands.iter().map(ToString::to_string).collect();
        parts.join(", ")
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} => {}",
            self.modifiers,
            self.key,
            self.describe_commands()
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MouseAction {
    /// `start` runs when the drag begins, `command` on every pointer motion after that.
    Drag { command: Command, start: Command },
    Click { command: Command },
}

/// A pointer shortcut.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MouseBinding {
    pub modifiers: ModMask,
    pub button: Button,
    pub action: MouseAction,
}

impl MouseBinding {
    pub fn drag(modifiers: ModMask, button: Button, command: Command, start: Command) -> Self {
        Self {
            modifiers,
            button,
            action: MouseAction::Drag { command, start },
        }
    }

    pub fn click(modifiers: ModMask, button: Button, command: Command) -> Self {
        Self {
            modifiers,
            button,
            action: MouseAction::Click { command },
        }
    }
}
