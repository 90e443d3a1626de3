use serde::{Deserialize, Serialize};
use std::fmt;

/// An action the host performs when a binding fires.
///
/// The host owns the behaviour behind every variant; this crate only names them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // focus inside the current layout
    FocusDown,
    FocusUp,
    FocusLeft,
    FocusRight,
    // layout adjustments
    Grow,
    Shrink,
    ShuffleDown,
    ShuffleUp,
    NextLayout,
    PreviousLayout,
    // window
    ToggleFloating,
    KillWindow,
    SetPositionFloating,
    GetPosition,
    SetSizeFloating,
    GetSize,
    BringToFront,
    // screens
    NextScreen,
    PreviousScreen,
    // groups, keyed by group name
    ToScreen(String),
    ToGroup(String),
    // host process
    Restart,
    Shutdown,
    SpawnPrompt,
    Spawn(String),
}

impl Command {
    pub fn spawn(cmd: impl Into<String>) -> Self {
        Self::Spawn(cmd.into())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToScreen(group) => write!(f, "ToScreen({group})"),
            Self::ToGroup(group) => write!(f, "ToGroup({group})"),
            Self::Spawn(cmd) => write!(f, "Spawn({cmd})"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}
