use serde::{Deserialize, Serialize};

/// What the host does when a window asks to be activated.
#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnActivation {
    /// Always switch to the window.
    #[serde(alias = "always")]
    Focus,
    /// Switch only if the window is on the current group, otherwise mark it urgent.
    #[default]
    Smart,
    /// Mark the window as urgent.
    Urgent,
    /// Do nothing.
    Never,
}

/// Whether clicking a window raises it.
#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BringFrontClick {
    Always,
    #[default]
    Never,
    FloatingOnly,
}

impl From<bool> for BringFrontClick {
    fn from(b: bool) -> Self {
        if b {
            Self::Always
        } else {
            Self::Never
        }
    }
}

/// Flags the host consumes verbatim.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Focus follows the pointer.
    pub follow_mouse_focus: bool,
    pub bring_front_click: BringFrontClick,
    /// Warp the pointer to the center of a window when it gains focus.
    pub cursor_warp: bool,
    /// Honour fullscreen requests from clients.
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    /// Re-read the screen layout when monitors are added or removed.
    pub reconfigure_screens: bool,
    /// Let clients minimize themselves when they lose focus (games do this).
    pub auto_minimize: bool,
    /// Name reported to clients. Java UI toolkits only lay out correctly under names on
    /// their whitelist, such as "LG3D".
    pub wmname: String,
    /// Rules for dynamically created groups; the host's hook API, unused by this config.
    pub dgroups_app_rules: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: BringFrontClick::Never,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wmname: "LG3D".to_owned(),
            dgroups_app_rules: vec![],
        }
    }
}
