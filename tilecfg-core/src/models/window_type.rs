use serde::{Deserialize, Serialize};

/// `_NET_WM_WINDOW_TYPE`, as reported by the display layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    Notification,
    Normal,
}
