use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything that makes a configuration unusable for the host.
///
/// These are raised while the configuration is assembled, never later: a `Config` that exists
/// has passed all of them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Group `{0}` is declared more than once")]
    DuplicateGroup(String),
    #[error("Multiple commands bound to {modifiers} + {key}: {first} and {second}")]
    DuplicateBinding {
        modifiers: String,
        key: String,
        first: String,
        second: String,
    },
    #[error("Multiple mouse actions bound to {modifiers} + {button}")]
    DuplicateMouseBinding { modifiers: String, button: String },
    #[error("Group `{name}` is at position {position}; only groups 1-9 get number keys")]
    UnbindableGroup { name: String, position: usize },
    #[error("Color role `{0}` is not defined in the palette")]
    UnknownColorRole(String),
    #[error("`{0}` is not a valid color, expected #rgb, #rgba, #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("Modifier `{0}` is not valid")]
    InvalidModifier(String),
    #[error("Widget `{widget}` has update interval {interval}, it must be positive")]
    InvalidInterval { widget: String, interval: f64 },
    #[error("Bar opacity {0} is outside 0.0..=1.0")]
    InvalidOpacity(f32),
    #[error("Bar size must not be zero")]
    InvalidBarSize,
    #[error("Invalid margins: {0}")]
    InvalidMargins(&'static str),
    #[error("Format `{format}` of widget `{widget}` uses an unknown placeholder")]
    InvalidFormat { widget: String, format: String },
    #[error("Icon scale {0} must be positive")]
    InvalidScale(f32),
    #[error("Clock format `{0}` is not a valid strftime string")]
    InvalidClockFormat(String),
    #[error("Float rule pattern `{0}` is not a valid regular expression")]
    InvalidPattern(String),
    #[error("At least one {0} is required")]
    Missing(&'static str),
}
