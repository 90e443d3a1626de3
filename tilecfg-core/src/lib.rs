//! Typed schema for a tiling window manager configuration.
//!
//! Nothing in here talks to a display server. The crate only describes what a host window
//! manager needs (bindings, groups, layouts, bars, float rules and settings) and checks the
//! invariants a host would otherwise trip over at runtime.
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::default_trait_access
)]
pub mod config;
pub mod errors;
pub mod keymap;
pub mod models;
pub mod utils;
pub mod widgets;

pub use config::{Config, ConfigBuilder};
pub use errors::{ConfigError, Result};
pub use keymap::{DuplicatePolicy, KeymapBuilder};
pub use utils::modmask_lookup::{Button, ModMask};
pub use widgets::{WidgetDefaults, WidgetFactory};
