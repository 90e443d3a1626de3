//! The pieces a configuration is made of.
mod binding;
mod color;
mod command;
mod float_rule;
mod group;
mod layout;
mod margins;
mod palette;
mod screen;
mod settings;
mod widget;
mod window_type;

pub use binding::{KeyBinding, MouseAction, MouseBinding};
pub use color::{Color, ColorPair, ColorValue};
pub use command::Command;
pub use float_rule::{FloatRule, FloatingLayout, Pattern, WindowProps};
pub use group::Group;
pub use layout::{Layout, LayoutKind, LayoutStyle, ParseLayoutError};
pub use margins::Margins;
pub use palette::Palette;
pub use screen::{Bar, BarPosition, Screen};
pub use settings::{BringFrontClick, FocusOnActivation, Settings};
pub use widget::{
    Clock, Cpu, CurrentLayoutIcon, Font, FontWeight, GroupBox, HighlightMethod, Memory,
    MemoryUnit, Net, Sep, TextBox, ThermalSensor, UnitPrefix, Widget, WidgetKind, WidgetStyle,
};
pub use window_type::WindowType;
