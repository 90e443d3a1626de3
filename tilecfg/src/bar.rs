//! The two bar variants: the primary one with the tray and a calendar icon, the secondary
//! one for the other monitors.
use tilecfg_core::models::{
    Clock, Cpu, CurrentLayoutIcon, Memory, MemoryUnit, Net, ThermalSensor, UnitPrefix, Widget,
    WidgetKind,
};
use tilecfg_core::{Result, WidgetFactory};

// Nerd Font glyphs, each followed by a space
const ICON_DOWNLOAD: &str = "\u{f85a} ";
const ICON_FEED: &str = "\u{f09e} ";
const ICON_CALENDAR_CLOCK: &str = "\u{f5ef} ";

const ICON_FONTSIZE: u32 = 16;

/// Roles the bars use on top of the workspace roles.
pub const SEGMENT_ROLES: [&str; 5] = ["color1", "color2", "color3", "color4", "color5"];

pub fn primary_widgets(factory: &WidgetFactory) -> Result<Vec<Widget>> {
    let mut widgets = factory.workspaces()?;
    widgets.push(factory.separator()?);
    widgets.extend(status_segments(factory)?);
    widgets.push(factory.icon("text", "color1", 17, ICON_CALENDAR_CLOCK)?);
    widgets.push(clock(factory)?);
    widgets.push(Widget::new(
        WidgetKind::Systray,
        factory.background("color1")?.padding(5),
    ));
    Ok(widgets)
}

pub fn secondary_widgets(factory: &WidgetFactory) -> Result<Vec<Widget>> {
    let mut widgets = factory.workspaces()?;
    widgets.extend(status_segments(factory)?);
    widgets.push(clock(factory)?);
    widgets.push(factory.powerline("dark", "dark")?);
    Ok(widgets)
}

/// Everything from the first divider up to the one in front of the clock segment.
fn status_segments(factory: &WidgetFactory) -> Result<Vec<Widget>> {
    Ok(vec![
        factory.powerline("color5", "dark")?,
        factory.icon("text", "color5", ICON_FONTSIZE, ICON_DOWNLOAD)?,
        Widget::new(
            WidgetKind::Cpu(Cpu {
                format: "CPU {load_percent}%".to_owned(),
                update_interval: 0.5,
            }),
            factory.base("text", "color5")?.padding(6),
        ),
        Widget::new(
            WidgetKind::ThermalSensor(ThermalSensor {
                threshold: 85.0,
                update_interval: 2.0,
            }),
            factory.base("text", "color5")?.padding(5),
        ),
        factory.powerline("color4", "color5")?,
        Widget::new(
            WidgetKind::Memory(Memory {
                format: "RAM {MemUsed: .0f}{mm} /{MemTotal: .0f}{mm} | {MemPercent}%".to_owned(),
                measure_mem: MemoryUnit::M,
                update_interval: 0.5,
            }),
            factory.base("text", "color4")?.padding(7),
        ),
        factory.powerline("color3", "color4")?,
        factory.icon("text", "color3", ICON_FONTSIZE, ICON_FEED)?,
        Widget::new(
            WidgetKind::Net(Net {
                format: "{interface}: {down} ↓↑ {up}".to_owned(),
                update_interval: 0.5,
                use_bits: false,
                prefix: Some(UnitPrefix::K),
            }),
            factory.base("text", "color3")?.padding(8),
        ),
        factory.powerline("color2", "color3")?,
        Widget::new(
            WidgetKind::CurrentLayoutIcon(CurrentLayoutIcon { scale: 0.65 }),
            factory.base("text", "color2")?,
        ),
        Widget::new(
            WidgetKind::CurrentLayout,
            factory.base("text", "color2")?.padding(5),
        ),
        factory.powerline("color1", "color2")?,
    ])
}

fn clock(factory: &WidgetFactory) -> Result<Widget> {
    Ok(Widget::new(
        WidgetKind::Clock(Clock {
            format: "%d/%m/%Y - %H:%M ".to_owned(),
        }),
        factory.base("text", "color1")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme_setting::default_palette;

    const PREFIX: [&str; 5] = ["Sep", "GroupBox", "Sep", "WindowName", "Sep"];

    fn names(widgets: &[Widget]) -> Vec<&'static str> {
        widgets.iter().map(Widget::name).collect()
    }

    #[test]
    fn both_bars_start_with_workspaces() {
        let palette = default_palette();
        let factory = WidgetFactory::new(&palette);
        let primary = primary_widgets(&factory).unwrap();
        let secondary = secondary_widgets(&factory).unwrap();
        assert_eq!(names(&primary)[..5], PREFIX);
        assert_eq!(names(&secondary)[..5], PREFIX);
    }

    #[test]
    fn primary_bar_order() {
        let palette = default_palette();
        let primary = primary_widgets(&WidgetFactory::new(&palette)).unwrap();
        assert_eq!(
            names(&primary)[5..],
            [
                "Sep",
                "TextBox",
                "TextBox",
                "CPU",
                "ThermalSensor",
                "TextBox",
                "Memory",
                "TextBox",
                "TextBox",
                "Net",
                "TextBox",
                "CurrentLayoutIcon",
                "CurrentLayout",
                "TextBox",
                "TextBox",
                "Clock",
                "Systray",
            ]
        );
    }

    #[test]
    fn secondary_bar_has_no_tray_and_ends_with_a_divider() {
        let palette = default_palette();
        let secondary = secondary_widgets(&WidgetFactory::new(&palette)).unwrap();
        assert!(secondary.iter().all(|w| w.kind != WidgetKind::Systray));
        let last = secondary.last().unwrap();
        assert_eq!(last.style.fontsize, Some(37));
        assert_eq!(last.style.background, Some(palette.resolve("dark").unwrap()));
    }

    #[test]
    fn every_bar_widget_validates() {
        let palette = default_palette();
        let factory = WidgetFactory::new(&palette);
        for widget in primary_widgets(&factory)
            .unwrap()
            .iter()
            .chain(&secondary_widgets(&factory).unwrap())
        {
            assert_eq!(widget.validate(), Ok(()), "{}", widget.name());
        }
    }
}
