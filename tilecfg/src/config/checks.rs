use super::{keybind, UserConfig};
use crate::{bar, ThemeSetting};
use std::collections::HashSet;
use tilecfg_core::keymap::{find_duplicates, MAX_NUMBERED_GROUPS};
use tilecfg_core::WidgetFactory;
use tracing_subscriber::EnvFilter;

impl UserConfig {
    pub fn check_modkey(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking if modkey is set.");
        }
        if self.modkey.is_empty() {
            println!("\x1b[1;91mERROR: Your modkey is set to nothing, every binding would fire on a bare key press.\x1b[0m");
            return false;
        }
        if verbose {
            println!("Modkey is okay: {}", self.modkey);
        }
        true
    }

    pub fn check_groups(&self, verbose: bool) -> bool {
        println!("\x1b[0;94m::\x1b[0m Checking groups . . .");
        let mut ok = true;
        if self.groups.is_empty() {
            println!("\x1b[1;91mERROR: No groups are configured\x1b[0m");
            ok = false;
        }
        let mut names = HashSet::new();
        for (index, group) in self.groups.iter().enumerate() {
            if verbose {
                println!("Group {}: {:?}", index + 1, group.name);
            }
            if !names.insert(&group.name) {
                println!(
                    "\x1b[1;91mERROR: Group `{}` is declared more than once\x1b[0m",
                    group.name
                );
                ok = false;
            }
            if index == MAX_NUMBERED_GROUPS {
                println!(
                    "\x1b[1;91mERROR: Only {MAX_NUMBERED_GROUPS} groups get number keys, `{}` and later have none\x1b[0m",
                    group.name
                );
                ok = false;
            }
        }
        if ok {
            println!("\x1b[0;92m    -> All groups OK\x1b[0m");
        }
        ok
    }

    /// Report every key combination bound more than once, manual and group bindings alike.
    pub fn check_keybinds(&self, verbose: bool) -> bool {
        println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
        let mut keymap = match keybind::keymap(self) {
            Ok(keymap) => keymap,
            Err(err) => {
                println!("\x1b[1;91mERROR: {err}\x1b[0m");
                return false;
            }
        };
        let groups_bound = match keymap.with_groups(&self.groups) {
            Ok(_) => true,
            Err(err) => {
                println!("\x1b[1;91mERROR: {err}\x1b[0m");
                false
            }
        };
        if verbose {
            for binding in keymap.bindings() {
                println!("Keybind: {binding}");
            }
        }

        let duplicates = find_duplicates(keymap.bindings());
        if duplicates.is_empty() {
            if groups_bound {
                println!("\x1b[0;92m    -> All keybinds OK\x1b[0m");
            }
            return groups_bound;
        }
        for (first, second) in duplicates {
            println!(
                "\x1b[0m\x1b[1mMultiple commands bound to key combination {} + {}:\
                \n\x1b[1;91m    -> {:?}\
                \n    -> {:?}\
                \n\x1b[0mHelp: change one of the keybindings to something else.\n",
                second.modifiers, second.key, first.commands, second.commands,
            );
        }
        false
    }

    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("\x1b[1;91mERROR: Log level is invalid: {err}\x1b[0m");
                false
            }
        }
    }
}

impl ThemeSetting {
    /// Palette roles the bars need and every bar widget's parameters.
    pub fn check_bars(&self, verbose: bool) -> bool {
        println!("\x1b[0;94m::\x1b[0m Checking palette and bars . . .");
        let missing = self.missing_roles();
        if !missing.is_empty() {
            for role in missing {
                println!("\x1b[1;91mERROR: Color role `{role}` is not defined in the palette\x1b[0m");
            }
            return false;
        }
        if verbose {
            let roles: Vec<&str> = self.palette.roles().collect();
            println!("Palette roles: {}", roles.join(", "));
        }

        let factory = WidgetFactory::new(&self.palette);
        let bars = [
            ("primary", bar::primary_widgets(&factory)),
            ("secondary", bar::secondary_widgets(&factory)),
        ];
        let mut ok = true;
        for (name, widgets) in bars {
            let result = widgets.and_then(|widgets| {
                widgets
                    .iter()
                    .try_for_each(tilecfg_core::models::Widget::validate)
            });
            match result {
                Ok(()) if verbose => println!("Bar `{name}` is ok."),
                Ok(()) => {}
                Err(err) => {
                    println!("\x1b[1;91mERROR: Bar `{name}`: {err}\x1b[0m");
                    ok = false;
                }
            }
        }
        if ok {
            println!("\x1b[0;92m    -> Palette and bars OK\x1b[0m");
        }
        ok
    }
}
