//! The personal key and mouse bindings.
use tilecfg_core::models::{Command, MouseBinding};
use tilecfg_core::{Button, KeymapBuilder, ModMask, Result};

use super::UserConfig;

/// Manual key bindings. Group bindings are added when the configuration is built.
///
/// # Errors
///
/// Fails on an unknown modifier name.
pub fn keymap(user: &UserConfig) -> Result<KeymapBuilder> {
    let mut keymap = KeymapBuilder::new(user.modkey).policy(user.duplicate_policy);
    keymap
        // windows in the current stack
        .bind(&["mod"], "j", [Command::FocusDown])?
        .bind(&["mod"], "k", [Command::FocusUp])?
        .bind(&["mod"], "h", [Command::FocusLeft])?
        .bind(&["mod"], "l", [Command::FocusRight])?
        .bind(&["mod", "shift"], "l", [Command::Grow])?
        .bind(&["mod", "shift"], "h", [Command::Shrink])?
        .bind(&["mod", "shift"], "f", [Command::ToggleFloating])?
        .bind(&["mod", "shift"], "j", [Command::ShuffleDown])?
        .bind(&["mod", "shift"], "k", [Command::ShuffleUp])?
        .bind(&["mod"], "Tab", [Command::NextLayout])?
        .bind(&["mod", "shift"], "Tab", [Command::PreviousLayout])?
        .bind(&["mod"], "w", [Command::KillWindow])?
        .bind(&["mod"], "period", [Command::NextScreen])?
        .bind(&["mod"], "comma", [Command::PreviousScreen])?
        .bind(&["mod", "control"], "r", [Command::Restart])?
        .bind(&["mod", "control"], "q", [Command::Shutdown])?
        .bind(&["mod"], "r", [Command::SpawnPrompt])?
        // applications
        .bind(&["mod"], "m", [Command::spawn("rofi -show drun")])?
        .bind(&["mod", "shift"], "m", [Command::spawn("rofi -show")])?
        .bind(&["mod"], "n", [Command::spawn("google-chrome-stable")])?
        .bind(&["mod", "shift"], "e", [Command::spawn("ranger --show")])?
        .bind(&["mod"], "e", [Command::spawn("thunar")])?
        .bind(&["mod"], "Return", [Command::spawn(&user.terminal)])?
        .bind(&["mod"], "v", [Command::spawn("code")])?
        .bind(&["mod"], "t", [Command::spawn("redshift -O 2400")])?
        .bind(&["mod", "shift"], "r", [Command::spawn("redshift -x")])?
        .bind(&["mod"], "s", [Command::spawn("scrot")])?
        .bind(&["mod", "shift"], "s", [Command::spawn("scrot -s")])?
        // volume
        .bind(
            &["mod"],
            "z",
            [Command::spawn("pactl set-sink-volume @DEFAULT_SINK@ -5%")],
        )?
        .bind(
            &["mod"],
            "x",
            [Command::spawn("pactl set-sink-volume @DEFAULT_SINK@ +5%")],
        )?
        .bind(
            &["mod"],
            "a",
            [Command::spawn("pactl set-sink-mute @DEFAULT_SINK@ toggle")],
        )?;
    Ok(keymap)
}

/// Move and resize floating windows with the mod key held, raise them with a middle click.
pub fn mouse(modkey: ModMask) -> Vec<MouseBinding> {
    vec![
        MouseBinding::drag(
            modkey,
            Button::Button1,
            Command::SetPositionFloating,
            Command::GetPosition,
        ),
        MouseBinding::drag(
            modkey,
            Button::Button3,
            Command::SetSizeFloating,
            Command::GetSize,
        ),
        MouseBinding::click(modkey, Button::Button2, Command::BringToFront),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecfg_core::keymap::find_duplicates;
    use tilecfg_core::models::Group;

    #[test]
    fn personal_keymap_has_no_collisions() {
        let user = UserConfig::default();
        let mut keymap = keymap(&user).unwrap();
        keymap.with_groups(&user.groups).unwrap();
        assert!(find_duplicates(keymap.bindings()).is_empty());
        assert_eq!(keymap.build().unwrap().len(), 31 + 2 * user.groups.len());
    }

    #[test]
    fn terminal_comes_from_user_config() {
        let user = UserConfig {
            terminal: "alacritty".to_owned(),
            ..UserConfig::default()
        };
        let bindings = keymap(&user).unwrap().build().unwrap();
        let terminal = bindings
            .iter()
            .find(|b| b.combo() == (ModMask::Mod4, "Return"))
            .unwrap();
        assert_eq!(terminal.commands, vec![Command::spawn("alacritty")]);
    }

    #[test]
    fn modkey_is_configurable() {
        let user = UserConfig {
            modkey: ModMask::Mod1,
            groups: vec![Group::new("one")],
            ..UserConfig::default()
        };
        let bindings = keymap(&user).unwrap().build().unwrap();
        assert!(bindings.iter().all(|b| b.modifiers.contains(ModMask::Mod1)));
        assert!(mouse(user.modkey).iter().all(|m| m.modifiers == ModMask::Mod1));
    }
}
