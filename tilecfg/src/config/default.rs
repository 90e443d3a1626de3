use super::UserConfig;
use tilecfg_core::models::{FloatRule, Group, Settings};
use tilecfg_core::{DuplicatePolicy, ModMask, WidgetDefaults};

impl Default for UserConfig {
    fn default() -> Self {
        let groups = [
            "\u{fa9e} WEB",
            "\u{e7ba} DEV",
            "\u{f418} TERM",
            "\u{f827} MISC",
        ]
        .into_iter()
        .map(Group::from)
        .collect();

        // gitk dialogs, ssh-askpass and the GPG key password entry
        let float_rules = vec![
            FloatRule::class("confirmreset"),
            FloatRule::class("makebranch"),
            FloatRule::class("maketag"),
            FloatRule::class("ssh-askpass"),
            FloatRule::title("branchdialog"),
            FloatRule::title("pinentry"),
        ];

        Self {
            modkey: ModMask::Mod4,
            terminal: "tilix".to_owned(),
            groups,
            log_level: "info".to_owned(),
            autostart: None,
            settings: Settings::default(),
            widget_defaults: WidgetDefaults::default(),
            duplicate_policy: DuplicatePolicy::Reject,
            float_rules,
        }
    }
}
