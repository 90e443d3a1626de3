use bitflags::bitflags;
use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

bitflags! {
    /// The modifier keys that must be held for a binding to fire.
    ///
    /// Being a bitmask, two sets compare equal regardless of the order the modifiers were
    /// written in, which is what duplicate detection relies on.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ModMask: u16 {
        const Shift = 1 << 1;
        const Control = 1 << 2;
        /// Alt
        const Mod1 = 1 << 3;
        const Mod3 = 1 << 5;
        /// Super
        const Mod4 = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

// Display order, also used for serialization.
const NAMES: [(ModMask, &str); 6] = [
    (ModMask::Mod1, "mod1"),
    (ModMask::Mod3, "mod3"),
    (ModMask::Mod4, "mod4"),
    (ModMask::Mod5, "mod5"),
    (ModMask::Control, "control"),
    (ModMask::Shift, "shift"),
];

/// Look up a single modifier by name. Names are case insensitive and accept the usual
/// aliases (`alt`, `super`, `ctrl`).
#[must_use]
pub fn into_mod(key: &str) -> Option<ModMask> {
    match key.to_ascii_lowercase().as_str() {
        "shift" => Some(ModMask::Shift),
        "control" | "ctrl" => Some(ModMask::Control),
        "mod1" | "alt" => Some(ModMask::Mod1),
        // NOTE: Mod2 is NumLock on nearly every keymap and is never bindable.
        "mod3" => Some(ModMask::Mod3),
        "mod4" | "super" => Some(ModMask::Mod4),
        "mod5" => Some(ModMask::Mod5),
        _ => None,
    }
}

/// Combine modifier names into one mask.
///
/// # Errors
///
/// Fails on the first name that is not a known modifier.
pub fn into_modmask<S: AsRef<str>>(keys: &[S]) -> Result<ModMask, ConfigError> {
    keys.iter().try_fold(ModMask::empty(), |mask, key| {
        into_mod(key.as_ref())
            .map(|m| mask | m)
            .ok_or_else(|| ConfigError::InvalidModifier(key.as_ref().to_owned()))
    })
}

impl ModMask {
    /// Modifier names in display order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMES
            .iter()
            .filter(move |(m, _)| self.contains(*m))
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for ModMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.names().collect();
        f.write_str(&names.join("+"))
    }
}

impl FromStr for ModMask {
    type Err = ConfigError;

    /// Parses `mod4+shift` style strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(ModMask::empty());
        }
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        into_modmask(&parts)
    }
}

// serde impls (derive is not working with the bitflags macro)

impl Serialize for ModMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.bits().count_ones() as usize))?;
        for name in self.names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ModMaskVisitor;

        impl<'de> Visitor<'de> for ModMaskVisitor {
            type Value = ModMask;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a modifier name or a list of modifier names")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut mask = ModMask::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    mask |= into_mod(&name)
                        .ok_or_else(|| de::Error::custom(ConfigError::InvalidModifier(name)))?;
                }
                Ok(mask)
            }
        }

        deserializer.deserialize_any(ModMaskVisitor)
    }
}

/// Pointer buttons, numbered the way X numbers them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Main button (left click for right-handed)
    Button1,
    /// Middle button (pressing the scroll wheel)
    Button2,
    /// Secondary button (right click for right-handed)
    Button3,
    /// Scroll wheel up
    Button4,
    /// Scroll wheel down
    Button5,
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
