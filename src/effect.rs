//! Backlight and RGB light effect modes.

use num_enum::{FromPrimitive, IntoPrimitive};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Lower-cases and strips spaces and the word "effect".
fn normalize_effect_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "").replace("effect", "")
}

fn lookup<E: Copy>(aliases: &[(&str, E)], name: &str, unknown: E) -> E {
    let normalized = normalize_effect_name(name);
    aliases
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, effect)| *effect)
        .unwrap_or(unknown)
}

/// Backlight effect. The backlight only knows breathing on or off.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    FromPrimitive,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum BacklightEffect {
    #[strum(serialize = "Breathing Off")]
    BreathingOff = 0,
    #[strum(serialize = "Breathing On")]
    BreathingOn = 1,
    #[num_enum(default)]
    Unknown = 2,
}

const BACKLIGHT_ALIASES: &[(&str, BacklightEffect)] = &[
    ("off", BacklightEffect::BreathingOff),
    ("breathingoff", BacklightEffect::BreathingOff),
    ("on", BacklightEffect::BreathingOn),
    ("breathing", BacklightEffect::BreathingOn),
    ("breathingon", BacklightEffect::BreathingOn),
];

impl BacklightEffect {
    /// Every real effect, excluding [`BacklightEffect::Unknown`].
    pub fn all() -> Vec<Self> {
        Self::iter().filter(|e| *e != Self::Unknown).collect()
    }

    /// Bytes outside the known range map to [`BacklightEffect::Unknown`].
    pub fn from_byte(value: u8) -> Self {
        Self::from_primitive(value)
    }

    pub fn to_byte(self) -> u8 {
        self.into()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parses a display name or alias. Unrecognized names yield `Unknown`.
    pub fn from_name(name: &str) -> Self {
        lookup(BACKLIGHT_ALIASES, name, Self::Unknown)
    }
}

/// RGB light animation mode, in QMK `rgblight` mode order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    FromPrimitive,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum RgbEffect {
    #[strum(serialize = "All Off")]
    AllOff = 0,
    #[strum(serialize = "Solid Color")]
    SolidColor,
    #[strum(serialize = "Breathing 1")]
    Breathing1,
    #[strum(serialize = "Breathing 2")]
    Breathing2,
    #[strum(serialize = "Breathing 3")]
    Breathing3,
    #[strum(serialize = "Breathing 4")]
    Breathing4,
    #[strum(serialize = "Rainbow Mood 1")]
    RainbowMood1,
    #[strum(serialize = "Rainbow Mood 2")]
    RainbowMood2,
    #[strum(serialize = "Rainbow Mood 3")]
    RainbowMood3,
    #[strum(serialize = "Rainbow Swirl 1")]
    RainbowSwirl1,
    #[strum(serialize = "Rainbow Swirl 2")]
    RainbowSwirl2,
    #[strum(serialize = "Rainbow Swirl 3")]
    RainbowSwirl3,
    #[strum(serialize = "Rainbow Swirl 4")]
    RainbowSwirl4,
    #[strum(serialize = "Rainbow Swirl 5")]
    RainbowSwirl5,
    #[strum(serialize = "Rainbow Swirl 6")]
    RainbowSwirl6,
    #[strum(serialize = "Snake 1")]
    Snake1,
    #[strum(serialize = "Snake 2")]
    Snake2,
    #[strum(serialize = "Snake 3")]
    Snake3,
    #[strum(serialize = "Snake 4")]
    Snake4,
    #[strum(serialize = "Snake 5")]
    Snake5,
    #[strum(serialize = "Snake 6")]
    Snake6,
    #[strum(serialize = "Knight 1")]
    Knight1,
    #[strum(serialize = "Knight 2")]
    Knight2,
    #[strum(serialize = "Knight 3")]
    Knight3,
    #[strum(serialize = "Christmas")]
    Christmas,
    #[strum(serialize = "Gradient 1")]
    Gradient1,
    #[strum(serialize = "Gradient 2")]
    Gradient2,
    #[strum(serialize = "Gradient 3")]
    Gradient3,
    #[strum(serialize = "Gradient 4")]
    Gradient4,
    #[strum(serialize = "Gradient 5")]
    Gradient5,
    #[strum(serialize = "Gradient 6")]
    Gradient6,
    #[strum(serialize = "Gradient 7")]
    Gradient7,
    #[strum(serialize = "Gradient 8")]
    Gradient8,
    #[strum(serialize = "Gradient 9")]
    Gradient9,
    #[strum(serialize = "Gradient 10")]
    Gradient10,
    #[strum(serialize = "RGB Test")]
    RgbTest,
    #[strum(serialize = "Alternating")]
    Alternating,
    #[num_enum(default)]
    Unknown,
}

const RGB_ALIASES: &[(&str, RgbEffect)] = &[
    ("off", RgbEffect::AllOff),
    ("alloff", RgbEffect::AllOff),
    ("solid", RgbEffect::SolidColor),
    ("static", RgbEffect::SolidColor),
    ("color", RgbEffect::SolidColor),
    ("solidcolor", RgbEffect::SolidColor),
    ("staticcolor", RgbEffect::SolidColor),
    ("breathing", RgbEffect::Breathing1),
    ("breathing1", RgbEffect::Breathing1),
    ("breathing2", RgbEffect::Breathing2),
    ("breathing3", RgbEffect::Breathing3),
    ("breathing4", RgbEffect::Breathing4),
    ("mood", RgbEffect::RainbowMood1),
    ("mood1", RgbEffect::RainbowMood1),
    ("rainbowmood", RgbEffect::RainbowMood1),
    ("rainbowmood1", RgbEffect::RainbowMood1),
    ("mood2", RgbEffect::RainbowMood2),
    ("rainbowmood2", RgbEffect::RainbowMood2),
    ("mood3", RgbEffect::RainbowMood3),
    ("rainbowmood3", RgbEffect::RainbowMood3),
    ("swirl", RgbEffect::RainbowSwirl1),
    ("swirl1", RgbEffect::RainbowSwirl1),
    ("rainbowswirl", RgbEffect::RainbowSwirl1),
    ("rainbowswirl1", RgbEffect::RainbowSwirl1),
    ("swirl2", RgbEffect::RainbowSwirl2),
    ("rainbowswirl2", RgbEffect::RainbowSwirl2),
    ("swirl3", RgbEffect::RainbowSwirl3),
    ("rainbowswirl3", RgbEffect::RainbowSwirl3),
    ("swirl4", RgbEffect::RainbowSwirl4),
    ("rainbowswirl4", RgbEffect::RainbowSwirl4),
    ("swirl5", RgbEffect::RainbowSwirl5),
    ("rainbowswirl5", RgbEffect::RainbowSwirl5),
    ("swirl6", RgbEffect::RainbowSwirl6),
    ("rainbowswirl6", RgbEffect::RainbowSwirl6),
    ("snake", RgbEffect::Snake1),
    ("snake1", RgbEffect::Snake1),
    ("snake2", RgbEffect::Snake2),
    ("snake3", RgbEffect::Snake3),
    ("snake4", RgbEffect::Snake4),
    ("snake5", RgbEffect::Snake5),
    ("snake6", RgbEffect::Snake6),
    ("knight", RgbEffect::Knight1),
    ("knight1", RgbEffect::Knight1),
    ("knight2", RgbEffect::Knight2),
    ("knight3", RgbEffect::Knight3),
    ("christmas", RgbEffect::Christmas),
    ("gradient", RgbEffect::Gradient1),
    ("gradient1", RgbEffect::Gradient1),
    ("gradient2", RgbEffect::Gradient2),
    ("gradient3", RgbEffect::Gradient3),
    ("gradient4", RgbEffect::Gradient4),
    ("gradient5", RgbEffect::Gradient5),
    ("gradient6", RgbEffect::Gradient6),
    ("gradient7", RgbEffect::Gradient7),
    ("gradient8", RgbEffect::Gradient8),
    ("gradient9", RgbEffect::Gradient9),
    ("gradient10", RgbEffect::Gradient10),
    ("test", RgbEffect::RgbTest),
    ("rgbtest", RgbEffect::RgbTest),
    ("alternating", RgbEffect::Alternating),
];

impl RgbEffect {
    /// Every real effect, excluding [`RgbEffect::Unknown`].
    pub fn all() -> Vec<Self> {
        Self::iter().filter(|e| *e != Self::Unknown).collect()
    }

    /// Bytes outside the known range map to [`RgbEffect::Unknown`].
    pub fn from_byte(value: u8) -> Self {
        Self::from_primitive(value)
    }

    pub fn to_byte(self) -> u8 {
        self.into()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parses a display name or alias. Unrecognized names yield `Unknown`.
    pub fn from_name(name: &str) -> Self {
        lookup(RGB_ALIASES, name, Self::Unknown)
    }
}
