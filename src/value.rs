//! Percentage and hue values carried as single wire bytes.
//!
//! The firmware stores every lighting property as a byte in `0..=255`. The
//! client presents them as percentages (`0..=100`) or degrees (`0..=360`)
//! using `round(byte * scale / 255)` and its inverse, rounding half away
//! from zero. The mapping is not exactly invertible; `0`, `50`, `100` and
//! `0`, `128`, `255` round-trip.

use std::fmt;

const BYTE_MAX: f64 = 255.0;
const PERCENT_MAX: f64 = 100.0;
const DEGREES_MAX: f64 = 360.0;

fn scale_from_byte(value: u8, max: f64) -> u16 {
    ((value as f64 * max) / BYTE_MAX).round() as u16
}

fn scale_to_byte(value: u16, max: f64) -> u8 {
    ((value as f64 * BYTE_MAX) / max).round() as u8
}

/// Wire byte to percentage.
pub fn to_percentage(value: u8) -> u8 {
    scale_from_byte(value, PERCENT_MAX) as u8
}

/// Percentage to wire byte. Values above 100 saturate to 255.
pub fn from_percentage(percent: u8) -> u8 {
    scale_to_byte(percent as u16, PERCENT_MAX)
}

/// Wire byte to hue in degrees.
pub fn to_hue_degrees(value: u8) -> u16 {
    scale_from_byte(value, DEGREES_MAX)
}

/// Hue in degrees to wire byte. Values above 360 saturate to 255.
pub fn from_hue_degrees(degrees: u16) -> u8 {
    scale_to_byte(degrees, DEGREES_MAX)
}

macro_rules! percentage_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u8);

        impl $name {
            pub fn from_byte(value: u8) -> Self {
                Self(to_percentage(value))
            }

            pub fn to_byte(self) -> u8 {
                from_percentage(self.0)
            }

            pub fn percent(self) -> u8 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}%", self.0)
            }
        }
    };
}

percentage_value!(
    /// Backlight or RGB brightness, `0..=100`%.
    Brightness
);
percentage_value!(
    /// RGB saturation, `0..=100`%.
    Saturation
);
percentage_value!(
    /// RGB effect speed, `0..=100`%.
    Speed
);

/// RGB hue in degrees, `0..=360`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hue(pub u16);

impl Hue {
    pub fn from_byte(value: u8) -> Self {
        Self(to_hue_degrees(value))
    }

    pub fn to_byte(self) -> u8 {
        from_hue_degrees(self.0)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
