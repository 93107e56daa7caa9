//! QMK keycodes as stored in the dynamic keymap.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use thiserror::Error;

#[path = "keycode_table.rs"]
mod table;

/// Named keycode constants, e.g. [`keycodes::KC_A`].
pub mod keycodes {
    pub use super::table::*;
}

/// Name reported for values with no entry in the keycode table.
pub const UNKNOWN_KEYCODE_NAME: &str = "UNKNOWN";

static NAMES_BY_CODE: LazyLock<HashMap<Keycode, &'static str>> =
    LazyLock::new(|| table::CANONICAL_NAMES.iter().copied().collect());

static CODES_BY_ALIAS: LazyLock<HashMap<&'static str, Keycode>> =
    LazyLock::new(|| table::NAME_ALIASES.iter().copied().collect());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeycodeError {
    #[error("unknown keycode {0:?}")]
    Unknown(String),
}

/// A 16-bit keycode, sent big-endian on the wire.
///
/// The default is `KC_NO`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keycode(u16);

impl Keycode {
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn from_bytes(msb: u8, lsb: u8) -> Self {
        Self(u16::from_be_bytes([msb, lsb]))
    }

    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Canonical name, or [`UNKNOWN_KEYCODE_NAME`].
    pub fn name(self) -> &'static str {
        NAMES_BY_CODE
            .get(&self)
            .copied()
            .unwrap_or(UNKNOWN_KEYCODE_NAME)
    }

    /// Looks up a canonical name or alias.
    ///
    /// Braces and `KC_` prefixes are ignored and matching is case-insensitive,
    /// so `{kc_a}`, `KC_A` and `a` all resolve to `KC_A`.
    pub fn from_name(name: &str) -> Result<Self, KeycodeError> {
        let normalized = name
            .replace(['{', '}'], "")
            .to_uppercase()
            .replace("KC_", "");

        CODES_BY_ALIAS
            .get(normalized.trim())
            .copied()
            .ok_or_else(|| KeycodeError::Unknown(name.to_string()))
    }
}

impl From<u16> for Keycode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Keycode> for u16 {
    fn from(keycode: Keycode) -> Self {
        keycode.0
    }
}

impl FromStr for Keycode {
    type Err = KeycodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
