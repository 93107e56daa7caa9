//! Rust client for the VIA configuration protocol spoken by QMK keyboards over raw HID.
//!
//! The recommended API surface is:
//! - [`ViaClient`] for keyboard values, keymap, lighting and macros
//! - [`Keycode`] and [`keycodes`] for dynamic keymap values
//! - [`Color`], [`BacklightEffect`] and [`RgbEffect`] for lighting values
//! - [`transport`] for the HID adapter and the retrying frame transport
//!
//! Any `Read + Write` handle that exchanges 32-byte reports can drive a
//! [`ViaClient`]; with the default `hid` feature [`ViaClient::connect_hid`]
//! finds and opens a keyboard through `hidapi`.

mod client;
mod color;
mod effect;
mod error;
/// Fixed-size report frames.
pub mod framing;
mod keycode;
mod macros;
/// Command and value identifiers of the VIA protocol.
pub mod protocol;
#[cfg(test)]
mod testing;
/// Frame transport with retries, device discovery and the HID adapter.
pub mod transport;
mod value;

/// Session with one keyboard and the options used to open it.
pub use client::{ConnectOptions, ViaClient};
/// HSV colors as stored by the RGB light.
pub use color::{Color, ColorError, Rgb};
/// Lighting effect modes.
pub use effect::{BacklightEffect, RgbEffect};
/// Errors returned by client operations.
pub use error::ClientError;
/// Dynamic keymap values and their named constants.
pub use keycode::{Keycode, KeycodeError, UNKNOWN_KEYCODE_NAME, keycodes};
/// Helpers for working with raw macro buffers.
pub use macros::{join_macros, split_macros};
/// Byte-backed lighting values.
pub use value::{
    Brightness, Hue, Saturation, Speed, from_hue_degrees, from_percentage, to_hue_degrees,
    to_percentage,
};
