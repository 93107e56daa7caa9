//! VIA protocol identifiers.
//!
//! Command and value identifiers match `quantum/via.h` for protocol version 9.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Protocol version this client speaks. Any other reported version is rejected at connect time.
pub const VIA_PROTOCOL_VERSION: u16 = 0x0009;

/// Raw HID usage page of the VIA interface.
pub const VIA_USAGE_PAGE: u16 = 0xFF60;
/// Raw HID usage of the VIA interface.
pub const VIA_USAGE: u16 = 0x61;

/// Reply byte 0 when the firmware did not handle the command.
pub const UNHANDLED_COMMAND: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Command {
    GetProtocolVersion = 0x01,
    GetKeyboardValue = 0x02,
    SetKeyboardValue = 0x03,
    DynamicKeymapGetKeycode = 0x04,
    DynamicKeymapSetKeycode = 0x05,
    DynamicKeymapReset = 0x06,
    LightingSetValue = 0x07,
    LightingGetValue = 0x08,
    LightingSave = 0x09,
    EepromReset = 0x0A,
    BootloaderJump = 0x0B,
    DynamicKeymapMacroGetCount = 0x0C,
    DynamicKeymapMacroGetBufferSize = 0x0D,
    DynamicKeymapMacroGetBuffer = 0x0E,
    DynamicKeymapMacroSetBuffer = 0x0F,
    DynamicKeymapMacroReset = 0x10,
    DynamicKeymapGetLayerCount = 0x11,
    DynamicKeymapGetBuffer = 0x12,
    DynamicKeymapSetBuffer = 0x13,
}

/// Sub-identifiers of the get/set keyboard value commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum KeyboardValue {
    Uptime = 0x01,
    LayoutOptions = 0x02,
    SwitchMatrixState = 0x03,
}

/// Sub-identifiers of the lighting get/set commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum LightingValue {
    BacklightBrightness = 0x09,
    BacklightEffect = 0x0A,
    RgblightBrightness = 0x80,
    RgblightEffect = 0x81,
    RgblightEffectSpeed = 0x82,
    RgblightColor = 0x83,
}
