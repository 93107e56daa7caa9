//! Client error types

use thiserror::Error;

/// Errors returned by transport, protocol and macro operations.
#[derive(Error, Debug)]
pub enum ClientError {
    // Discovery
    #[error("no via-enabled keyboards found")]
    NoKeyboardsFound,

    #[error("no matching devices found")]
    NoMatchingDevice,

    #[error("keyboard speaks VIA protocol 0x{actual:04X}, expected 0x{expected:04X}")]
    VersionMismatch { expected: u16, actual: u16 },

    // Framing and transport
    #[error("incorrect VIA message size: {0} bytes")]
    BadMessageSize(usize),

    #[error("could not read/write to keyboard after {attempts} attempts")]
    ReadWrite { attempts: usize },

    #[error("keyboard did not handle VIA command 0x{command:02X}")]
    UnknownCommand { command: u8 },

    // Buffers
    #[error("incorrect buffer size {0} (must be 1..=28)")]
    BadBufferSize(usize),

    #[error("payload of {len} bytes is too long (max {max})")]
    PayloadTooLong { len: usize, max: usize },

    // Macros
    #[error("empty or invalid macro number {index} (0-{count})")]
    InvalidMacroIndex { index: u8, count: u8 },

    #[error("macro {index} was not found in the macro buffer")]
    MacroNotFound { index: u8 },

    #[error("macro buffer of {len} bytes does not fit in {capacity} bytes")]
    MacroBufferOverflow { len: usize, capacity: usize },

    // Collaborators
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "hid")]
    #[error("HID error: {0}")]
    Hid(#[from] hidapi::HidError),
}
