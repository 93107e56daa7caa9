use std::ffi::CString;
use std::io::{Read, Write};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ClientError;
use crate::framing::{MESSAGE_SIZE, Message};
use crate::protocol::UNHANDLED_COMMAND;

#[cfg(feature = "hid")]
pub mod hid;

const DEFAULT_ATTEMPTS: usize = 20;

/// How many times one frame exchange is tried before giving up.
///
/// Attempts run back to back with no delay; the handle's own read timeout
/// is the only wait between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: usize,
}

impl RetryPolicy {
    pub const fn new(attempts: usize) -> Self {
        Self { attempts }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPTS)
    }
}

/// A VIA-capable HID interface reported by a [`Discovery`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub serial_number: Option<String>,
    pub product_name: String,
    pub path: CString,
}

/// Narrows discovered keyboards down to a specific device.
///
/// Every field left as `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
    pub serial: Option<String>,
}

impl DeviceFilter {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id: Some(vendor_id),
            product_id: Some(product_id),
            serial: None,
        }
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    pub fn matches(&self, keyboard: &KeyboardInfo) -> bool {
        self.vendor_id.is_none_or(|vid| vid == keyboard.vendor_id)
            && self.product_id.is_none_or(|pid| pid == keyboard.product_id)
            && self
                .serial
                .as_deref()
                .is_none_or(|serial| keyboard.serial_number.as_deref() == Some(serial))
    }
}

/// Source of VIA keyboards and of handles to talk to them.
pub trait Discovery {
    type Handle: Read + Write;

    /// Lists every VIA interface currently attached, sorted by product name.
    fn enumerate(&mut self) -> Result<Vec<KeyboardInfo>, ClientError>;

    fn open(
        &mut self,
        keyboard: &KeyboardInfo,
        read_timeout: Duration,
    ) -> Result<Self::Handle, ClientError>;
}

/// Sends fixed-size frames over a `Read + Write` handle and reads one reply per frame.
#[derive(Debug)]
pub struct MessageTransport<T> {
    io: T,
    retry: RetryPolicy,
}

impl<T: Read + Write> MessageTransport<T> {
    pub fn new(io: T, retry: RetryPolicy) -> Self {
        Self { io, retry }
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    pub fn set_retry(&mut self, retry: RetryPolicy) {
        self.retry = retry;
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.io
    }

    pub fn into_inner(self) -> T {
        self.io
    }

    /// Exchanges `message` using the configured [`RetryPolicy`].
    pub fn send(&mut self, message: &Message) -> Result<Message, ClientError> {
        self.exchange(message.as_bytes(), self.retry.attempts)
    }

    /// Writes `request` and reads the reply, trying up to `attempts` times.
    ///
    /// A failed or short write or read starts the next attempt with the
    /// original request. A reply marked as unhandled fails at once with
    /// [`ClientError::UnknownCommand`].
    pub fn exchange(&mut self, request: &[u8], attempts: usize) -> Result<Message, ClientError> {
        let request = Message::from_slice(request)?;
        let command = request.command_id();

        for attempt in 1..=attempts {
            let mut frame = request;

            match self.io.write(frame.as_bytes()) {
                Ok(MESSAGE_SIZE) => {}
                Ok(written) => {
                    debug!(command, attempt, written, "short write");
                    continue;
                }
                Err(err) => {
                    debug!(command, attempt, error = %err, "write failed");
                    continue;
                }
            }

            match self.io.read(frame.as_mut_bytes()) {
                Ok(MESSAGE_SIZE) => {}
                Ok(read) => {
                    debug!(command, attempt, read, "short read");
                    continue;
                }
                Err(err) => {
                    debug!(command, attempt, error = %err, "read failed");
                    continue;
                }
            }

            if frame.command_id() == UNHANDLED_COMMAND {
                warn!(command, "keyboard rejected command");
                return Err(ClientError::UnknownCommand { command });
            }

            debug!(command, attempt, "exchanged frame");
            return Ok(frame);
        }

        warn!(command, attempts, "giving up on frame exchange");
        Err(ClientError::ReadWrite { attempts })
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::{DeviceFilter, KeyboardInfo, MessageTransport, RetryPolicy};
    use crate::error::ClientError;
    use crate::framing::Message;
    use crate::protocol::Command;
    use crate::testing::FakeKeyboard;

    fn keyboard(vendor_id: u16, product_id: u16, serial: Option<&str>) -> KeyboardInfo {
        KeyboardInfo {
            vendor_id,
            product_id,
            serial_number: serial.map(str::to_string),
            product_name: "Test Board".to_string(),
            path: CString::default(),
        }
    }

    fn version_request() -> Message {
        Message::new(Command::GetProtocolVersion)
    }

    #[test]
    fn exchanges_one_frame() {
        let mut transport = MessageTransport::new(FakeKeyboard::new(), RetryPolicy::default());
        let reply = transport.send(&version_request()).expect("exchange should succeed");

        assert_eq!(reply.command_id(), 0x01);
        assert_eq!(reply.u16_at(1), 0x0009);
        assert_eq!(transport.get_mut().frames.len(), 1);
    }

    #[test]
    fn exhausts_attempts_when_writes_fail() {
        let mut device = FakeKeyboard::new();
        device.fail_writes = usize::MAX;
        let mut transport = MessageTransport::new(device, RetryPolicy::new(5));

        let err = transport.send(&version_request()).unwrap_err();

        assert!(matches!(err, ClientError::ReadWrite { attempts: 5 }));
        assert_eq!(transport.get_mut().write_attempts, 5);
    }

    #[test]
    fn retries_short_reads_with_original_request() {
        let mut device = FakeKeyboard::new();
        device.short_reads = 2;
        let mut transport = MessageTransport::new(device, RetryPolicy::new(3));

        let reply = transport.send(&version_request()).expect("third attempt should succeed");

        assert_eq!(reply.u16_at(1), 0x0009);
        let device = transport.into_inner();
        assert_eq!(device.frames.len(), 3);
        assert!(device.frames.iter().all(|frame| *frame == version_request()));
    }

    #[test]
    fn unhandled_reply_is_not_retried() {
        let mut device = FakeKeyboard::new();
        device.unhandled.push(0x0A);
        let mut transport = MessageTransport::new(device, RetryPolicy::new(20));

        let err = transport
            .send(&Message::new(Command::EepromReset))
            .unwrap_err();

        assert!(matches!(err, ClientError::UnknownCommand { command: 0x0A }));
        assert_eq!(transport.get_mut().frames.len(), 1);
    }

    #[test]
    fn rejects_wrong_frame_length_without_io() {
        let mut transport = MessageTransport::new(FakeKeyboard::new(), RetryPolicy::default());
        let err = transport.exchange(&[0x01; 16], 20).unwrap_err();

        assert!(matches!(err, ClientError::BadMessageSize(16)));
        assert_eq!(transport.get_mut().write_attempts, 0);
    }

    #[test]
    fn zero_attempts_fail_immediately() {
        let mut transport = MessageTransport::new(FakeKeyboard::new(), RetryPolicy::new(0));
        let err = transport.send(&version_request()).unwrap_err();
        assert!(matches!(err, ClientError::ReadWrite { attempts: 0 }));
    }

    #[test]
    fn filter_matches_ids_and_serial() {
        let board = keyboard(0x3434, 0x0120, Some("ABC"));

        assert!(DeviceFilter::default().matches(&board));
        assert!(DeviceFilter::new(0x3434, 0x0120).matches(&board));
        assert!(!DeviceFilter::new(0x3434, 0x0121).matches(&board));
        assert!(DeviceFilter::default().with_serial("ABC").matches(&board));
        assert!(!DeviceFilter::default().with_serial("XYZ").matches(&board));
        assert!(
            !DeviceFilter::default()
                .with_serial("ABC")
                .matches(&keyboard(0x3434, 0x0120, None))
        );
    }
}
