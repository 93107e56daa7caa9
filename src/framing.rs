//! Fixed-size VIA report frames.

use crate::error::ClientError;
use crate::protocol::Command;

/// Every VIA report, request or reply, is exactly this long.
pub const MESSAGE_SIZE: usize = 32;

/// Command, offset-high, offset-low, size.
pub const BUFFER_HEADER_SIZE: usize = 4;

/// Largest macro/keymap chunk carried by one report.
pub const MAX_BUFFER_CHUNK: usize = MESSAGE_SIZE - BUFFER_HEADER_SIZE;

/// One 32-byte report. Byte 0 is the command identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message([u8; MESSAGE_SIZE]);

impl Message {
    pub fn new(command: Command) -> Self {
        let mut bytes = [0; MESSAGE_SIZE];
        bytes[0] = command.into();
        Self(bytes)
    }

    /// Builds a frame from a command followed by `args`.
    ///
    /// Fails with [`ClientError::BadMessageSize`] if the arguments do not fit.
    pub fn with_args(command: Command, args: &[u8]) -> Result<Self, ClientError> {
        if args.len() > MESSAGE_SIZE - 1 {
            return Err(ClientError::BadMessageSize(args.len() + 1));
        }

        let mut message = Self::new(command);
        message.0[1..=args.len()].copy_from_slice(args);
        Ok(message)
    }

    /// Buffer chunk request: command, big-endian offset, size, then `data`.
    pub fn with_buffer_header(
        command: Command,
        offset: u16,
        size: usize,
        data: &[u8],
    ) -> Result<Self, ClientError> {
        if size == 0 || size > MAX_BUFFER_CHUNK || data.len() > MAX_BUFFER_CHUNK {
            return Err(ClientError::BadBufferSize(size));
        }

        let [hi, lo] = offset.to_be_bytes();
        let mut message = Self::new(command);
        message.0[1] = hi;
        message.0[2] = lo;
        message.0[3] = size as u8;
        message.0[BUFFER_HEADER_SIZE..BUFFER_HEADER_SIZE + data.len()].copy_from_slice(data);
        Ok(message)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ClientError> {
        let bytes: [u8; MESSAGE_SIZE] = bytes
            .try_into()
            .map_err(|_| ClientError::BadMessageSize(bytes.len()))?;
        Ok(Self(bytes))
    }

    pub fn command_id(&self) -> u8 {
        self.0[0]
    }

    pub fn as_bytes(&self) -> &[u8; MESSAGE_SIZE] {
        &self.0
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8; MESSAGE_SIZE] {
        &mut self.0
    }

    /// # Panics
    ///
    /// Panics if `index` is not below [`MESSAGE_SIZE`]. The same holds for
    /// every byte read by [`u16_at`](Self::u16_at), [`u32_at`](Self::u32_at)
    /// and for the start of [`tail`](Self::tail).
    pub fn byte(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Big-endian `u16` at `index..index + 2`.
    ///
    /// # Panics
    ///
    /// Panics if `index + 2 > MESSAGE_SIZE`.
    pub fn u16_at(&self, index: usize) -> u16 {
        u16::from_be_bytes([self.0[index], self.0[index + 1]])
    }

    /// Big-endian `u32` at `index..index + 4`.
    ///
    /// # Panics
    ///
    /// Panics if `index + 4 > MESSAGE_SIZE`.
    pub fn u32_at(&self, index: usize) -> u32 {
        u32::from_be_bytes([
            self.0[index],
            self.0[index + 1],
            self.0[index + 2],
            self.0[index + 3],
        ])
    }

    /// Bytes from `start` to the end of the frame.
    ///
    /// # Panics
    ///
    /// Panics if `start > MESSAGE_SIZE`.
    pub fn tail(&self, start: usize) -> &[u8] {
        &self.0[start..]
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
