//! In-memory VIA firmware used by the unit tests.

use std::collections::HashMap;
use std::ffi::CString;
use std::io::{Read, Write};
use std::time::Duration;

use crate::error::ClientError;
use crate::framing::{BUFFER_HEADER_SIZE, MESSAGE_SIZE, Message};
use crate::protocol::{Command, KeyboardValue, UNHANDLED_COMMAND, VIA_PROTOCOL_VERSION};
use crate::transport::{Discovery, KeyboardInfo};

#[derive(Debug, Clone)]
pub(crate) struct FakeKeyboard {
    pub protocol_version: u16,
    pub keyboard_values: HashMap<u8, Vec<u8>>,
    pub keymap: HashMap<(u8, u8, u8), u16>,
    pub layer_count: u8,
    pub lighting: HashMap<u8, Vec<u8>>,
    pub macro_count: u8,
    pub macro_buffer: Vec<u8>,
    pub keymap_buffer: Vec<u8>,
    /// Commands answered with the unhandled marker.
    pub unhandled: Vec<u8>,
    /// Writes that succeed before `fail_writes` takes effect.
    pub writes_before_failure: usize,
    /// Upcoming writes that fail with an I/O error.
    pub fail_writes: usize,
    /// Upcoming reads that return nothing.
    pub short_reads: usize,
    /// Every frame that was written successfully.
    pub frames: Vec<Message>,
    pub write_attempts: usize,
    pending: Option<[u8; MESSAGE_SIZE]>,
}

impl FakeKeyboard {
    pub fn new() -> Self {
        Self {
            protocol_version: VIA_PROTOCOL_VERSION,
            keyboard_values: HashMap::new(),
            keymap: HashMap::new(),
            layer_count: 4,
            lighting: HashMap::new(),
            macro_count: 16,
            macro_buffer: vec![0; 64],
            keymap_buffer: vec![0; 96],
            unhandled: Vec::new(),
            writes_before_failure: 0,
            fail_writes: 0,
            short_reads: 0,
            frames: Vec::new(),
            write_attempts: 0,
            pending: None,
        }
    }

    pub fn with_macro_buffer(size: usize) -> Self {
        Self {
            macro_buffer: vec![0; size],
            ..Self::new()
        }
    }

    pub fn set_keyboard_value(&mut self, id: KeyboardValue, data: &[u8]) {
        self.keyboard_values.insert(id.into(), data.to_vec());
    }

    /// Frames sent with `command`, in order.
    pub fn frames_for(&self, command: Command) -> Vec<Message> {
        let id = u8::from(command);
        self.frames
            .iter()
            .filter(|frame| frame.command_id() == id)
            .copied()
            .collect()
    }

    fn respond(&mut self, request: &[u8; MESSAGE_SIZE]) -> [u8; MESSAGE_SIZE] {
        let mut reply = *request;
        if self.unhandled.contains(&request[0]) {
            reply[0] = UNHANDLED_COMMAND;
            return reply;
        }

        let Ok(command) = Command::try_from(request[0]) else {
            reply[0] = UNHANDLED_COMMAND;
            return reply;
        };

        match command {
            Command::GetProtocolVersion => {
                reply[1..3].copy_from_slice(&self.protocol_version.to_be_bytes());
            }
            Command::GetKeyboardValue => {
                let value = self.keyboard_values.get(&request[1]).cloned().unwrap_or_default();
                fill(&mut reply[2..], &value);
            }
            Command::SetKeyboardValue => {
                self.keyboard_values.insert(request[1], request[2..].to_vec());
            }
            Command::DynamicKeymapGetKeycode => {
                let key = (request[1], request[2], request[3]);
                let code = self.keymap.get(&key).copied().unwrap_or_default();
                reply[4..6].copy_from_slice(&code.to_be_bytes());
            }
            Command::DynamicKeymapSetKeycode => {
                let key = (request[1], request[2], request[3]);
                self.keymap
                    .insert(key, u16::from_be_bytes([request[4], request[5]]));
            }
            Command::DynamicKeymapReset => self.keymap.clear(),
            Command::LightingSetValue => {
                self.lighting.insert(request[1], request[2..].to_vec());
            }
            Command::LightingGetValue => {
                let value = self.lighting.get(&request[1]).cloned().unwrap_or_default();
                fill(&mut reply[2..], &value);
            }
            Command::LightingSave | Command::EepromReset | Command::BootloaderJump => {}
            Command::DynamicKeymapMacroGetCount => reply[1] = self.macro_count,
            Command::DynamicKeymapMacroGetBufferSize => {
                let size = self.macro_buffer.len() as u16;
                reply[1..3].copy_from_slice(&size.to_be_bytes());
            }
            Command::DynamicKeymapMacroGetBuffer => read_chunk(&self.macro_buffer, &mut reply),
            Command::DynamicKeymapMacroSetBuffer => write_chunk(&mut self.macro_buffer, request),
            Command::DynamicKeymapMacroReset => self.macro_buffer.fill(0),
            Command::DynamicKeymapGetLayerCount => reply[1] = self.layer_count,
            Command::DynamicKeymapGetBuffer => read_chunk(&self.keymap_buffer, &mut reply),
            Command::DynamicKeymapSetBuffer => write_chunk(&mut self.keymap_buffer, request),
        }

        reply
    }
}

fn fill(target: &mut [u8], value: &[u8]) {
    let len = value.len().min(target.len());
    target[..len].copy_from_slice(&value[..len]);
}

fn chunk_header(frame: &[u8; MESSAGE_SIZE]) -> (usize, usize) {
    let offset = usize::from(u16::from_be_bytes([frame[1], frame[2]]));
    (offset, usize::from(frame[3]))
}

/// Bytes past the end of `buffer` read back as zero.
fn read_chunk(buffer: &[u8], reply: &mut [u8; MESSAGE_SIZE]) {
    let (offset, size) = chunk_header(reply);
    for i in 0..size {
        reply[BUFFER_HEADER_SIZE + i] = buffer.get(offset + i).copied().unwrap_or(0);
    }
}

/// Bytes past the end of `buffer` are dropped.
fn write_chunk(buffer: &mut [u8], request: &[u8; MESSAGE_SIZE]) {
    let (offset, size) = chunk_header(request);
    for i in 0..size {
        if let Some(byte) = buffer.get_mut(offset + i) {
            *byte = request[BUFFER_HEADER_SIZE + i];
        }
    }
}

impl Write for FakeKeyboard {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_attempts += 1;
        if self.writes_before_failure > 0 {
            self.writes_before_failure -= 1;
        } else if self.fail_writes > 0 {
            self.fail_writes -= 1;
            return Err(std::io::Error::other("injected write failure"));
        }

        let request: [u8; MESSAGE_SIZE] = buf
            .try_into()
            .map_err(|_| std::io::Error::other("frame must be 32 bytes"))?;
        if let Ok(frame) = Message::from_slice(&request) {
            self.frames.push(frame);
        }
        self.pending = Some(self.respond(&request));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Read for FakeKeyboard {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let Some(reply) = self.pending.take() else {
            return Ok(0);
        };
        if self.short_reads > 0 {
            self.short_reads -= 1;
            return Ok(0);
        }

        let len = reply.len().min(buf.len());
        buf[..len].copy_from_slice(&reply[..len]);
        Ok(len)
    }
}

/// Serves [`FakeKeyboard`]s as if they were attached devices.
pub(crate) struct FakeDiscovery {
    pub devices: Vec<(KeyboardInfo, FakeKeyboard)>,
    /// Upcoming `open` calls that fail.
    pub failing_opens: usize,
    pub opened: Vec<CString>,
}

impl FakeDiscovery {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            failing_opens: 0,
            opened: Vec::new(),
        }
    }

    pub fn with_device(
        mut self,
        name: &str,
        vendor_id: u16,
        product_id: u16,
        serial: Option<&str>,
        keyboard: FakeKeyboard,
    ) -> Self {
        let info = KeyboardInfo {
            vendor_id,
            product_id,
            serial_number: serial.map(str::to_string),
            product_name: name.to_string(),
            path: CString::new(format!("fake/{}", self.devices.len())).unwrap_or_default(),
        };
        self.devices.push((info, keyboard));
        self
    }
}

impl Discovery for FakeDiscovery {
    type Handle = FakeKeyboard;

    fn enumerate(&mut self) -> Result<Vec<KeyboardInfo>, ClientError> {
        let mut keyboards: Vec<KeyboardInfo> =
            self.devices.iter().map(|(info, _)| info.clone()).collect();
        keyboards.sort_by(|a, b| a.product_name.cmp(&b.product_name));
        Ok(keyboards)
    }

    fn open(
        &mut self,
        keyboard: &KeyboardInfo,
        _read_timeout: Duration,
    ) -> Result<FakeKeyboard, ClientError> {
        self.opened.push(keyboard.path.clone());
        if self.failing_opens > 0 {
            self.failing_opens -= 1;
            return Err(std::io::Error::other("device busy").into());
        }

        self.devices
            .iter()
            .find(|(info, _)| info.path == keyboard.path)
            .map(|(_, device)| device.clone())
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound).into())
    }
}
