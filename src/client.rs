use std::io::{Read, Write};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::color::Color;
use crate::effect::{BacklightEffect, RgbEffect};
use crate::error::ClientError;
use crate::framing::{MESSAGE_SIZE, Message};
use crate::keycode::Keycode;
use crate::protocol::{Command, KeyboardValue, LightingValue, VIA_PROTOCOL_VERSION};
use crate::transport::{DeviceFilter, Discovery, KeyboardInfo, MessageTransport, RetryPolicy};
use crate::value::{Brightness, Hue, Saturation, Speed};

const DEFAULT_OPEN_ATTEMPTS: usize = 20;
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(500);

/// Keyboard value payload after the command and value id bytes.
const MAX_KEYBOARD_VALUE_LEN: usize = MESSAGE_SIZE - 2;

#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub filter: DeviceFilter,
    /// How often each matching keyboard is opened before moving on.
    pub open_attempts: usize,
    pub retry: RetryPolicy,
    pub read_timeout: Duration,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            filter: DeviceFilter::default(),
            open_attempts: DEFAULT_OPEN_ATTEMPTS,
            retry: RetryPolicy::default(),
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// A session with one VIA keyboard.
///
/// Every method sends one or more frames and blocks until the replies arrive
/// or the [`RetryPolicy`] is exhausted. The macro buffer is cached per client,
/// see [`ViaClient::read_macro_buffer`].
#[derive(Debug)]
pub struct ViaClient<T> {
    transport: MessageTransport<T>,
    keyboard: Option<KeyboardInfo>,
    pub(crate) macro_cache: Option<Vec<u8>>,
}

impl<T: Read + Write> ViaClient<T> {
    pub fn new(io: T) -> Self {
        Self::with_retry(io, RetryPolicy::default())
    }

    pub fn with_retry(io: T, retry: RetryPolicy) -> Self {
        Self {
            transport: MessageTransport::new(io, retry),
            keyboard: None,
            macro_cache: None,
        }
    }

    /// Opens the first keyboard that matches `options.filter` and speaks a
    /// supported protocol version.
    ///
    /// Each candidate is opened up to `options.open_attempts` times. A
    /// keyboard that opens but reports another protocol version ends the
    /// search with [`ClientError::VersionMismatch`]. If no candidate could be
    /// opened the last open error is returned, or `ReadWrite { attempts: 0 }`
    /// when `open_attempts` is zero.
    pub fn connect<D>(discovery: &mut D, options: ConnectOptions) -> Result<Self, ClientError>
    where
        D: Discovery<Handle = T>,
    {
        let keyboards = discovery.enumerate()?;
        if keyboards.is_empty() {
            return Err(ClientError::NoKeyboardsFound);
        }

        let candidates: Vec<KeyboardInfo> = keyboards
            .into_iter()
            .filter(|keyboard| options.filter.matches(keyboard))
            .collect();
        if candidates.is_empty() {
            return Err(ClientError::NoMatchingDevice);
        }

        let mut last_error = ClientError::ReadWrite { attempts: 0 };
        for keyboard in candidates {
            for attempt in 1..=options.open_attempts {
                let handle = match discovery.open(&keyboard, options.read_timeout) {
                    Ok(handle) => handle,
                    Err(err) => {
                        debug!(product = %keyboard.product_name, attempt, error = %err, "open failed");
                        last_error = err;
                        continue;
                    }
                };

                let mut client = Self::with_retry(handle, options.retry);
                let version = client.get_protocol_version()?;
                if version != VIA_PROTOCOL_VERSION {
                    warn!(product = %keyboard.product_name, version, "unsupported VIA protocol");
                    return Err(ClientError::VersionMismatch {
                        expected: VIA_PROTOCOL_VERSION,
                        actual: version,
                    });
                }

                info!(
                    vendor_id = keyboard.vendor_id,
                    product_id = keyboard.product_id,
                    product = %keyboard.product_name,
                    version,
                    "connected to keyboard"
                );
                client.keyboard = Some(keyboard);
                return Ok(client);
            }
        }

        Err(last_error)
    }

    /// The keyboard this client was connected to, if it came from [`ViaClient::connect`].
    pub fn keyboard(&self) -> Option<&KeyboardInfo> {
        self.keyboard.as_ref()
    }

    pub fn retry(&self) -> RetryPolicy {
        self.transport.retry()
    }

    pub fn set_retry(&mut self, retry: RetryPolicy) {
        self.transport.set_retry(retry);
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.transport.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.transport.into_inner()
    }

    pub fn get_protocol_version(&mut self) -> Result<u16, ClientError> {
        let reply = self.command(Command::GetProtocolVersion, &[])?;
        Ok(reply.u16_at(1))
    }

    /// Milliseconds since the keyboard booted.
    pub fn get_uptime(&mut self) -> Result<u32, ClientError> {
        let reply = self.get_keyboard_value(KeyboardValue::Uptime)?;
        Ok(reply.u32_at(2))
    }

    pub fn get_layout_options(&mut self) -> Result<u32, ClientError> {
        let reply = self.get_keyboard_value(KeyboardValue::LayoutOptions)?;
        Ok(reply.u32_at(2))
    }

    pub fn set_layout_options(&mut self, options: u32) -> Result<(), ClientError> {
        self.set_keyboard_value(KeyboardValue::LayoutOptions.into(), &options.to_be_bytes())
    }

    /// Raw switch matrix bitmap as reported by the firmware.
    pub fn get_switch_matrix_state(&mut self) -> Result<Vec<u8>, ClientError> {
        let reply = self.get_keyboard_value(KeyboardValue::SwitchMatrixState)?;
        Ok(reply.tail(2).to_vec())
    }

    /// Reads a keyboard value by id, including ids this crate has no name for.
    pub fn get_raw_keyboard_value(&mut self, id: u8) -> Result<Vec<u8>, ClientError> {
        let reply = self.command(Command::GetKeyboardValue, &[id])?;
        Ok(reply.tail(2).to_vec())
    }

    pub fn set_raw_keyboard_value(&mut self, id: u8, data: &[u8]) -> Result<(), ClientError> {
        self.set_keyboard_value(id, data)
    }

    pub fn get_keycode(&mut self, layer: u8, row: u8, col: u8) -> Result<Keycode, ClientError> {
        let reply = self.command(Command::DynamicKeymapGetKeycode, &[layer, row, col])?;
        Ok(Keycode::from_bytes(reply.byte(4), reply.byte(5)))
    }

    pub fn set_keycode(
        &mut self,
        layer: u8,
        row: u8,
        col: u8,
        keycode: Keycode,
    ) -> Result<(), ClientError> {
        let [msb, lsb] = keycode.to_bytes();
        self.command(Command::DynamicKeymapSetKeycode, &[layer, row, col, msb, lsb])?;
        Ok(())
    }

    /// Restores the firmware's default keymap on every layer.
    pub fn reset_keymap(&mut self) -> Result<(), ClientError> {
        self.command(Command::DynamicKeymapReset, &[])?;
        Ok(())
    }

    pub fn get_layer_count(&mut self) -> Result<u8, ClientError> {
        let reply = self.command(Command::DynamicKeymapGetLayerCount, &[])?;
        Ok(reply.byte(1))
    }

    pub fn get_backlight_brightness(&mut self) -> Result<Brightness, ClientError> {
        let reply = self.get_lighting_value(LightingValue::BacklightBrightness)?;
        Ok(Brightness::from_byte(reply.byte(2)))
    }

    pub fn set_backlight_brightness(&mut self, brightness: Brightness) -> Result<(), ClientError> {
        self.set_lighting_value(LightingValue::BacklightBrightness, &[brightness.to_byte()])
    }

    pub fn get_backlight_effect(&mut self) -> Result<BacklightEffect, ClientError> {
        let reply = self.get_lighting_value(LightingValue::BacklightEffect)?;
        Ok(BacklightEffect::from_byte(reply.byte(2)))
    }

    pub fn set_backlight_effect(&mut self, effect: BacklightEffect) -> Result<(), ClientError> {
        self.set_lighting_value(LightingValue::BacklightEffect, &[effect.to_byte()])
    }

    pub fn get_rgblight_brightness(&mut self) -> Result<Brightness, ClientError> {
        let reply = self.get_lighting_value(LightingValue::RgblightBrightness)?;
        Ok(Brightness::from_byte(reply.byte(2)))
    }

    pub fn set_rgblight_brightness(&mut self, brightness: Brightness) -> Result<(), ClientError> {
        self.set_lighting_value(LightingValue::RgblightBrightness, &[brightness.to_byte()])
    }

    pub fn get_rgblight_effect(&mut self) -> Result<RgbEffect, ClientError> {
        let reply = self.get_lighting_value(LightingValue::RgblightEffect)?;
        Ok(RgbEffect::from_byte(reply.byte(2)))
    }

    /// Sets the RGB effect.
    ///
    /// The frame is sent twice: keyboards coming out of "all off" only switch
    /// to solid color on the first one.
    pub fn set_rgblight_effect(&mut self, effect: RgbEffect) -> Result<(), ClientError> {
        self.set_lighting_value(LightingValue::RgblightEffect, &[effect.to_byte()])?;
        self.set_lighting_value(LightingValue::RgblightEffect, &[effect.to_byte()])
    }

    pub fn get_rgblight_effect_speed(&mut self) -> Result<Speed, ClientError> {
        let reply = self.get_lighting_value(LightingValue::RgblightEffectSpeed)?;
        Ok(Speed::from_byte(reply.byte(2)))
    }

    pub fn set_rgblight_effect_speed(&mut self, speed: Speed) -> Result<(), ClientError> {
        self.set_lighting_value(LightingValue::RgblightEffectSpeed, &[speed.to_byte()])
    }

    /// Hue and saturation come from the color value, brightness from its own query.
    pub fn get_rgblight_color(&mut self) -> Result<Color, ClientError> {
        let reply = self.get_lighting_value(LightingValue::RgblightColor)?;
        let hue = Hue::from_byte(reply.byte(2));
        let saturation = Saturation::from_byte(reply.byte(3));
        let brightness = self.get_rgblight_brightness()?;

        Ok(Color {
            hue,
            saturation,
            brightness,
        })
    }

    /// Sets hue and saturation, then brightness when `set_brightness` is true.
    pub fn set_rgblight_color(
        &mut self,
        color: Color,
        set_brightness: bool,
    ) -> Result<(), ClientError> {
        self.set_lighting_value(
            LightingValue::RgblightColor,
            &[color.hue.to_byte(), color.saturation.to_byte()],
        )?;

        if set_brightness {
            self.set_rgblight_brightness(color.brightness)?;
        }
        Ok(())
    }

    /// Persists the current lighting settings to EEPROM.
    pub fn save_lighting(&mut self) -> Result<(), ClientError> {
        self.command(Command::LightingSave, &[])?;
        Ok(())
    }

    pub fn reset_eeprom(&mut self) -> Result<(), ClientError> {
        self.command(Command::EepromReset, &[])?;
        Ok(())
    }

    /// Reboots the keyboard into its bootloader. The session is unusable afterwards.
    pub fn jump_to_bootloader(&mut self) -> Result<(), ClientError> {
        self.command(Command::BootloaderJump, &[])?;
        Ok(())
    }

    /// Number of macro slots the firmware reserves.
    pub fn get_macro_count(&mut self) -> Result<u8, ClientError> {
        let reply = self.command(Command::DynamicKeymapMacroGetCount, &[])?;
        Ok(reply.byte(1))
    }

    /// Logical size of the macro buffer in bytes.
    pub fn get_macro_buffer_size(&mut self) -> Result<u16, ClientError> {
        let reply = self.command(Command::DynamicKeymapMacroGetBufferSize, &[])?;
        Ok(reply.u16_at(1))
    }

    pub fn get_macro_buffer_chunk(
        &mut self,
        offset: u16,
        size: usize,
    ) -> Result<Vec<u8>, ClientError> {
        self.get_buffer_chunk(Command::DynamicKeymapMacroGetBuffer, offset, size)
    }

    pub fn set_macro_buffer_chunk(&mut self, offset: u16, data: &[u8]) -> Result<(), ClientError> {
        self.set_buffer_chunk(Command::DynamicKeymapMacroSetBuffer, offset, data)
    }

    /// Clears every macro on the keyboard.
    pub fn reset_macros(&mut self) -> Result<(), ClientError> {
        self.invalidate_macro_cache();
        self.command(Command::DynamicKeymapMacroReset, &[])?;
        Ok(())
    }

    pub fn get_keymap_buffer_chunk(
        &mut self,
        offset: u16,
        size: usize,
    ) -> Result<Vec<u8>, ClientError> {
        self.get_buffer_chunk(Command::DynamicKeymapGetBuffer, offset, size)
    }

    pub fn set_keymap_buffer_chunk(
        &mut self,
        offset: u16,
        data: &[u8],
    ) -> Result<(), ClientError> {
        self.set_buffer_chunk(Command::DynamicKeymapSetBuffer, offset, data)
    }

    fn command(&mut self, command: Command, args: &[u8]) -> Result<Message, ClientError> {
        let request = Message::with_args(command, args)?;
        self.transport.send(&request)
    }

    fn get_keyboard_value(&mut self, id: KeyboardValue) -> Result<Message, ClientError> {
        self.command(Command::GetKeyboardValue, &[id.into()])
    }

    fn set_keyboard_value(&mut self, id: u8, data: &[u8]) -> Result<(), ClientError> {
        if data.len() > MAX_KEYBOARD_VALUE_LEN {
            return Err(ClientError::PayloadTooLong {
                len: data.len(),
                max: MAX_KEYBOARD_VALUE_LEN,
            });
        }

        let mut args = Vec::with_capacity(data.len() + 1);
        args.push(id);
        args.extend_from_slice(data);
        self.command(Command::SetKeyboardValue, &args)?;
        Ok(())
    }

    fn get_lighting_value(&mut self, id: LightingValue) -> Result<Message, ClientError> {
        self.command(Command::LightingGetValue, &[id.into()])
    }

    fn set_lighting_value(&mut self, id: LightingValue, data: &[u8]) -> Result<(), ClientError> {
        let mut args = Vec::with_capacity(data.len() + 1);
        args.push(id.into());
        args.extend_from_slice(data);
        self.command(Command::LightingSetValue, &args)?;
        Ok(())
    }

    fn get_buffer_chunk(
        &mut self,
        command: Command,
        offset: u16,
        size: usize,
    ) -> Result<Vec<u8>, ClientError> {
        let request = Message::with_buffer_header(command, offset, size, &[])?;
        let reply = self.transport.send(&request)?;
        Ok(reply.tail(4)[..size].to_vec())
    }

    fn set_buffer_chunk(
        &mut self,
        command: Command,
        offset: u16,
        data: &[u8],
    ) -> Result<(), ClientError> {
        let request = Message::with_buffer_header(command, offset, data.len(), data)?;
        self.transport.send(&request)?;
        Ok(())
    }
}

#[cfg(feature = "hid")]
impl ViaClient<crate::transport::hid::HidHandle> {
    /// Connects to a keyboard over raw HID.
    pub fn connect_hid(options: ConnectOptions) -> Result<Self, ClientError> {
        let mut discovery = crate::transport::hid::HidDiscovery::new()?;
        Self::connect(&mut discovery, options)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectOptions, ViaClient};
    use crate::color::Color;
    use crate::effect::{BacklightEffect, RgbEffect};
    use crate::error::ClientError;
    use crate::keycode::keycodes::{KC_A, KC_ESCAPE, KC_NO};
    use crate::protocol::{Command, KeyboardValue};
    use crate::testing::{FakeDiscovery, FakeKeyboard};
    use crate::transport::{DeviceFilter, RetryPolicy};
    use crate::value::{Brightness, Hue, Saturation, Speed};

    fn options(filter: DeviceFilter) -> ConnectOptions {
        ConnectOptions {
            filter,
            ..ConnectOptions::default()
        }
    }

    #[test]
    fn reads_keyboard_values() {
        let mut keyboard = FakeKeyboard::new();
        keyboard.set_keyboard_value(KeyboardValue::Uptime, &[0x00, 0x01, 0x02, 0x03]);
        keyboard.set_keyboard_value(KeyboardValue::SwitchMatrixState, &[0b0000_0101, 0x80]);
        let mut client = ViaClient::new(keyboard);

        assert_eq!(client.get_protocol_version().unwrap(), 0x0009);
        assert_eq!(client.get_uptime().unwrap(), 0x0001_0203);

        let matrix = client.get_switch_matrix_state().unwrap();
        assert_eq!(matrix.len(), 30);
        assert_eq!(&matrix[..3], &[0b0000_0101, 0x80, 0]);
    }

    #[test]
    fn layout_options_use_set_command() {
        let mut client = ViaClient::new(FakeKeyboard::new());
        client.set_layout_options(0xDEAD_BEEF).unwrap();

        assert_eq!(client.get_layout_options().unwrap(), 0xDEAD_BEEF);

        let keyboard = client.into_inner();
        let sets = keyboard.frames_for(Command::SetKeyboardValue);
        assert_eq!(sets.len(), 1);
        assert_eq!(&sets[0].as_bytes()[..6], &[0x03, 0x02, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn raw_keyboard_values_are_bounded() {
        let mut client = ViaClient::new(FakeKeyboard::new());
        client.set_raw_keyboard_value(0x42, &[1, 2, 3]).unwrap();
        assert_eq!(&client.get_raw_keyboard_value(0x42).unwrap()[..4], &[1, 2, 3, 0]);

        let err = client.set_raw_keyboard_value(0x42, &[0; 31]).unwrap_err();
        assert!(matches!(err, ClientError::PayloadTooLong { len: 31, max: 30 }));
    }

    #[test]
    fn keycodes_round_trip() {
        let mut client = ViaClient::new(FakeKeyboard::new());

        assert_eq!(client.get_keycode(1, 2, 3).unwrap(), KC_NO);
        client.set_keycode(1, 2, 3, KC_ESCAPE).unwrap();
        client.set_keycode(0, 0, 0, KC_A).unwrap();
        assert_eq!(client.get_keycode(1, 2, 3).unwrap(), KC_ESCAPE);
        assert_eq!(client.get_layer_count().unwrap(), 4);

        client.reset_keymap().unwrap();
        assert_eq!(client.get_keycode(0, 0, 0).unwrap(), KC_NO);
    }

    #[test]
    fn rgb_effect_is_sent_twice() {
        let mut keyboard = FakeKeyboard::new();
        let mut client = ViaClient::new(&mut keyboard);
        client.set_rgblight_effect(RgbEffect::RainbowSwirl3).unwrap();
        assert_eq!(client.get_rgblight_effect().unwrap(), RgbEffect::RainbowSwirl3);

        let sets = keyboard.frames_for(Command::LightingSetValue);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0], sets[1]);
        assert_eq!(&sets[0].as_bytes()[..3], &[0x07, 0x81, 11]);
    }

    #[test]
    fn rgb_color_is_two_writes() {
        let mut keyboard = FakeKeyboard::new();
        let mut client = ViaClient::new(&mut keyboard);
        client.set_rgblight_color(Color::CYAN, true).unwrap();

        assert_eq!(client.get_rgblight_color().unwrap(), Color::CYAN);

        let sets = keyboard.frames_for(Command::LightingSetValue);
        assert_eq!(sets.len(), 2);
        assert_eq!(&sets[0].as_bytes()[..4], &[0x07, 0x83, 128, 255]);
        assert_eq!(&sets[1].as_bytes()[..3], &[0x07, 0x80, 255]);
    }

    #[test]
    fn rgb_color_can_keep_brightness() {
        let mut keyboard = FakeKeyboard::new();
        let mut client = ViaClient::new(&mut keyboard);
        client.set_rgblight_brightness(Brightness(50)).unwrap();
        client.set_rgblight_color(Color::RED, false).unwrap();

        let color = client.get_rgblight_color().unwrap();
        assert_eq!(color.hue, Hue(0));
        assert_eq!(color.saturation, Saturation(100));
        assert_eq!(color.brightness, Brightness(50));
        assert_eq!(keyboard.frames_for(Command::LightingSetValue).len(), 2);
    }

    #[test]
    fn lighting_values_round_trip() {
        let mut client = ViaClient::new(FakeKeyboard::new());

        client.set_backlight_brightness(Brightness(100)).unwrap();
        client.set_backlight_effect(BacklightEffect::BreathingOn).unwrap();
        client.set_rgblight_effect_speed(Speed(50)).unwrap();

        assert_eq!(client.get_backlight_brightness().unwrap(), Brightness(100));
        assert_eq!(client.get_backlight_effect().unwrap(), BacklightEffect::BreathingOn);
        assert_eq!(client.get_rgblight_effect_speed().unwrap(), Speed(50));
    }

    #[test]
    fn fire_and_forget_commands_send_one_frame() {
        let mut keyboard = FakeKeyboard::new();
        let mut client = ViaClient::new(&mut keyboard);
        client.save_lighting().unwrap();
        client.reset_eeprom().unwrap();
        client.jump_to_bootloader().unwrap();

        let ids: Vec<u8> = keyboard.frames.iter().map(|f| f.command_id()).collect();
        assert_eq!(ids, vec![0x09, 0x0A, 0x0B]);
    }

    #[test]
    fn rejected_command_surfaces_unknown_command() {
        let mut keyboard = FakeKeyboard::new();
        keyboard.unhandled.push(0x09);
        let mut client = ViaClient::new(keyboard);

        let err = client.save_lighting().unwrap_err();
        assert!(matches!(err, ClientError::UnknownCommand { command: 0x09 }));
    }

    #[test]
    fn keymap_buffer_chunks() {
        let mut client = ViaClient::new(FakeKeyboard::new());
        client.set_keymap_buffer_chunk(2, &[0x00, 0x29, 0x00, 0x04]).unwrap();

        assert_eq!(client.get_keymap_buffer_chunk(0, 6).unwrap(), vec![0, 0, 0, 0x29, 0, 4]);
        assert!(matches!(
            client.get_keymap_buffer_chunk(0, 29),
            Err(ClientError::BadBufferSize(29))
        ));
        assert!(matches!(
            client.set_keymap_buffer_chunk(0, &[]),
            Err(ClientError::BadBufferSize(0))
        ));
    }

    #[test]
    fn connect_picks_first_matching_keyboard() {
        let mut discovery = FakeDiscovery::new()
            .with_device("Zeta", 0x3434, 0x0001, Some("Z1"), FakeKeyboard::new())
            .with_device("Alpha", 0x3434, 0x0002, Some("A1"), FakeKeyboard::new());

        let client = ViaClient::connect(&mut discovery, ConnectOptions::default()).unwrap();
        assert_eq!(client.keyboard().unwrap().product_name, "Alpha");

        let client = ViaClient::connect(
            &mut discovery,
            options(DeviceFilter::default().with_serial("Z1")),
        )
        .unwrap();
        assert_eq!(client.keyboard().unwrap().product_id, 0x0001);
    }

    #[test]
    fn connect_distinguishes_empty_and_unmatched() {
        let mut empty = FakeDiscovery::new();
        assert!(matches!(
            ViaClient::connect(&mut empty, ConnectOptions::default()),
            Err(ClientError::NoKeyboardsFound)
        ));

        let mut discovery =
            FakeDiscovery::new().with_device("Board", 0x3434, 0x0001, None, FakeKeyboard::new());
        assert!(matches!(
            ViaClient::connect(&mut discovery, options(DeviceFilter::new(0xFEED, 0x0001))),
            Err(ClientError::NoMatchingDevice)
        ));
    }

    #[test]
    fn connect_rejects_other_protocol_versions() {
        let mut old = FakeKeyboard::new();
        old.protocol_version = 0x0008;
        let mut discovery = FakeDiscovery::new()
            .with_device("A Old", 0x3434, 0x0001, None, old)
            .with_device("B New", 0x3434, 0x0002, None, FakeKeyboard::new());

        let err = ViaClient::connect(&mut discovery, ConnectOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ClientError::VersionMismatch {
                expected: 0x0009,
                actual: 0x0008
            }
        ));
        assert_eq!(discovery.opened.len(), 1);
    }

    #[test]
    fn connect_retries_open() {
        let mut discovery =
            FakeDiscovery::new().with_device("Board", 0x3434, 0x0001, None, FakeKeyboard::new());
        discovery.failing_opens = 3;

        let client = ViaClient::connect(&mut discovery, ConnectOptions::default()).unwrap();
        assert!(client.keyboard().is_some());
        assert_eq!(discovery.opened.len(), 4);
    }

    #[test]
    fn connect_returns_last_open_error() {
        let mut discovery = FakeDiscovery::new()
            .with_device("A", 0x3434, 0x0001, None, FakeKeyboard::new())
            .with_device("B", 0x3434, 0x0002, None, FakeKeyboard::new());
        discovery.failing_opens = usize::MAX;

        let err = ViaClient::connect(
            &mut discovery,
            ConnectOptions {
                open_attempts: 2,
                retry: RetryPolicy::new(1),
                ..ConnectOptions::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, ClientError::Io(_)));
        assert_eq!(discovery.opened.len(), 4);
    }

    #[test]
    fn connect_without_open_attempts_does_not_report_unmatched() {
        let mut discovery =
            FakeDiscovery::new().with_device("Board", 0x3434, 0x0001, None, FakeKeyboard::new());

        let err = ViaClient::connect(
            &mut discovery,
            ConnectOptions {
                open_attempts: 0,
                ..ConnectOptions::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, ClientError::ReadWrite { attempts: 0 }));
        assert!(discovery.opened.is_empty());
    }
}
