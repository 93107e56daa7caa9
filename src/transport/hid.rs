//! Raw HID access through `hidapi`.

use std::io::{Read, Write};
use std::time::Duration;

use hidapi::{HidApi, HidDevice};
use tracing::debug;

use super::{Discovery, KeyboardInfo};
use crate::error::ClientError;
use crate::protocol::{VIA_USAGE, VIA_USAGE_PAGE};

/// Report ID prepended to every output report. VIA interfaces do not use numbered reports.
const REPORT_ID: u8 = 0x00;

fn is_via_interface(device_info: &hidapi::DeviceInfo) -> bool {
    device_info.usage_page() == VIA_USAGE_PAGE && device_info.usage() == VIA_USAGE
}

/// An open VIA interface.
pub struct HidHandle {
    device: HidDevice,
    read_timeout_ms: i32,
}

impl HidHandle {
    pub fn new(device: HidDevice, read_timeout: Duration) -> Self {
        let read_timeout_ms = i32::try_from(read_timeout.as_millis()).unwrap_or(i32::MAX);
        Self {
            device,
            read_timeout_ms,
        }
    }
}

impl Read for HidHandle {
    /// Returns 0 when no report arrived within the read timeout.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.device
            .read_timeout(buf, self.read_timeout_ms)
            .map_err(std::io::Error::other)
    }
}

impl Write for HidHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut report = Vec::with_capacity(buf.len() + 1);
        report.push(REPORT_ID);
        report.extend_from_slice(buf);

        let written = self.device.write(&report).map_err(std::io::Error::other)?;
        // Some platforms report the full padded report length.
        Ok(written.saturating_sub(1).min(buf.len()))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Finds VIA keyboards among the attached HID devices.
pub struct HidDiscovery {
    api: HidApi,
}

impl HidDiscovery {
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self {
            api: HidApi::new()?,
        })
    }
}

impl Discovery for HidDiscovery {
    type Handle = HidHandle;

    fn enumerate(&mut self) -> Result<Vec<KeyboardInfo>, ClientError> {
        self.api.refresh_devices()?;

        let mut keyboards: Vec<KeyboardInfo> = self
            .api
            .device_list()
            .filter(|d| is_via_interface(d))
            .map(|d| KeyboardInfo {
                vendor_id: d.vendor_id(),
                product_id: d.product_id(),
                serial_number: d.serial_number().map(str::to_string),
                product_name: d.product_string().unwrap_or_default().to_string(),
                path: d.path().to_owned(),
            })
            .collect();
        keyboards.sort_by(|a, b| a.product_name.cmp(&b.product_name));

        debug!(count = keyboards.len(), "enumerated VIA interfaces");
        Ok(keyboards)
    }

    fn open(
        &mut self,
        keyboard: &KeyboardInfo,
        read_timeout: Duration,
    ) -> Result<HidHandle, ClientError> {
        let device = self.api.open_path(&keyboard.path)?;
        Ok(HidHandle::new(device, read_timeout))
    }
}
