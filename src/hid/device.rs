//! HID device discovery and the write path to the controller

use std::ffi::CString;

use anyhow::{Context, Result};
use hidapi::{HidApi, HidDevice};
use tracing::{debug, info};

use super::protocol::Signal;

/// Identifying constants for the controller's Raw HID interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    /// USB Vendor ID
    pub vendor_id: u16,
    /// USB Product ID
    pub product_id: u16,
    /// HID Usage Page
    pub usage_page: u16,
    /// HID Usage ID
    pub usage_id: u16,
}

impl Default for DeviceDescriptor {
    fn default() -> Self {
        Self {
            vendor_id: 0x594D,
            product_id: 0x4409,
            usage_page: 0xFF60,
            usage_id: 0x61,
        }
    }
}

impl DeviceDescriptor {
    /// Whether an enumerated interface matches this descriptor
    pub fn matches(&self, info: &InterfaceInfo) -> bool {
        info.vendor_id == self.vendor_id
            && info.product_id == self.product_id
            && info.usage_page == self.usage_page
            && info.usage_id == self.usage_id
    }
}

/// Identifying fields of one enumerated HID interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub usage_page: u16,
    pub usage_id: u16,
    /// Platform device path, used to open the interface
    pub path: CString,
}

/// Pick the interface to open among the enumerated candidates.
///
/// When several interfaces match the descriptor, the last one in
/// enumeration order wins.
pub fn select_interface(
    descriptor: &DeviceDescriptor,
    interfaces: impl IntoIterator<Item = InterfaceInfo>,
) -> Option<InterfaceInfo> {
    interfaces
        .into_iter()
        .filter(|info| descriptor.matches(info))
        .last()
}

/// An opened, writable handle to the controller
///
/// Created once at startup and held for the process lifetime; there is no
/// reconnect path.
pub struct IndicatorDevice {
    device: HidDevice,
}

impl IndicatorDevice {
    /// Write a signal report to the device
    ///
    /// Fire-and-forget: nothing is read back and there is no retry.
    pub fn send(&self, signal: Signal) -> Result<()> {
        let report = signal.report();
        let written = self
            .device
            .write(&report)
            .context("Failed to write signal report")?;
        debug!(written, ?signal, "Wrote signal report");
        Ok(())
    }
}

/// Find and open the controller's Raw HID interface.
///
/// Runs once at startup. Returns `Ok(None)` when no interface matches; a
/// matching interface that cannot be opened is an error.
pub fn locate(api: &HidApi, descriptor: &DeviceDescriptor) -> Result<Option<IndicatorDevice>> {
    let candidates = api.device_list().map(|d| InterfaceInfo {
        vendor_id: d.vendor_id(),
        product_id: d.product_id(),
        usage_page: d.usage_page(),
        usage_id: d.usage(),
        path: d.path().to_owned(),
    });

    let Some(selected) = select_interface(descriptor, candidates) else {
        info!(
            "No controller plugged in (VID 0x{:04X}, PID 0x{:04X}, Usage 0x{:04X}/0x{:02X})",
            descriptor.vendor_id, descriptor.product_id, descriptor.usage_page, descriptor.usage_id
        );
        return Ok(None);
    };

    info!(path = %selected.path.to_string_lossy(), "Controller found");

    let device = api
        .open_path(&selected.path)
        .context("Failed to open HID device")?;

    Ok(Some(IndicatorDevice { device }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iface(usage_page: u16, path: &str) -> InterfaceInfo {
        let descriptor = DeviceDescriptor::default();
        InterfaceInfo {
            vendor_id: descriptor.vendor_id,
            product_id: descriptor.product_id,
            usage_page,
            usage_id: descriptor.usage_id,
            path: CString::new(path).unwrap(),
        }
    }

    #[test]
    fn test_descriptor_defaults() {
        let descriptor = DeviceDescriptor::default();
        assert_eq!(descriptor.vendor_id, 0x594D);
        assert_eq!(descriptor.product_id, 0x4409);
        assert_eq!(descriptor.usage_page, 0xFF60);
        assert_eq!(descriptor.usage_id, 0x61);
    }

    #[test]
    fn test_no_match_on_wrong_usage_page() {
        let descriptor = DeviceDescriptor::default();
        // Keyboard and consumer-control interfaces of the same board
        let interfaces = vec![iface(0x0001, "/dev/hidraw0"), iface(0x000C, "/dev/hidraw1")];
        assert_eq!(select_interface(&descriptor, interfaces), None);
    }

    #[test]
    fn test_no_match_on_wrong_vendor() {
        let descriptor = DeviceDescriptor::default();
        let mut other = iface(0xFF60, "/dev/hidraw0");
        other.vendor_id = 0xBEEF;
        assert_eq!(select_interface(&descriptor, vec![other]), None);
    }

    #[test]
    fn test_single_match_is_selected() {
        let descriptor = DeviceDescriptor::default();
        let interfaces = vec![iface(0x0001, "/dev/hidraw0"), iface(0xFF60, "/dev/hidraw1")];
        let selected = select_interface(&descriptor, interfaces).unwrap();
        assert_eq!(selected.path, CString::new("/dev/hidraw1").unwrap());
    }

    #[test]
    fn test_last_match_wins() {
        let descriptor = DeviceDescriptor::default();
        let interfaces = vec![
            iface(0xFF60, "/dev/hidraw0"),
            iface(0x0001, "/dev/hidraw1"),
            iface(0xFF60, "/dev/hidraw2"),
        ];
        let selected = select_interface(&descriptor, interfaces).unwrap();
        assert_eq!(selected.path, CString::new("/dev/hidraw2").unwrap());
    }

    #[test]
    fn test_selection_is_idempotent() {
        let descriptor = DeviceDescriptor::default();
        let interfaces = vec![
            iface(0xFF60, "/dev/hidraw0"),
            iface(0xFF60, "/dev/hidraw2"),
        ];
        let first = select_interface(&descriptor, interfaces.clone());
        let second = select_interface(&descriptor, interfaces);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_enumeration_selects_nothing() {
        let descriptor = DeviceDescriptor::default();
        assert_eq!(select_interface(&descriptor, Vec::new()), None);
    }
}
