//! HID module - Raw HID communication with the YMD09 controller

mod device;
mod protocol;

pub use device::{locate, select_interface, DeviceDescriptor, IndicatorDevice, InterfaceInfo};
pub use protocol::{Signal, REPORT_SIZE};
