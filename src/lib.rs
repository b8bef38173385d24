//! Zoom Beacon
//!
//! A Rust application that mirrors Zoom's in-meeting state onto a YMD09
//! macropad over Raw HID.
//!
//! # Features
//! - Locates the controller among attached HID devices by its Raw HID interface
//! - Polls Zoom every three seconds through an AppleScript probe
//! - Maps the (mute, video) state to one of four LED signal reports
//! - Keeps running, advisory-only, when Zoom or the controller is missing

pub mod hid;
pub mod status;
pub mod sync;

pub use hid::{locate, DeviceDescriptor, IndicatorDevice, Signal};
pub use status::{CallState, MuteState, StatusError, StatusSnapshot, VideoState};
pub use sync::{dispatch, SyncLoop, TickAction};
