//! Signal report definitions for the YMD09 controller
//!
//! Wire format expected by the firmware:
//! - Report size: 6 bytes
//! - Byte 0 is the report-id placeholder, always 0x00
//! - Bytes 1-5 carry the signal tag, repeated

use crate::status::{MuteState, VideoState};

/// Signal report size in bytes, including the report-id placeholder
pub const REPORT_SIZE: usize = 6;

/// LED signals understood by the controller firmware
///
/// The tag values are a wire contract with the firmware and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Signal {
    /// Mic muted, camera stopped
    MutedVideoOff = 0x01,
    /// Mic muted, camera running
    MutedVideoOn = 0x02,
    /// Mic live, camera stopped
    LiveVideoOff = 0x03,
    /// Mic live, camera running
    LiveVideoOn = 0x04,
}

impl Signal {
    /// Pick the signal for a (mute, video) pair
    pub fn for_states(mute: MuteState, video: VideoState) -> Self {
        match (mute, video) {
            (MuteState::Muted, VideoState::Stopped) => Signal::MutedVideoOff,
            (MuteState::Muted, VideoState::Started) => Signal::MutedVideoOn,
            (MuteState::Unmuted, VideoState::Stopped) => Signal::LiveVideoOff,
            (MuteState::Unmuted, VideoState::Started) => Signal::LiveVideoOn,
        }
    }

    /// Convert signal to its tag byte
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a signal from its tag byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Signal::MutedVideoOff),
            0x02 => Some(Signal::MutedVideoOn),
            0x03 => Some(Signal::LiveVideoOff),
            0x04 => Some(Signal::LiveVideoOn),
            _ => None,
        }
    }

    /// Render the report written to the device
    pub fn report(self) -> [u8; REPORT_SIZE] {
        let tag = self.as_byte();
        [0x00, tag, tag, tag, tag, tag]
    }
}
