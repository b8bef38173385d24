//! Zoom state as observed at one poll

use serde::Deserialize;

/// Whether Zoom is running and in a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CallState {
    /// Zoom is not running
    #[serde(rename = "closed")]
    Closed,
    /// Zoom is running but no meeting is active
    #[serde(rename = "open")]
    Open,
    /// A meeting is active
    #[serde(rename = "call")]
    InCall,
}

/// Microphone state inside a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuteState {
    Muted,
    Unmuted,
}

/// Camera state inside a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum VideoState {
    #[serde(rename = "stop")]
    Stopped,
    #[serde(rename = "start")]
    Started,
}

/// One observation of Zoom's state, produced fresh every poll
///
/// `mute` and `video` are only reported while a meeting is active; a
/// `{"stat":"closed"}` payload omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatusSnapshot {
    #[serde(rename = "stat")]
    pub call: CallState,
    #[serde(default)]
    pub mute: Option<MuteState>,
    #[serde(default)]
    pub video: Option<VideoState>,
}
