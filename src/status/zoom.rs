//! AppleScript probe for Zoom's meeting state
//!
//! Zoom exposes no public API for mute/camera state. The probe inspects the
//! "Meeting" menu through System Events: the menu only exists while a
//! meeting is active, and its items flip between "Unmute audio"/"Mute audio"
//! and "Start video"/"Stop video" with the actual state.

use tokio::process::Command;
use tracing::debug;

use super::error::StatusError;
use super::snapshot::StatusSnapshot;

/// AppleScript source, embedded so the binary is self-contained
const STATUS_SCRIPT: &str = include_str!("zoom_status.applescript");

/// Queries Zoom for the current meeting state
#[derive(Debug, Default)]
pub struct ZoomStatusProvider;

impl ZoomStatusProvider {
    pub fn new() -> Self {
        Self
    }

    /// Run the probe once and parse its output.
    ///
    /// No timeout is enforced here; the sync loop's in-flight guard keeps a
    /// hung probe from stacking up polls.
    pub async fn query(&self) -> Result<StatusSnapshot, StatusError> {
        let output = Command::new("osascript")
            .arg("-e")
            .arg(STATUS_SCRIPT)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StatusError::Script(stderr.trim().to_string()));
        }

        let snapshot: StatusSnapshot = serde_json::from_slice(&output.stdout)?;
        debug!(?snapshot, "Status probe result");
        Ok(snapshot)
    }
}
