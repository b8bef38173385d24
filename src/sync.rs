//! The poll-and-dispatch loop driving the controller

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::hid::{IndicatorDevice, Signal};
use crate::status::{CallState, StatusSnapshot, ZoomStatusProvider};

/// Time between polls
pub const POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// What one poll decided to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Zoom is not running
    NudgeOpen,
    /// Zoom is running but no meeting is active
    NudgeJoin,
    /// Push a signal report to the device
    Send(Signal),
    /// In a meeting but the snapshot was missing mute or video state
    Ignore,
}

/// Map a snapshot to the action for this tick.
///
/// Purely combinatorial: every poll is evaluated against the current
/// snapshot only, never against history.
pub fn dispatch(snapshot: &StatusSnapshot) -> TickAction {
    match snapshot.call {
        CallState::Closed => TickAction::NudgeOpen,
        CallState::Open => TickAction::NudgeJoin,
        CallState::InCall => match (snapshot.mute, snapshot.video) {
            (Some(mute), Some(video)) => TickAction::Send(Signal::for_states(mute, video)),
            _ => TickAction::Ignore,
        },
    }
}

/// Periodic sync between Zoom and the controller
///
/// Owns the device handle for the process lifetime. At most one poll is in
/// flight at a time; a tick that fires while the previous poll is still
/// running is skipped, so writes cannot interleave out of order.
pub struct SyncLoop {
    device: Arc<Mutex<IndicatorDevice>>,
    provider: Arc<ZoomStatusProvider>,
    in_flight: Arc<AtomicBool>,
}

impl SyncLoop {
    /// Create a sync loop around a located device handle
    pub fn new(device: IndicatorDevice) -> Self {
        Self {
            device: Arc::new(Mutex::new(device)),
            provider: Arc::new(ZoomStatusProvider::new()),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Poll immediately, then every [`POLL_INTERVAL`] until the process is
    /// terminated.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);

        loop {
            ticker.tick().await;

            if self
                .in_flight
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                debug!("Previous poll still running, skipping this tick");
                continue;
            }

            let provider = Arc::clone(&self.provider);
            let device = Arc::clone(&self.device);
            let in_flight = Arc::clone(&self.in_flight);

            tokio::spawn(async move {
                poll_once(&provider, &device).await;
                in_flight.store(false, Ordering::Release);
            });
        }
    }
}

/// One poll: query Zoom, dispatch, act. Failures stay local to the tick.
async fn poll_once(provider: &ZoomStatusProvider, device: &Mutex<IndicatorDevice>) {
    let snapshot = match provider.query().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Status poll failed, skipping this tick: {}", e);
            return;
        }
    };

    match dispatch(&snapshot) {
        TickAction::NudgeOpen => info!("Zoom is not running, open it to start syncing"),
        TickAction::NudgeJoin => info!("Zoom is open, but are you in a meeting right now?"),
        TickAction::Ignore => warn!("In a meeting but mute/video state was missing, skipping"),
        TickAction::Send(signal) => {
            debug!(?signal, "Pushing signal to controller");
            if let Err(e) = device.lock().send(signal) {
                warn!("Device write failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{MuteState, VideoState};

    fn snapshot(
        call: CallState,
        mute: Option<MuteState>,
        video: Option<VideoState>,
    ) -> StatusSnapshot {
        StatusSnapshot { call, mute, video }
    }

    #[test]
    fn test_closed_nudges_open() {
        let action = dispatch(&snapshot(CallState::Closed, None, None));
        assert_eq!(action, TickAction::NudgeOpen);
    }

    #[test]
    fn test_open_nudges_join() {
        let action = dispatch(&snapshot(CallState::Open, None, None));
        assert_eq!(action, TickAction::NudgeJoin);
    }

    #[test]
    fn test_meeting_fields_are_ignored_outside_a_meeting() {
        // A stale payload carrying mute/video alongside a non-call state
        // still must not produce a write
        let action = dispatch(&snapshot(
            CallState::Open,
            Some(MuteState::Muted),
            Some(VideoState::Stopped),
        ));
        assert_eq!(action, TickAction::NudgeJoin);
    }

    #[test]
    fn test_in_call_selects_one_signal_per_combination() {
        let cases = [
            (MuteState::Muted, VideoState::Stopped, Signal::MutedVideoOff),
            (MuteState::Muted, VideoState::Started, Signal::MutedVideoOn),
            (MuteState::Unmuted, VideoState::Stopped, Signal::LiveVideoOff),
            (MuteState::Unmuted, VideoState::Started, Signal::LiveVideoOn),
        ];
        for (mute, video, expected) in cases {
            let action = dispatch(&snapshot(CallState::InCall, Some(mute), Some(video)));
            assert_eq!(action, TickAction::Send(expected));
        }
    }

    #[test]
    fn test_incomplete_in_call_snapshot_is_ignored() {
        let missing_video = dispatch(&snapshot(
            CallState::InCall,
            Some(MuteState::Muted),
            None,
        ));
        assert_eq!(missing_video, TickAction::Ignore);

        let missing_mute = dispatch(&snapshot(
            CallState::InCall,
            None,
            Some(VideoState::Started),
        ));
        assert_eq!(missing_mute, TickAction::Ignore);
    }
}
