//! Status module - polling Zoom for the current meeting state

mod error;
mod snapshot;
mod zoom;

pub use error::StatusError;
pub use snapshot::{CallState, MuteState, StatusSnapshot, VideoState};
pub use zoom::ZoomStatusProvider;
