//! Zoom Beacon - Entry Point
//!
//! Initializes logging, locates the controller, and runs the sync loop
//! until a termination signal arrives.

use anyhow::{Context, Result};
use hidapi::HidApi;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use zoom_beacon::hid::{locate, DeviceDescriptor};
use zoom_beacon::sync::SyncLoop;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Zoom Beacon");

    let api = HidApi::new().context("Failed to initialize HID API")?;
    let descriptor = DeviceDescriptor::default();

    match locate(&api, &descriptor)? {
        Some(device) => {
            let sync = SyncLoop::new(device);
            tokio::select! {
                _ = sync.run() => {}
                _ = shutdown_signal() => {}
            }
        }
        None => {
            // The advisory was already logged by locate(); stay alive until
            // terminated, matching the device-present lifecycle
            info!("Connect the controller and restart to begin syncing");
            shutdown_signal().await;
        }
    }

    info!("Shutting down");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM arrives
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let ctrl_c = tokio::signal::ctrl_c();
    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                _ = ctrl_c => info!("Received SIGINT"),
                _ = term.recv() => info!("Received SIGTERM"),
            }
        }
        Err(_) => {
            let _ = ctrl_c.await;
            info!("Received SIGINT");
        }
    }
}
