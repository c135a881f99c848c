mod probe;

use probe::PlatformProbe;

use log::info;
use notes_overlay_core::config::DetectionConfig;
use notes_overlay_core::fullscreen::{FullscreenDetector, FullscreenPoller, SystemClock};
use std::time::Duration;
use tauri::AppHandle;
use tokio::time::MissedTickBehavior;

use crate::overlay::placement;

const MIN_INTERVAL_MS: u64 = 50;

pub fn spawn_fullscreen_watch(app_handle: AppHandle, detection: &DetectionConfig) {
    let interval = Duration::from_millis(detection.interval_ms.max(MIN_INTERVAL_MS));
    let detector = FullscreenDetector::new(PlatformProbe::default(), detection.tolerance);
    let mut poller = FullscreenPoller::new(detector, SystemClock, interval);
    info!(
        "[spawn_fullscreen_watch] polling every {:?}, tolerance {}px",
        interval, detection.tolerance
    );

    tauri::async_runtime::spawn(async move {
        let mut ticker = tokio::time::interval(poller.interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if let Some(active) = poller.tick() {
                info!("[fullscreen_watch] fullscreen {}", if active { "entered" } else { "exited" });
                placement::fullscreen_changed(&app_handle, active);
            }
        }
    });
}
