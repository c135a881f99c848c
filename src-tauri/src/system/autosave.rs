use log::{debug, error};
use std::time::{Duration, Instant};
use tauri::AppHandle;

use crate::app::AppContext;

const AUTOSAVE_TICK: Duration = Duration::from_millis(250);

/// Writes settled note edits to disk; the debounce itself lives in the session.
pub fn spawn_autosave(app_handle: AppHandle) {
    tauri::async_runtime::spawn(async move {
        let mut ticker = tokio::time::interval(AUTOSAVE_TICK);
        loop {
            ticker.tick().await;
            let result = AppContext::of(&app_handle)
                .with_session(|session| session.save_if_due(Instant::now()));
            match result {
                Ok(true) => debug!("[autosave] note saved"),
                Ok(false) => {}
                Err(e) => error!("[autosave] save note failed: {}", e),
            }
        }
    });
}
