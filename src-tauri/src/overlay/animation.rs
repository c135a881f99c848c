use log::{debug, warn};
use notes_overlay_core::overlay::Tween;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tauri::{AppHandle, Manager};

use crate::app::AppContext;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Per-window generation counters; starting an animation bumps the window's
/// generation and any older animation on it stops at its next frame.
#[derive(Default)]
pub struct Animator {
    generations: Mutex<HashMap<&'static str, u64>>,
}

impl Animator {
    fn next(&self, label: &'static str) -> u64 {
        let mut generations = self.generations.lock().unwrap_or_else(PoisonError::into_inner);
        let generation = generations.entry(label).or_insert(0);
        *generation += 1;
        *generation
    }

    fn is_current(&self, label: &'static str, generation: u64) -> bool {
        let generations = self.generations.lock().unwrap_or_else(PoisonError::into_inner);
        generations.get(label).copied() == Some(generation)
    }

    /// Stops whatever animation is running on `label`.
    pub fn cancel(&self, label: &'static str) {
        self.next(label);
    }
}

/// Moves window `label` along `tween`, then runs `on_finish` unless a newer
/// animation took over.
pub fn animate(
    app_handle: &AppHandle,
    label: &'static str,
    tween: Tween,
    on_finish: Option<Box<dyn FnOnce() + Send>>,
) {
    let Some(window) = app_handle.get_webview_window(label) else {
        warn!("[animate] window {} not found", label);
        return;
    };
    let generation = AppContext::of(app_handle).animator.next(label);
    let app_handle = app_handle.clone();
    debug!("[animate] {} #{}: {:?} -> {:?}", label, generation, tween.from, tween.to);

    tauri::async_runtime::spawn(async move {
        let started = Instant::now();
        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        loop {
            ticker.tick().await;
            if !AppContext::of(&app_handle).animator.is_current(label, generation) {
                return;
            }
            let elapsed = started.elapsed();
            super::move_window(&window, tween.sample(elapsed));
            if tween.is_finished(elapsed) {
                break;
            }
        }
        if let Some(on_finish) = on_finish {
            on_finish();
        }
    });
}
