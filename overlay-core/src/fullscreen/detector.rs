use log::{debug, warn};

use super::probe::{ForegroundProbe, ForegroundWindow};

/// Heuristic fullscreen test for a single window against the primary display.
///
/// Borderless windows that fill the screen count as fullscreen even when they
/// are not maximized; maximized windows count when they have no caption.
/// Windows centred on another display never count, the overlay is not there.
pub fn is_fullscreen_window(window: &ForegroundWindow, tolerance: i32) -> bool {
    if window.is_shell || window.minimized || window.bounds.is_empty() {
        return false;
    }
    let bounds = window.bounds;
    if !window.screen.contains_point(bounds.center_x(), bounds.center_y()) {
        return false;
    }
    if bounds.covers(&window.screen, tolerance) {
        return true;
    }
    window.maximized && !window.has_caption
}

pub struct FullscreenDetector<P> {
    probe: P,
    tolerance: i32,
    is_fullscreen: bool,
}

impl<P: ForegroundProbe> FullscreenDetector<P> {
    pub fn new(probe: P, tolerance: i32) -> Self {
        Self {
            probe,
            tolerance,
            is_fullscreen: false,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Queries the probe and returns the new value only when it changed.
    pub fn check(&mut self) -> Option<bool> {
        let current = self.query();
        if current == self.is_fullscreen {
            return None;
        }
        debug!("[check] fullscreen changed: {} -> {}", self.is_fullscreen, current);
        self.is_fullscreen = current;
        Some(current)
    }

    fn query(&self) -> bool {
        match self.probe.foreground_window() {
            Ok(Some(window)) => is_fullscreen_window(&window, self.tolerance),
            Ok(None) => false,
            Err(e) => {
                warn!("[query] foreground query failed, assuming not fullscreen: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::{OverlayError, Result};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 1920,
        height: 1080,
    };

    fn window(bounds: Rect) -> ForegroundWindow {
        ForegroundWindow {
            bounds,
            screen: SCREEN,
            maximized: false,
            minimized: false,
            has_caption: true,
            is_shell: false,
        }
    }

    struct ScriptedProbe(Mutex<VecDeque<Result<Option<ForegroundWindow>>>>);

    impl ScriptedProbe {
        fn new(script: Vec<Result<Option<ForegroundWindow>>>) -> Self {
            Self(Mutex::new(script.into()))
        }
    }

    impl ForegroundProbe for ScriptedProbe {
        fn foreground_window(&self) -> Result<Option<ForegroundWindow>> {
            self.0.lock().unwrap().pop_front().unwrap_or(Ok(None))
        }
    }

    #[test]
    fn borderless_window_covering_screen_is_fullscreen() {
        assert!(is_fullscreen_window(&window(SCREEN), 10));
    }

    #[test]
    fn maximized_window_with_caption_above_taskbar_is_not_fullscreen() {
        let mut maximized = window(Rect::from_ltrb(-8, -8, 1928, 1048));
        maximized.maximized = true;
        assert!(!is_fullscreen_window(&maximized, 10));
    }

    #[test]
    fn maximized_window_without_caption_is_fullscreen() {
        let mut maximized = window(Rect::from_ltrb(0, 0, 1920, 1040));
        maximized.maximized = true;
        maximized.has_caption = false;
        assert!(is_fullscreen_window(&maximized, 10));
    }

    #[test]
    fn minimized_and_shell_windows_are_never_fullscreen() {
        let mut minimized = window(SCREEN);
        minimized.minimized = true;
        assert!(!is_fullscreen_window(&minimized, 10));

        let mut desktop = window(SCREEN);
        desktop.is_shell = true;
        assert!(!is_fullscreen_window(&desktop, 10));
    }

    #[test]
    fn window_filling_a_secondary_display_is_not_fullscreen() {
        let second = window(Rect::new(1920, 0, 2560, 1440));
        assert!(!is_fullscreen_window(&second, 10));

        let mut maximized = window(Rect::from_ltrb(1912, -8, 4488, 1448));
        maximized.maximized = true;
        maximized.has_caption = false;
        assert!(!is_fullscreen_window(&maximized, 10));
    }

    #[test]
    fn window_overhanging_primary_display_is_fullscreen() {
        assert!(is_fullscreen_window(&window(Rect::from_ltrb(-8, -8, 1928, 1088)), 10));
    }

    #[test]
    fn detector_reports_only_changes() {
        let probe = ScriptedProbe::new(vec![
            Ok(Some(window(SCREEN))),
            Ok(Some(window(SCREEN))),
            Ok(Some(window(Rect::new(100, 100, 800, 600)))),
            Ok(None),
        ]);
        let mut detector = FullscreenDetector::new(probe, 10);

        assert_eq!(detector.check(), Some(true));
        assert_eq!(detector.check(), None);
        assert!(detector.is_fullscreen());
        assert_eq!(detector.check(), Some(false));
        assert_eq!(detector.check(), None);
    }

    #[test]
    fn probe_error_counts_as_not_fullscreen() {
        let probe = ScriptedProbe::new(vec![
            Ok(Some(window(SCREEN))),
            Err(OverlayError::Probe("access denied".to_string())),
        ]);
        let mut detector = FullscreenDetector::new(probe, 10);

        assert_eq!(detector.check(), Some(true));
        assert_eq!(detector.check(), Some(false));
    }
}
