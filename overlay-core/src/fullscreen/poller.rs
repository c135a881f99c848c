use std::time::{Duration, Instant};

use super::detector::FullscreenDetector;
use super::probe::ForegroundProbe;

pub trait Clock: Send {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Periodic fullscreen check. The caller drives `tick` from its own timer;
/// ticks arriving before the interval has elapsed are ignored.
pub struct FullscreenPoller<P, C> {
    detector: FullscreenDetector<P>,
    clock: C,
    interval: Duration,
    next_due: Option<Instant>,
}

impl<P: ForegroundProbe, C: Clock> FullscreenPoller<P, C> {
    pub fn new(detector: FullscreenDetector<P>, clock: C, interval: Duration) -> Self {
        Self {
            detector,
            clock,
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_fullscreen(&self) -> bool {
        self.detector.is_fullscreen()
    }

    /// Returns `Some(active)` when a due check observed a change.
    pub fn tick(&mut self) -> Option<bool> {
        let now = self.clock.now();
        if let Some(due) = self.next_due {
            if now < due {
                return None;
            }
        }
        self.next_due = Some(now + self.interval);
        self.detector.check()
    }
}
