//! Fullscreen detection: a heuristic over the foreground window's bounds,
//! driven by a periodic poller with an injectable probe and clock.

mod detector;
mod poller;
mod probe;

pub use detector::{is_fullscreen_window, FullscreenDetector};
pub use poller::{Clock, FullscreenPoller, SystemClock};
pub use probe::{ForegroundProbe, ForegroundWindow, NullProbe};
