use crate::geometry::Rect;
use crate::Result;

/// Snapshot of the foreground window as seen by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForegroundWindow {
    pub bounds: Rect,
    /// Full rectangle of the primary display, taskbar included.
    pub screen: Rect,
    pub maximized: bool,
    pub minimized: bool,
    pub has_caption: bool,
    /// Desktop or shell window; never treated as fullscreen.
    pub is_shell: bool,
}

pub trait ForegroundProbe: Send {
    /// `Ok(None)` when no window has focus.
    fn foreground_window(&self) -> Result<Option<ForegroundWindow>>;
}

/// Probe for hosts without a foreground window API.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProbe;

impl ForegroundProbe for NullProbe {
    fn foreground_window(&self) -> Result<Option<ForegroundWindow>> {
        Ok(None)
    }
}
