#[cfg(windows)]
pub use win32::Win32Probe as PlatformProbe;

#[cfg(not(windows))]
pub use notes_overlay_core::fullscreen::NullProbe as PlatformProbe;

#[cfg(windows)]
mod win32 {
    use std::mem::size_of;

    use notes_overlay_core::fullscreen::{ForegroundProbe, ForegroundWindow};
    use notes_overlay_core::geometry::Rect;
    use notes_overlay_core::{OverlayError, Result};
    use windows::Win32::Foundation::{HWND, RECT};
    use windows::Win32::UI::WindowsAndMessaging::{
        GetClassNameW, GetDesktopWindow, GetForegroundWindow, GetShellWindow, GetSystemMetrics,
        GetWindowLongW, GetWindowPlacement, GetWindowRect, IsIconic, GWL_STYLE, SM_CXSCREEN,
        SM_CYSCREEN, SW_SHOWMAXIMIZED, WINDOWPLACEMENT, WS_CAPTION,
    };

    // desktop background windows owned by explorer
    const SHELL_CLASSES: [&str; 2] = ["Progman", "WorkerW"];

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Win32Probe;

    impl ForegroundProbe for Win32Probe {
        fn foreground_window(&self) -> Result<Option<ForegroundWindow>> {
            unsafe {
                let hwnd = GetForegroundWindow();
                if hwnd.is_invalid() {
                    return Ok(None);
                }

                let mut bounds = RECT::default();
                GetWindowRect(hwnd, &mut bounds)
                    .map_err(|e| OverlayError::Probe(format!("GetWindowRect: {}", e)))?;

                let mut placement = WINDOWPLACEMENT {
                    length: size_of::<WINDOWPLACEMENT>() as u32,
                    ..Default::default()
                };
                GetWindowPlacement(hwnd, &mut placement)
                    .map_err(|e| OverlayError::Probe(format!("GetWindowPlacement: {}", e)))?;

                // primary display; the overlay lives there
                let screen = Rect::new(0, 0, GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN));
                if screen.is_empty() {
                    return Err(OverlayError::Probe("GetSystemMetrics returned an empty screen".to_string()));
                }

                let style = GetWindowLongW(hwnd, GWL_STYLE) as u32;
                Ok(Some(ForegroundWindow {
                    bounds: to_rect(&bounds),
                    screen,
                    maximized: placement.showCmd == SW_SHOWMAXIMIZED.0 as u32,
                    minimized: IsIconic(hwnd).as_bool(),
                    has_caption: style & WS_CAPTION.0 == WS_CAPTION.0,
                    is_shell: is_shell_window(hwnd),
                }))
            }
        }
    }

    fn to_rect(rect: &RECT) -> Rect {
        Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
    }

    unsafe fn is_shell_window(hwnd: HWND) -> bool {
        if hwnd == GetShellWindow() || hwnd == GetDesktopWindow() {
            return true;
        }
        let mut class_name = [0u16; 64];
        let len = GetClassNameW(hwnd, &mut class_name);
        if len <= 0 {
            return false;
        }
        let class_name = String::from_utf16_lossy(&class_name[..len as usize]);
        SHELL_CLASSES.contains(&class_name.as_str())
    }
}
