use log::warn;
use notes_overlay_core::geometry::Rect;
use tauri::AppHandle;

const FALLBACK_WORK_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 1920,
    height: 1040,
};

/// Usable area of the primary monitor (taskbar excluded), physical pixels.
pub fn current(app_handle: &AppHandle) -> Rect {
    #[cfg(windows)]
    {
        if let Some(rect) = system_work_area() {
            return rect;
        }
    }
    primary_monitor_area(app_handle).unwrap_or(FALLBACK_WORK_AREA)
}

#[cfg(windows)]
fn system_work_area() -> Option<Rect> {
    use windows::Win32::Foundation::RECT;
    use windows::Win32::UI::WindowsAndMessaging::{
        SystemParametersInfoW, SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
    };

    let mut rect = RECT::default();
    let result = unsafe {
        SystemParametersInfoW(
            SPI_GETWORKAREA,
            0,
            Some(&mut rect as *mut RECT as *mut _),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
    };
    match result {
        Ok(()) => Some(Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)),
        Err(e) => {
            warn!("[system_work_area] SPI_GETWORKAREA failed: {}", e);
            None
        }
    }
}

fn primary_monitor_area(app_handle: &AppHandle) -> Option<Rect> {
    let monitor = match app_handle.primary_monitor() {
        Ok(monitor) => monitor?,
        Err(e) => {
            warn!("[primary_monitor_area] get primary monitor failed: {}", e);
            return None;
        }
    };
    let position = monitor.position();
    let size = monitor.size();
    Some(Rect::new(
        position.x,
        position.y,
        size.width as i32,
        size.height as i32,
    ))
}
