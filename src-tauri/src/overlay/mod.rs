use log::{error, info, warn};
use notes_overlay_core::geometry::Rect;
use tauri::{AppHandle, Manager, PhysicalPosition, PhysicalSize, WebviewWindow};

use crate::app::AppContext;
use crate::system::work_area;

pub mod animation;
pub mod placement;

pub const BUTTON_LABEL: &str = "button";
pub const NOTES_LABEL: &str = "notes";

/// Creates the edge button (shown) and the notes window (hidden, tucked
/// behind the button).
pub fn create_overlay_windows(app_handle: &AppHandle) -> tauri::Result<()> {
    let work_area = work_area::current(app_handle);
    let (button_frame, notes_frame) = AppContext::of(app_handle).with_session(|session| {
        session.clamp_into(&work_area);
        (
            session.button().frame(&work_area),
            session.button().notes_tucked_frame(&work_area),
        )
    });

    let button = create_overlay_window(app_handle, BUTTON_LABEL, "button.html", button_frame)?;
    set_window_style(&button, WindowRole::Button);
    button.show()?;

    let notes = create_overlay_window(app_handle, NOTES_LABEL, "notes.html", notes_frame)?;
    set_window_style(&notes, WindowRole::Notes);
    Ok(())
}

fn create_overlay_window(
    app_handle: &AppHandle,
    label: &str,
    page: &str,
    frame: Rect,
) -> tauri::Result<WebviewWindow> {
    // a stale window with the same label would shadow the new one
    if let Some(existing_window) = app_handle.get_webview_window(label) {
        warn!("[create_overlay_window] close existing window: {}", label);
        if let Err(e) = existing_window.close() {
            error!("[create_overlay_window] close existing window failed: {}", e);
        }
    }

    info!(
        "[create_overlay_window] create {} window: position({}, {}), size {}x{}",
        label, frame.x, frame.y, frame.width, frame.height
    );
    let window = tauri::WebviewWindowBuilder::new(
        app_handle,
        label,
        tauri::WebviewUrl::App(page.into()),
    )
    .title("Notes Overlay")
    .transparent(true)
    .decorations(false)
    // must disable shadow, otherwise the window will be offset
    .shadow(false)
    .resizable(false)
    .always_on_top(true)
    .skip_taskbar(true)
    .focused(false)
    .visible(false)
    .build()?;

    set_frame(&window, frame);
    Ok(window)
}

pub fn move_window(window: &WebviewWindow, frame: Rect) {
    if let Err(e) = window.set_position(PhysicalPosition::new(frame.x, frame.y)) {
        error!("[move_window] set position of {} failed: {}", window.label(), e);
    }
}

pub fn set_frame(window: &WebviewWindow, frame: Rect) {
    let size = PhysicalSize::new(frame.width.max(1) as u32, frame.height.max(1) as u32);
    if let Err(e) = window.set_size(size) {
        error!("[set_frame] set size of {} failed: {}", window.label(), e);
    }
    move_window(window, frame);
}

/// Current outer frame of a window, in physical pixels.
pub fn window_frame(window: &WebviewWindow) -> Option<Rect> {
    let position = window.outer_position().ok()?;
    let size = window.outer_size().ok()?;
    Some(Rect::new(position.x, position.y, size.width as i32, size.height as i32))
}

pub fn current_theme(app_handle: &AppHandle) -> tauri::Theme {
    app_handle
        .get_webview_window(BUTTON_LABEL)
        .and_then(|window| window.theme().ok())
        .unwrap_or(tauri::Theme::Light)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowRole {
    Button,
    Notes,
}

#[cfg(windows)]
fn set_window_style(window: &WebviewWindow, role: WindowRole) {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};
    use windows::Win32::UI::WindowsAndMessaging::{
        GetWindowLongW, SetWindowLongW, GWL_EXSTYLE, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW,
    };

    const DWMWA_WINDOW_CORNER_PREFERENCE: DWMWINDOWATTRIBUTE = DWMWINDOWATTRIBUTE(33);
    const DWMWCP_DONOTROUND: u32 = 1;
    const DWMWCP_ROUND: u32 = 2;

    let hwnd = match window.hwnd() {
        Ok(hwnd) => HWND(hwnd.0 as *mut _),
        Err(e) => {
            error!("[set_window_style] get hwnd of {} failed: {}", window.label(), e);
            return;
        }
    };

    // the button draws its own half-rounded shape; the notes pad keeps Windows 11 corners
    let preference: u32 = match role {
        WindowRole::Button => DWMWCP_DONOTROUND,
        WindowRole::Notes => DWMWCP_ROUND,
    };
    let mut ex_style = WS_EX_TOOLWINDOW.0;
    if role == WindowRole::Button {
        // clicking the button must not steal focus from the app underneath
        ex_style |= WS_EX_NOACTIVATE.0;
    }

    unsafe {
        if let Err(e) = DwmSetWindowAttribute(
            hwnd,
            DWMWA_WINDOW_CORNER_PREFERENCE,
            &preference as *const _ as _,
            std::mem::size_of_val(&preference) as u32,
        ) {
            warn!("[set_window_style] corner preference not applied: {}", e);
        }
        let style = GetWindowLongW(hwnd, GWL_EXSTYLE);
        SetWindowLongW(hwnd, GWL_EXSTYLE, style | ex_style as i32);
    }
}

#[cfg(not(windows))]
fn set_window_style(_window: &WebviewWindow, _role: WindowRole) {}
