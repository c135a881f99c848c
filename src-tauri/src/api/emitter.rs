use log::error;
use notes_overlay_core::theme::Theme;
use notes_overlay_core::visibility::VisibilityState;
use tauri::{AppHandle, Emitter};

use crate::app::AppContext;

pub fn emit_visibility(app_handle: &AppHandle, state: VisibilityState) {
    if let Err(e) = app_handle.emit("visibility-changed", state) {
        error!("[emit_visibility] emit failed: {}", e);
    }
}

pub fn emit_expanded(app_handle: &AppHandle, expanded: bool) {
    if let Err(e) = app_handle.emit("notes-expanded", expanded) {
        error!("[emit_expanded] emit failed: {}", e);
    }
}

pub fn emit_palette(app_handle: &AppHandle, theme: tauri::Theme) {
    let context = AppContext::of(app_handle);
    let palette = to_theme(theme).palette(&context.config.button);
    if let Err(e) = app_handle.emit("palette", palette) {
        error!("[emit_palette] emit failed: {}", e);
    }
}

pub fn emit_panic(app_handle: &AppHandle, message: &str) {
    let _ = app_handle.emit("rust-panic", message.to_string());
}

pub fn to_theme(theme: tauri::Theme) -> Theme {
    match theme {
        tauri::Theme::Dark => Theme::Dark,
        _ => Theme::Light,
    }
}
