use log::error;
use notes_overlay_core::session::OverlaySnapshot;
use notes_overlay_core::theme::Palette;
use serde::Serialize;
use std::time::Instant;
use tauri::{AppHandle, State};

use crate::api::emitter;
use crate::app::AppContext;
use crate::overlay::{self, placement};

#[derive(Serialize)]
pub struct OverlayState {
    #[serde(flatten)]
    snapshot: OverlaySnapshot,
    palette: Palette,
}

#[tauri::command]
pub fn get_note(context: State<'_, AppContext>) -> String {
    context.with_session(|session| session.note().to_string())
}

#[tauri::command]
pub fn update_note(context: State<'_, AppContext>, content: String) {
    context.with_session(|session| session.note_edited(content, Instant::now()));
}

#[tauri::command]
pub fn clear_note(context: State<'_, AppContext>) -> Result<(), String> {
    context
        .with_session(|session| session.clear_note())
        .map_err(|e| {
            error!("[clear_note] clear note failed: {}", e);
            e.to_string()
        })
}

#[tauri::command]
pub fn get_overlay_state(app: AppHandle, context: State<'_, AppContext>) -> OverlayState {
    let theme = emitter::to_theme(overlay::current_theme(&app));
    let snapshot = context.with_session(|session| session.snapshot());
    OverlayState {
        snapshot,
        palette: theme.palette(&context.config.button),
    }
}

#[tauri::command]
pub fn toggle_notes(app: AppHandle) {
    placement::toggle_notes(&app);
}

#[tauri::command]
pub fn collapse_notes(app: AppHandle) {
    placement::collapse_notes(&app);
}

/// Pointer coordinates are physical screen pixels.
#[tauri::command]
pub fn begin_drag(context: State<'_, AppContext>, pointer_y: i32) {
    context.with_session(|session| session.begin_drag(pointer_y));
}

#[tauri::command]
pub fn drag_to(app: AppHandle, pointer_x: i32, pointer_y: i32) {
    placement::drag_to(&app, pointer_x, pointer_y);
}

#[tauri::command]
pub fn end_drag(app: AppHandle) {
    placement::end_drag(&app);
}
