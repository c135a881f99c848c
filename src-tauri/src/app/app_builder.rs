use log::info;
use tauri::{Manager, WindowEvent};
use tauri_plugin_autostart::MacosLauncher;

use crate::api::{command, emitter};
use crate::app::hotkey;
use crate::overlay::{self, placement};

pub fn create_app_builder() -> tauri::Builder<tauri::Wry> {
    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            info!("[single_instance] second launch, revealing overlay");
            placement::reveal(app);
        }))
        .plugin(tauri_plugin_autostart::init(
            MacosLauncher::LaunchAgent,
            None,
        ))
        .plugin(hotkey::plugin())
        .invoke_handler(tauri::generate_handler![
            command::get_note,
            command::update_note,
            command::clear_note,
            command::get_overlay_state,
            command::toggle_notes,
            command::collapse_notes,
            command::begin_drag,
            command::drag_to,
            command::end_drag,
        ])
        .on_window_event(|window, event| match event {
            WindowEvent::CloseRequested { api, .. } => {
                api.prevent_close();
                if window.label() == overlay::NOTES_LABEL {
                    placement::collapse_notes(window.app_handle());
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if window.label() == overlay::BUTTON_LABEL {
                    placement::rescale(window.app_handle(), *scale_factor);
                }
            }
            WindowEvent::ThemeChanged(theme) => {
                if window.label() == overlay::BUTTON_LABEL {
                    emitter::emit_palette(window.app_handle(), *theme);
                }
            }
            _ => {}
        })
}
