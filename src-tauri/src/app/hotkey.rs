use log::{debug, info, warn};
use tauri::plugin::TauriPlugin;
use tauri::{AppHandle, Wry};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState};

use crate::overlay::placement;

pub fn default_shortcut() -> Shortcut {
    Shortcut::new(Some(Modifiers::CONTROL | Modifiers::ALT), Code::KeyN)
}

/// Parses strings like `Ctrl+Alt+N`; falls back to the default on garbage.
pub fn parse_hotkey(value: &str) -> Shortcut {
    value.parse::<Shortcut>().unwrap_or_else(|e| {
        warn!("[parse_hotkey] invalid hotkey '{}': {}, using Ctrl+Alt+N", value, e);
        default_shortcut()
    })
}

/// Global shortcut plugin; every registered shortcut toggles the overlay.
pub fn plugin() -> TauriPlugin<Wry> {
    tauri_plugin_global_shortcut::Builder::new()
        .with_handler(|app, shortcut, event| {
            // the handler fires on press and on release
            if event.state != ShortcutState::Pressed {
                return;
            }
            debug!("[hotkey] {} pressed", shortcut.into_string());
            placement::toggle_visibility(app);
        })
        .build()
}

pub fn register_hotkey(app_handle: &AppHandle, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let shortcut = parse_hotkey(value);
    app_handle.global_shortcut().register(shortcut)?;
    info!("[register_hotkey] registered {}", shortcut.into_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hotkey_string_matches_default_shortcut() {
        let parsed = parse_hotkey(notes_overlay_core::config::DEFAULT_HOTKEY);
        assert_eq!(parsed, default_shortcut());
    }

    #[test]
    fn garbage_falls_back_to_default() {
        assert_eq!(parse_hotkey("Ctrl+Banana"), default_shortcut());
    }
}
