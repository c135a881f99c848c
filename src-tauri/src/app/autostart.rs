use log::{info, warn};
use tauri::AppHandle;
use tauri_plugin_autostart::ManagerExt;

pub fn set_auto_start(
    app_handle: &AppHandle,
    auto_start: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let autostart_manager = app_handle.autolaunch();
    info!("[set_auto_start] auto start: {}", auto_start);
    let result = if auto_start {
        autostart_manager.enable()
    } else {
        autostart_manager.disable()
    };
    // disabling an entry that was never registered fails harmlessly
    if let Err(e) = result {
        warn!("[set_auto_start] update autostart entry failed: {}", e);
    }
    Ok(())
}
