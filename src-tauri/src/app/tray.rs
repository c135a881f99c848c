use tauri::{image::Image, menu::{MenuBuilder, MenuItemBuilder}, tray::{TrayIconBuilder, TrayIconEvent}, AppHandle};

use crate::overlay::placement;

pub fn setup_tray(
    app_handle: &AppHandle,
) -> Result<(), Box<dyn std::error::Error>> {
    let toggle_item = MenuItemBuilder::with_id("toggle", "Show / Hide").build(app_handle)?;
    let restart_item = MenuItemBuilder::with_id("restart", "Restart").build(app_handle)?;
    let exit_item = MenuItemBuilder::with_id("exit", "Exit").build(app_handle)?;

    let tray_menu = MenuBuilder::new(app_handle)
        .item(&toggle_item)
        .separator()
        .item(&restart_item)
        .item(&exit_item)
        .build()?;

    let tray_icon = Image::from_bytes(include_bytes!("../../icons/icon.ico"))?;

    let _tray_icon = TrayIconBuilder::with_id("main")
        .tooltip("Notes Overlay")
        .menu(&tray_menu)
        .on_menu_event(move |app_handle, event| {
            match event.id.as_ref() {
                "toggle" => placement::toggle_visibility(app_handle),
                "exit" => app_handle.exit(0),
                "restart" => app_handle.restart(),
                _ => {}
            }
        })
        .icon(tray_icon)
        .on_tray_icon_event(move |tray_handle, event| {
            if let TrayIconEvent::DoubleClick { .. } = event {
                placement::toggle_visibility(tray_handle.app_handle());
            }
        })
        .show_menu_on_left_click(true)
        .build(app_handle)?;
    Ok(())
}
