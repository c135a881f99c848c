use log::{error, info};
use notes_overlay_core::config::{self, Config};
use notes_overlay_core::paths;
use notes_overlay_core::session::{OverlaySession, SessionPaths};
use std::path::PathBuf;
use tauri::Manager;

mod app_builder;
mod app_state;
mod autostart;
mod hotkey;
mod panic_handler;
mod tray;
pub use app_state::AppContext;

use crate::{overlay, system, utils::logger};

pub fn run() {
    // config is read before the logger exists; its error is reported once logging is up
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let log_dir = paths::log_dir().unwrap_or_else(|_| PathBuf::from("logs"));
    let _logger = match logger::init_logger(&config.system.log_level, &log_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("[run] init logger failed: {}", e);
            None
        }
    };
    if let Some(e) = config_error {
        error!("[run] {}, falling back to defaults", e);
    }
    match &config.source {
        Some(path) => info!("[run] config loaded from {}", path.display()),
        None => info!("[run] no config file found, using defaults"),
    }
    if let Err(e) = paths::ensure_data_dir() {
        error!("[run] create data dir failed: {}", e);
    }

    // Initialize app
    let mut builder = app_builder::create_app_builder();
    // Setup application
    builder = builder.setup(move |app| {
        info!("=== application started ===");
        info!("debug mode: {}", cfg!(debug_assertions));

        let app_handle = app.handle().clone();

        let scale_factor = app_handle
            .primary_monitor()?
            .map(|monitor| monitor.scale_factor())
            .unwrap_or(1.0);
        let session = OverlaySession::open(&config, &SessionPaths::default_paths()?, scale_factor);
        app.manage(AppContext::new(config.clone(), session));
        info!("[✓] app context ready (scale factor {})", scale_factor);

        // Initialize panic handler
        panic_handler::setup_panic_handler(app_handle.clone());
        info!("[✓] panic handler initialized");

        overlay::create_overlay_windows(&app_handle)?;
        info!("[✓] overlay windows created");

        if config.system.show_tray_icon {
            tray::setup_tray(&app_handle)?;
            info!("[✓] tray icon ready");
        }

        autostart::set_auto_start(&app_handle, config.system.auto_start)?;
        info!("[✓] auto start setup");

        if let Err(e) = hotkey::register_hotkey(&app_handle, &config.system.hotkey) {
            error!("[✗] register hotkey failed: {}", e);
        }

        if config.detection.enabled {
            system::fullscreen::spawn_fullscreen_watch(app_handle.clone(), &config.detection);
            info!("[✓] fullscreen detection started");
        }
        system::autosave::spawn_autosave(app_handle.clone());

        info!("=== application initialized ===");
        Ok(())
    });

    // Build and run application
    let app = match builder.build(tauri::generate_context!("Tauri.toml")) {
        Ok(app) => app,
        Err(e) => {
            error!("[run] error while building tauri application: {}", e);
            return;
        }
    };

    app.run(|app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            info!("application is exiting, saving note...");
            if let Some(context) = app_handle.try_state::<AppContext>() {
                match context.with_session(|session| session.flush()) {
                    Ok(true) => info!("[✓] note saved"),
                    Ok(false) => {}
                    Err(e) => error!("[✗] save note on exit failed: {}", e),
                }
            }
        }
    });
}
