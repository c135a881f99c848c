use serde::{Deserialize, Serialize};

pub const DEFAULT_HOTKEY: &str = "Ctrl+Alt+N";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SystemConfig {
    pub log_level: String,
    pub auto_start: bool,
    pub show_tray_icon: bool,
    pub hotkey: String,
    pub autosave_delay_ms: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            auto_start: false,
            show_tray_icon: true,
            hotkey: DEFAULT_HOTKEY.to_string(),
            autosave_delay_ms: 1000,
        }
    }
}
