use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    pub enabled: bool,
    pub interval_ms: u64,
    // pixels a window edge may miss the screen edge by and still count as covering it
    pub tolerance: i32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 500,
            tolerance: 10,
        }
    }
}
