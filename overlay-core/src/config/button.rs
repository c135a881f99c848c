use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ButtonConfig {
    pub width: u32,
    pub height: u32,
    // distance from the top of the work area on first start
    pub top_margin: i32,
    pub opacity: f64,
    pub hover_opacity: f64,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 100,
            top_margin: 120,
            opacity: 0.75,
            hover_opacity: 0.90,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotesWindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for NotesWindowConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 500,
            min_width: 350,
            min_height: 400,
        }
    }
}

impl NotesWindowConfig {
    /// Configured size, never below the minimum.
    pub fn effective_size(&self) -> (u32, u32) {
        (
            self.width.max(self.min_width),
            self.height.max(self.min_height),
        )
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_ms: 350 }
    }
}
