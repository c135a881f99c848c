use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Left,
    #[default]
    Right,
}

/// Where the button sits: which edge, and how far down the work area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonPosition {
    pub offset_y: i32,
    pub side: EdgeSide,
}
