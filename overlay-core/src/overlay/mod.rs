mod animation;
mod button;
mod position;

pub use animation::{ease_out_cubic, Tween};
pub use button::{DragRelease, Metrics, OverlayButton};
pub use position::{ButtonPosition, EdgeSide};
