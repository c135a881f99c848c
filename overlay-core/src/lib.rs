pub mod config;
pub mod error;
pub mod fullscreen;
pub mod geometry;
pub mod overlay;
pub mod paths;
pub mod session;
pub mod store;
pub mod theme;
pub mod visibility;

pub use error::{OverlayError, Result};
