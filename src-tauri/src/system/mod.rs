pub mod autosave;
pub mod fullscreen;
pub mod work_area;
