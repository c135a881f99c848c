mod autosave;
mod json_file;
mod note;
mod settings;

pub use autosave::AutoSave;
pub use json_file::{read_json, write_json};
pub use note::{NoteDocument, NoteStore};
pub use settings::{Settings, SettingsStore};
