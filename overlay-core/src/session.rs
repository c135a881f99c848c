//! Application context: everything the shell mutates in response to user
//! input, hotkeys and the fullscreen poller, owned in one place.

use log::{error, info};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::geometry::Rect;
use crate::overlay::{DragRelease, EdgeSide, Metrics, OverlayButton};
use crate::store::{AutoSave, NoteStore, SettingsStore};
use crate::visibility::{Transition, VisibilityController, VisibilityState};
use crate::{paths, Result};

#[derive(Debug, Clone)]
pub struct SessionPaths {
    pub notes: PathBuf,
    pub settings: PathBuf,
}

impl SessionPaths {
    /// Files under `{home}/.notes_overlay`.
    pub fn default_paths() -> Result<Self> {
        Ok(Self {
            notes: paths::notes_file()?,
            settings: paths::settings_file()?,
        })
    }
}

/// What the frontend needs to render the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlaySnapshot {
    pub visibility: VisibilityState,
    pub expanded: bool,
    pub side: EdgeSide,
    pub offset_y: i32,
}

#[derive(Debug)]
pub struct OverlaySession {
    visibility: VisibilityController,
    button: OverlayButton,
    notes: NoteStore,
    autosave: AutoSave,
    settings: SettingsStore,
}

impl OverlaySession {
    pub fn open(config: &Config, paths: &SessionPaths, scale_factor: f64) -> Self {
        let settings = SettingsStore::open(&paths.settings);
        let button = OverlayButton::new(
            Metrics::from_config(config, scale_factor),
            config.button.top_margin,
            settings.settings().button_side,
        );
        Self {
            visibility: VisibilityController::new(),
            button,
            notes: NoteStore::open(&paths.notes),
            autosave: AutoSave::new(Duration::from_millis(config.system.autosave_delay_ms)),
            settings,
        }
    }

    pub fn visibility(&self) -> VisibilityState {
        self.visibility.state()
    }

    pub fn button(&self) -> &OverlayButton {
        &self.button
    }

    pub fn snapshot(&self) -> OverlaySnapshot {
        let position = self.button.position();
        OverlaySnapshot {
            visibility: self.visibility.state(),
            expanded: self.button.is_expanded(),
            side: position.side,
            offset_y: position.offset_y,
        }
    }

    /// Latest text, including edits not yet written.
    pub fn note(&self) -> &str {
        self.autosave
            .pending()
            .unwrap_or_else(|| self.notes.content())
    }

    /// Hotkey press.
    pub fn toggle_visibility(&mut self) -> Transition {
        let transition = self.visibility.toggle();
        self.after_transition(&transition);
        transition
    }

    /// Fullscreen poll result.
    pub fn fullscreen_changed(&mut self, active: bool) -> Option<Transition> {
        let transition = self.visibility.set_fullscreen(active)?;
        self.after_transition(&transition);
        Some(transition)
    }

    fn after_transition(&mut self, transition: &Transition) {
        info!("[after_transition] visibility {:?} -> {:?}", transition.from, transition.to);
        if transition.became_hidden() {
            // a hidden window never sees the pointer release
            if self.button.cancel_drag() {
                info!("[after_transition] drag cancelled by hide");
            }
            self.button.set_expanded(false);
            self.flush_logged();
        }
    }

    /// Button click. `None` while hidden, otherwise the new expanded state.
    pub fn toggle_notes(&mut self) -> Option<bool> {
        if !self.visibility.state().is_visible() {
            return None;
        }
        let expanded = !self.button.is_expanded();
        self.button.set_expanded(expanded);
        if !expanded {
            self.flush_logged();
        }
        Some(expanded)
    }

    /// Returns whether the notes were open.
    pub fn collapse_notes(&mut self) -> bool {
        let changed = self.button.set_expanded(false);
        if changed {
            self.flush_logged();
        }
        changed
    }

    /// Applies sizes for a new scale factor and pulls the button back into
    /// the work area.
    pub fn set_metrics(&mut self, metrics: Metrics, work_area: &Rect) {
        self.button.set_metrics(metrics);
        self.button.clamp_into(work_area);
    }

    pub fn clamp_into(&mut self, work_area: &Rect) {
        self.button.clamp_into(work_area);
    }

    pub fn begin_drag(&mut self, pointer_y: i32) {
        self.button.begin_drag(pointer_y);
    }

    pub fn drag_to(&mut self, pointer_x: i32, pointer_y: i32, work_area: &Rect) -> Option<Rect> {
        self.button.drag_to(pointer_x, pointer_y, work_area)
    }

    /// Ends a drag and persists the side the button snapped to.
    pub fn end_drag(&mut self, work_area: &Rect) -> Option<DragRelease> {
        let release = self.button.end_drag(work_area)?;
        if release.side_changed {
            if let Err(e) = self.settings.set_button_side(release.side) {
                error!("[end_drag] save button side failed: {}", e);
            }
        }
        Some(release)
    }

    pub fn note_edited(&mut self, content: String, now: Instant) {
        self.autosave.note_changed(content, now);
    }

    /// Saves pending text once the edit has settled. Returns whether it wrote.
    pub fn save_if_due(&mut self, now: Instant) -> Result<bool> {
        match self.autosave.take_due(now) {
            Some(content) => self.notes.save(&content).map(|_| true),
            None => Ok(false),
        }
    }

    /// Saves pending text immediately. Returns whether it wrote.
    pub fn flush(&mut self) -> Result<bool> {
        match self.autosave.take_pending() {
            Some(content) => self.notes.save(&content).map(|_| true),
            None => Ok(false),
        }
    }

    /// Empties the note on disk, dropping any unsaved edit.
    pub fn clear_note(&mut self) -> Result<()> {
        self.autosave.take_pending();
        self.notes.clear()
    }

    fn flush_logged(&mut self) {
        if let Err(e) = self.flush() {
            error!("[flush] save note failed: {}", e);
        }
    }
}
