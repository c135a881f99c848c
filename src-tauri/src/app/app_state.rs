use std::sync::{Mutex, PoisonError};

use notes_overlay_core::config::Config;
use notes_overlay_core::session::OverlaySession;
use tauri::{AppHandle, Manager, State};

use crate::overlay::animation::Animator;

/// Everything the shell shares between commands, the hotkey handler and the
/// background tasks. Managed by tauri, reached through `AppContext::of`.
pub struct AppContext {
    pub config: Config,
    pub animator: Animator,
    session: Mutex<OverlaySession>,
}

impl AppContext {
    pub fn new(config: Config, session: OverlaySession) -> Self {
        Self {
            config,
            animator: Animator::default(),
            session: Mutex::new(session),
        }
    }

    pub fn of(app: &AppHandle) -> State<'_, AppContext> {
        app.state::<AppContext>()
    }

    /// Runs `f` under the session lock. Never touch a window inside `f`:
    /// window calls may block on the main thread, which may be waiting for
    /// this lock.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut OverlaySession) -> R) -> R {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}
