//! Applies session changes to the two overlay windows.
//!
//! Each function reads what it needs from the session under the lock, drops
//! the lock, and only then touches windows.

use log::{debug, error};
use notes_overlay_core::geometry::Rect;
use notes_overlay_core::overlay::{Metrics, Tween};
use notes_overlay_core::visibility::{Transition, VisibilityState};
use std::time::Duration;
use tauri::{AppHandle, Manager};

use super::animation::animate;
use super::{move_window, set_frame, window_frame, BUTTON_LABEL, NOTES_LABEL};
use crate::api::emitter;
use crate::app::AppContext;
use crate::system::work_area;

fn animation_duration(app_handle: &AppHandle) -> Duration {
    Duration::from_millis(AppContext::of(app_handle).config.animation.duration_ms)
}

pub fn toggle_visibility(app_handle: &AppHandle) {
    let transition = AppContext::of(app_handle).with_session(|session| session.toggle_visibility());
    apply_transition(app_handle, transition);
}

pub fn fullscreen_changed(app_handle: &AppHandle, active: bool) {
    let transition = AppContext::of(app_handle)
        .with_session(|session| session.fullscreen_changed(active));
    if let Some(transition) = transition {
        apply_transition(app_handle, transition);
    }
}

/// Shows the overlay if the user had hidden it.
pub fn reveal(app_handle: &AppHandle) {
    let context = AppContext::of(app_handle);
    let transition = context.with_session(|session| {
        (session.visibility() == VisibilityState::HiddenByUser).then(|| session.toggle_visibility())
    });
    if let Some(transition) = transition {
        apply_transition(app_handle, transition);
    }
}

fn apply_transition(app_handle: &AppHandle, transition: Transition) {
    if transition.became_visible() {
        show_button(app_handle);
    } else if transition.became_hidden() {
        hide_all(app_handle);
        emitter::emit_expanded(app_handle, false);
    }
    emitter::emit_visibility(app_handle, transition.to);
}

fn show_button(app_handle: &AppHandle) {
    // the work area may have changed while hidden, e.g. a game switched resolution
    let work_area = work_area::current(app_handle);
    let frame = AppContext::of(app_handle).with_session(|session| {
        session.clamp_into(&work_area);
        session.button().frame(&work_area)
    });
    if let Some(button) = app_handle.get_webview_window(BUTTON_LABEL) {
        set_frame(&button, frame);
        if let Err(e) = button.show() {
            error!("[show_button] show failed: {}", e);
        }
    }
}

fn hide_all(app_handle: &AppHandle) {
    let context = AppContext::of(app_handle);
    for label in [BUTTON_LABEL, NOTES_LABEL] {
        context.animator.cancel(label);
        if let Some(window) = app_handle.get_webview_window(label) {
            if let Err(e) = window.hide() {
                error!("[hide_all] hide {} failed: {}", label, e);
            }
        }
    }
}

/// Button click: slides the notes window out or back in.
pub fn toggle_notes(app_handle: &AppHandle) {
    let work_area = work_area::current(app_handle);
    let outcome = AppContext::of(app_handle).with_session(|session| {
        session.toggle_notes().map(|expanded| {
            (
                expanded,
                session.button().notes_tucked_frame(&work_area),
                session.button().notes_frame(&work_area),
            )
        })
    });
    match outcome {
        None => debug!("[toggle_notes] ignored while hidden"),
        Some((true, tucked, open)) => expand(app_handle, tucked, open),
        Some((false, tucked, _)) => collapse_to(app_handle, tucked),
    }
}

/// Escape key or close request on the notes window.
pub fn collapse_notes(app_handle: &AppHandle) {
    let work_area = work_area::current(app_handle);
    let tucked = AppContext::of(app_handle).with_session(|session| {
        session
            .collapse_notes()
            .then(|| session.button().notes_tucked_frame(&work_area))
    });
    if let Some(tucked) = tucked {
        collapse_to(app_handle, tucked);
    }
}

fn expand(app_handle: &AppHandle, tucked: Rect, open: Rect) {
    let Some(notes) = app_handle.get_webview_window(NOTES_LABEL) else {
        error!("[expand] notes window not found");
        return;
    };
    set_frame(&notes, tucked);
    if let Err(e) = notes.show() {
        error!("[expand] show notes failed: {}", e);
    }
    if let Err(e) = notes.set_focus() {
        error!("[expand] focus notes failed: {}", e);
    }
    emitter::emit_expanded(app_handle, true);
    animate(
        app_handle,
        NOTES_LABEL,
        Tween::new(tucked, open, animation_duration(app_handle)),
        None,
    );
}

fn collapse_to(app_handle: &AppHandle, tucked: Rect) {
    let Some(notes) = app_handle.get_webview_window(NOTES_LABEL) else {
        return;
    };
    emitter::emit_expanded(app_handle, false);
    let from = window_frame(&notes).unwrap_or(tucked);
    let handle = app_handle.clone();
    animate(
        app_handle,
        NOTES_LABEL,
        Tween::new(from, tucked, animation_duration(app_handle)),
        Some(Box::new(move || {
            let expanded = AppContext::of(&handle).with_session(|session| session.button().is_expanded());
            if !expanded {
                if let Some(notes) = handle.get_webview_window(NOTES_LABEL) {
                    if let Err(e) = notes.hide() {
                        error!("[collapse_to] hide notes failed: {}", e);
                    }
                }
            }
        })),
    );
}

pub fn drag_to(app_handle: &AppHandle, pointer_x: i32, pointer_y: i32) {
    let work_area = work_area::current(app_handle);
    let context = AppContext::of(app_handle);
    let moved = context.with_session(|session| {
        session.drag_to(pointer_x, pointer_y, &work_area).map(|frame| {
            let notes = session
                .button()
                .is_expanded()
                .then(|| session.button().notes_frame(&work_area));
            (frame, notes)
        })
    });
    let Some((frame, notes_frame)) = moved else {
        return;
    };

    context.animator.cancel(BUTTON_LABEL);
    if let Some(button) = app_handle.get_webview_window(BUTTON_LABEL) {
        move_window(&button, frame);
    }
    if let Some(notes_frame) = notes_frame {
        context.animator.cancel(NOTES_LABEL);
        if let Some(notes) = app_handle.get_webview_window(NOTES_LABEL) {
            move_window(&notes, notes_frame);
        }
    }
}

/// Snaps the button to the nearer edge and re-seats the notes window once
/// the snap has finished.
pub fn end_drag(app_handle: &AppHandle) {
    let work_area = work_area::current(app_handle);
    let Some(release) = AppContext::of(app_handle).with_session(|session| session.end_drag(&work_area)) else {
        return;
    };
    if !release.moved() {
        // plain click; the frontend follows up with toggle_notes
        return;
    }
    debug!("[end_drag] snap to {:?}", release.side);

    let handle = app_handle.clone();
    animate(
        app_handle,
        BUTTON_LABEL,
        Tween::new(release.from, release.to, animation_duration(app_handle)),
        Some(Box::new(move || {
            let work_area = work_area::current(&handle);
            let notes_frame = AppContext::of(&handle).with_session(|session| {
                let button = session.button();
                if button.is_expanded() {
                    button.notes_frame(&work_area)
                } else {
                    button.notes_tucked_frame(&work_area)
                }
            });
            if let Some(notes) = handle.get_webview_window(NOTES_LABEL) {
                move_window(&notes, notes_frame);
            }
        })),
    );
}

/// Resizes both windows after the button window moved to a display with a
/// different scale factor.
pub fn rescale(app_handle: &AppHandle, scale_factor: f64) {
    let work_area = work_area::current(app_handle);
    let context = AppContext::of(app_handle);
    let metrics = Metrics::from_config(&context.config, scale_factor);
    let (button_frame, notes_frame) = context.with_session(|session| {
        session.set_metrics(metrics, &work_area);
        let button = session.button();
        let notes = if button.is_expanded() {
            button.notes_frame(&work_area)
        } else {
            button.notes_tucked_frame(&work_area)
        };
        (button.frame(&work_area), notes)
    });
    debug!("[rescale] scale factor {}, button {:?}", scale_factor, button_frame);

    for (label, frame) in [(BUTTON_LABEL, button_frame), (NOTES_LABEL, notes_frame)] {
        context.animator.cancel(label);
        if let Some(window) = app_handle.get_webview_window(label) {
            set_frame(&window, frame);
        }
    }
}
