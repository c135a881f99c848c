//! Visibility state machine over hotkey presses and fullscreen changes.
//!
//! Hiding by the user takes precedence over hiding for fullscreen: a
//! fullscreen change never reveals an overlay the user hid, and a hotkey
//! press while hidden for fullscreen records the user's intent to hide.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityState {
    Visible,
    HiddenByUser,
    HiddenByFullscreen,
}

impl VisibilityState {
    pub fn is_visible(self) -> bool {
        self == VisibilityState::Visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: VisibilityState,
    pub to: VisibilityState,
}

impl Transition {
    pub fn became_visible(&self) -> bool {
        !self.from.is_visible() && self.to.is_visible()
    }

    pub fn became_hidden(&self) -> bool {
        self.from.is_visible() && !self.to.is_visible()
    }
}

#[derive(Debug, Clone)]
pub struct VisibilityController {
    state: VisibilityState,
    fullscreen: bool,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityController {
    pub fn new() -> Self {
        Self {
            state: VisibilityState::Visible,
            fullscreen: false,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Hotkey press; always changes state.
    pub fn toggle(&mut self) -> Transition {
        let to = match self.state {
            VisibilityState::Visible | VisibilityState::HiddenByFullscreen => {
                VisibilityState::HiddenByUser
            }
            VisibilityState::HiddenByUser => VisibilityState::Visible,
        };
        self.move_to(to)
    }

    /// Fullscreen poll result. Repeated values are ignored.
    pub fn set_fullscreen(&mut self, active: bool) -> Option<Transition> {
        if active == self.fullscreen {
            return None;
        }
        self.fullscreen = active;

        let to = match (active, self.state) {
            (true, VisibilityState::Visible) => VisibilityState::HiddenByFullscreen,
            (false, VisibilityState::HiddenByFullscreen) => VisibilityState::Visible,
            _ => return None,
        };
        Some(self.move_to(to))
    }

    fn move_to(&mut self, to: VisibilityState) -> Transition {
        let from = std::mem::replace(&mut self.state, to);
        Transition { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VisibilityState::*;

    #[test]
    fn hotkey_twice_returns_to_visible() {
        let mut controller = VisibilityController::new();
        assert_eq!(controller.toggle().to, HiddenByUser);
        assert_eq!(controller.toggle().to, Visible);
    }

    #[test]
    fn fullscreen_hides_and_restores() {
        let mut controller = VisibilityController::new();
        let entered = controller.set_fullscreen(true).unwrap();
        assert!(entered.became_hidden());
        assert_eq!(controller.state(), HiddenByFullscreen);

        let exited = controller.set_fullscreen(false).unwrap();
        assert!(exited.became_visible());
        assert_eq!(controller.state(), Visible);
    }

    #[test]
    fn fullscreen_never_overrides_user_hide() {
        let mut controller = VisibilityController::new();
        controller.toggle();
        assert_eq!(controller.set_fullscreen(true), None);
        assert_eq!(controller.state(), HiddenByUser);
        assert_eq!(controller.set_fullscreen(false), None);
        assert_eq!(controller.state(), HiddenByUser);
    }

    #[test]
    fn hotkey_during_fullscreen_hide_becomes_user_hide() {
        let mut controller = VisibilityController::new();
        controller.set_fullscreen(true);
        let transition = controller.toggle();
        assert_eq!(transition, Transition { from: HiddenByFullscreen, to: HiddenByUser });

        controller.set_fullscreen(false);
        assert_eq!(controller.state(), HiddenByUser);
    }

    #[test]
    fn user_can_reveal_during_fullscreen() {
        let mut controller = VisibilityController::new();
        controller.toggle();
        controller.set_fullscreen(true);
        assert_eq!(controller.toggle().to, Visible);
        assert!(controller.is_fullscreen());

        // exit is a no-op, the next entry hides again
        assert_eq!(controller.set_fullscreen(false), None);
        assert_eq!(controller.set_fullscreen(true).map(|t| t.to), Some(HiddenByFullscreen));
    }

    #[test]
    fn repeated_fullscreen_reports_are_ignored() {
        let mut controller = VisibilityController::new();
        assert!(controller.set_fullscreen(true).is_some());
        assert_eq!(controller.set_fullscreen(true), None);
        assert_eq!(controller.state(), HiddenByFullscreen);
    }
}
