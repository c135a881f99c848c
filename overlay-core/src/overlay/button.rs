use crate::config::Config;
use crate::geometry::Rect;

use super::position::{ButtonPosition, EdgeSide};

/// Button and notes window sizes in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub button_width: i32,
    pub button_height: i32,
    pub notes_width: i32,
    pub notes_height: i32,
}

impl Metrics {
    pub fn from_config(config: &Config, scale_factor: f64) -> Self {
        let scale = |logical: u32| (logical as f64 * scale_factor).round() as i32;
        let (notes_width, notes_height) = config.notes_window.effective_size();
        Self {
            button_width: scale(config.button.width),
            button_height: scale(config.button.height),
            notes_width: scale(notes_width),
            notes_height: scale(notes_height),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_pointer_y: i32,
    start_offset_y: i32,
    // button left edge while it follows the pointer
    x: Option<i32>,
}

/// Result of releasing a drag: the button snaps from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRelease {
    pub from: Rect,
    pub to: Rect,
    pub side: EdgeSide,
    pub side_changed: bool,
}

impl DragRelease {
    /// False for a press and release without motion, i.e. a click.
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Edge-docked button with a collapsed and an expanded (notes open) state.
///
/// All frames are computed against a work area supplied by the caller, so the
/// model never talks to the OS.
#[derive(Debug, Clone)]
pub struct OverlayButton {
    metrics: Metrics,
    position: ButtonPosition,
    expanded: bool,
    drag: Option<Drag>,
}

impl OverlayButton {
    pub fn new(metrics: Metrics, offset_y: i32, side: EdgeSide) -> Self {
        Self {
            metrics,
            position: ButtonPosition { offset_y, side },
            expanded: false,
            drag: None,
        }
    }

    /// New sizes after a DPI change; the offset is re-clamped by the caller.
    pub fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
    }

    pub fn position(&self) -> ButtonPosition {
        self.position
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns whether the state changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        let changed = self.expanded != expanded;
        self.expanded = expanded;
        changed
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn clamp_offset(&self, work_area: &Rect, offset_y: i32) -> i32 {
        let max_y = work_area.bottom() - self.metrics.button_height;
        offset_y.min(max_y).max(work_area.y)
    }

    /// Pulls a stale offset back into the work area, e.g. after a
    /// resolution change.
    pub fn clamp_into(&mut self, work_area: &Rect) {
        self.position.offset_y = self.clamp_offset(work_area, self.position.offset_y);
    }

    fn edge_x(&self, work_area: &Rect) -> i32 {
        match self.position.side {
            EdgeSide::Right => work_area.right() - self.metrics.button_width,
            EdgeSide::Left => work_area.x,
        }
    }

    pub fn frame(&self, work_area: &Rect) -> Rect {
        let x = self
            .drag
            .and_then(|drag| drag.x)
            .unwrap_or_else(|| self.edge_x(work_area));
        Rect::new(
            x,
            self.clamp_offset(work_area, self.position.offset_y),
            self.metrics.button_width,
            self.metrics.button_height,
        )
    }

    /// Open notes frame: beside the button on the inner side, growing down
    /// from the button top, or up from the button bottom when there is no
    /// room below. Always inside the work area.
    pub fn notes_frame(&self, work_area: &Rect) -> Rect {
        let button = self.frame(work_area);
        let Metrics {
            button_width,
            button_height,
            notes_width,
            notes_height,
        } = self.metrics;

        let space_below = work_area.bottom() - button.bottom();
        let y = if space_below < notes_height {
            (button.y - notes_height + button_height).max(work_area.y)
        } else {
            button.y.min(work_area.bottom() - notes_height)
        };

        let preferred_x = match self.position.side {
            EdgeSide::Right => button.x - notes_width,
            EdgeSide::Left => button.x + button_width,
        };
        let x = preferred_x
            .min(work_area.right() - notes_width)
            .max(work_area.x);

        Rect::new(x, y, notes_width, notes_height)
    }

    /// Notes frame tucked behind the button, where the slide animation starts
    /// and ends.
    pub fn notes_tucked_frame(&self, work_area: &Rect) -> Rect {
        let button = self.frame(work_area);
        let open = self.notes_frame(work_area);
        let x = match self.position.side {
            EdgeSide::Right => button.x,
            EdgeSide::Left => button.x - open.width,
        };
        open.with_position(x, open.y)
    }

    pub fn begin_drag(&mut self, pointer_y: i32) {
        self.drag = Some(Drag {
            start_pointer_y: pointer_y,
            start_offset_y: self.position.offset_y,
            x: None,
        });
    }

    /// Moves the button with the pointer. Returns the new button frame, or
    /// `None` when no drag is in progress.
    pub fn drag_to(&mut self, pointer_x: i32, pointer_y: i32, work_area: &Rect) -> Option<Rect> {
        let drag = self.drag?;
        let delta = pointer_y - drag.start_pointer_y;
        self.position.offset_y = self.clamp_offset(work_area, drag.start_offset_y + delta);

        let max_x = work_area.right() - self.metrics.button_width;
        let x = (pointer_x - self.metrics.button_width / 2)
            .min(max_x)
            .max(work_area.x);
        self.drag = Some(Drag { x: Some(x), ..drag });
        Some(self.frame(work_area))
    }

    /// Drops a drag without snapping, e.g. when the overlay hides mid-drag
    /// and the pointer release never arrives. The button returns to its edge.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Ends the drag and snaps to the edge nearest the button centre.
    pub fn end_drag(&mut self, work_area: &Rect) -> Option<DragRelease> {
        let from = self.frame(work_area);
        self.drag.take()?;

        let side = if from.center_x() < work_area.center_x() {
            EdgeSide::Left
        } else {
            EdgeSide::Right
        };
        let side_changed = side != self.position.side;
        self.position.side = side;

        Some(DragRelease {
            from,
            to: self.frame(work_area),
            side,
            side_changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORK: Rect = Rect {
        x: 0,
        y: 0,
        width: 1920,
        height: 1040,
    };

    fn button(side: EdgeSide) -> OverlayButton {
        OverlayButton::new(Metrics::from_config(&Config::default(), 1.0), 120, side)
    }

    #[test]
    fn metrics_scale_with_dpi() {
        let metrics = Metrics::from_config(&Config::default(), 1.5);
        assert_eq!(metrics.button_width, 45);
        assert_eq!(metrics.button_height, 150);
        assert_eq!(metrics.notes_width, 600);
        assert_eq!(metrics.notes_height, 750);
    }

    #[test]
    fn frame_is_flush_with_chosen_edge() {
        assert_eq!(button(EdgeSide::Right).frame(&WORK), Rect::new(1890, 120, 30, 100));
        assert_eq!(button(EdgeSide::Left).frame(&WORK), Rect::new(0, 120, 30, 100));
    }

    #[test]
    fn offset_is_clamped_to_work_area() {
        let mut b = button(EdgeSide::Right);
        assert_eq!(b.clamp_offset(&WORK, -50), 0);
        assert_eq!(b.clamp_offset(&WORK, 5000), 940);
        b.begin_drag(0);
        b.drag_to(1900, 5000, &WORK);
        assert_eq!(b.position().offset_y, 940);
    }

    #[test]
    fn notes_open_downward_when_room_below() {
        let b = button(EdgeSide::Right);
        assert_eq!(b.notes_frame(&WORK), Rect::new(1490, 120, 400, 500));
        let left = button(EdgeSide::Left);
        assert_eq!(left.notes_frame(&WORK), Rect::new(30, 120, 400, 500));
    }

    #[test]
    fn notes_open_upward_near_bottom() {
        let b = OverlayButton::new(Metrics::from_config(&Config::default(), 1.0), 800, EdgeSide::Right);
        let notes = b.notes_frame(&WORK);
        // bottom edges line up
        assert_eq!(notes.bottom(), 900);
        assert_eq!(notes.y, 400);
    }

    #[test]
    fn tucked_notes_sit_behind_the_edge() {
        assert_eq!(button(EdgeSide::Right).notes_tucked_frame(&WORK).x, 1890);
        assert_eq!(button(EdgeSide::Left).notes_tucked_frame(&WORK).x, -400);
    }

    #[test]
    fn drag_follows_pointer_then_snaps_to_nearer_edge() {
        let mut b = button(EdgeSide::Right);
        b.begin_drag(170);
        let moving = b.drag_to(600, 370, &WORK).unwrap();
        assert_eq!(moving, Rect::new(585, 320, 30, 100));
        assert!(b.is_dragging());

        let release = b.end_drag(&WORK).unwrap();
        assert_eq!(release.from, moving);
        assert_eq!(release.to, Rect::new(0, 320, 30, 100));
        assert_eq!(release.side, EdgeSide::Left);
        assert!(release.side_changed);
        assert!(!b.is_dragging());
    }

    #[test]
    fn release_without_motion_keeps_side() {
        let mut b = button(EdgeSide::Right);
        b.begin_drag(150);
        let release = b.end_drag(&WORK).unwrap();
        assert_eq!(release.from, release.to);
        assert!(!release.side_changed);
        assert_eq!(b.end_drag(&WORK), None);
    }

    #[test]
    fn cancelled_drag_returns_to_edge_without_changing_side() {
        let mut b = button(EdgeSide::Right);
        b.begin_drag(170);
        b.drag_to(600, 370, &WORK);

        assert!(b.cancel_drag());

        assert_eq!(b.frame(&WORK), Rect::new(1890, 320, 30, 100));
        assert_eq!(b.position().side, EdgeSide::Right);
        assert!(!b.cancel_drag());
        assert_eq!(b.end_drag(&WORK), None);
    }

    #[test]
    fn click_release_does_not_move() {
        let mut b = button(EdgeSide::Left);
        b.begin_drag(150);
        assert!(!b.end_drag(&WORK).unwrap().moved());

        b.begin_drag(150);
        b.drag_to(1800, 150, &WORK);
        assert!(b.end_drag(&WORK).unwrap().moved());
    }

    #[test]
    fn new_metrics_resize_frames() {
        let mut b = button(EdgeSide::Right);
        b.set_metrics(Metrics::from_config(&Config::default(), 2.0));
        assert_eq!(b.frame(&WORK), Rect::new(1860, 120, 60, 200));
        assert_eq!(b.notes_frame(&WORK).width, 800);
    }

    #[test]
    fn drag_without_begin_is_ignored() {
        let mut b = button(EdgeSide::Right);
        assert_eq!(b.drag_to(10, 10, &WORK), None);
        assert_eq!(b.position().offset_y, 120);
    }
}
