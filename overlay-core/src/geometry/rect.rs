use serde::{Deserialize, Serialize};

/// Screen rectangle in physical pixels; `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// From Win32 style left/top/right/bottom edges.
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn with_position(&self, x: i32, y: i32) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Every edge of `self` is within `tolerance` pixels of the matching edge
    /// of `other`, or beyond it.
    pub fn covers(&self, other: &Rect, tolerance: i32) -> bool {
        self.x <= other.x + tolerance
            && self.y <= other.y + tolerance
            && self.right() >= other.right() - tolerance
            && self.bottom() >= other.bottom() - tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltrb_round_trips_edges() {
        let rect = Rect::from_ltrb(-8, -8, 1928, 1088);
        assert_eq!(rect, Rect::new(-8, -8, 1936, 1096));
        assert_eq!(rect.right(), 1928);
        assert_eq!(rect.bottom(), 1088);
    }

    #[test]
    fn covers_accepts_small_gaps_and_overhang() {
        let monitor = Rect::new(0, 0, 1920, 1080);
        assert!(Rect::from_ltrb(-8, -8, 1928, 1088).covers(&monitor, 10));
        assert!(Rect::from_ltrb(5, 0, 1915, 1080).covers(&monitor, 10));
        assert!(!Rect::from_ltrb(0, 0, 1920, 1040).covers(&monitor, 10));
    }

    #[test]
    fn contains_point_excludes_right_and_bottom_edges() {
        let screen = Rect::new(0, 0, 1920, 1080);
        assert!(screen.contains_point(0, 0));
        assert!(screen.contains_point(1919, 1079));
        assert!(!screen.contains_point(1920, 500));
        assert!(!screen.contains_point(-1, 500));
    }

    #[test]
    fn zero_sized_rect_is_empty() {
        assert!(Rect::new(10, 10, 0, 300).is_empty());
        assert!(!Rect::new(10, 10, 1, 1).is_empty());
    }
}
