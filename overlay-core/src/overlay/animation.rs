use std::time::Duration;

use crate::geometry::Rect;

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t + 1.0
}

/// Eased interpolation between two window frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Rect,
    pub to: Rect,
    pub duration: Duration,
}

impl Tween {
    pub fn new(from: Rect, to: Rect, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn sample(&self, elapsed: Duration) -> Rect {
        let t = ease_out_cubic(self.progress(elapsed));
        Rect::new(
            lerp(self.from.x, self.to.x, t),
            lerp(self.from.y, self.to.y, t),
            lerp(self.from.width, self.to.width, t),
            lerp(self.from.height, self.to.height, t),
        )
    }
}

fn lerp(from: i32, to: i32, t: f64) -> i32 {
    from + ((to - from) as f64 * t).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_front_loads_motion() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.8);
    }

    #[test]
    fn tween_starts_and_ends_on_its_frames() {
        let tween = Tween::new(
            Rect::new(1890, 120, 400, 500),
            Rect::new(1490, 120, 400, 500),
            Duration::from_millis(350),
        );
        assert_eq!(tween.sample(Duration::ZERO), tween.from);
        assert_eq!(tween.sample(Duration::from_millis(350)), tween.to);
        assert_eq!(tween.sample(Duration::from_secs(2)), tween.to);
        assert!(!tween.is_finished(Duration::from_millis(100)));

        let mid = tween.sample(Duration::from_millis(175));
        assert!(mid.x < 1890 && mid.x > 1490);
        assert_eq!(mid.y, 120);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tween = Tween::new(Rect::new(0, 0, 10, 10), Rect::new(50, 0, 10, 10), Duration::ZERO);
        assert_eq!(tween.sample(Duration::ZERO), tween.to);
        assert!(tween.is_finished(Duration::ZERO));
    }
}
