//! Minimize/restore height animation

use super::{to_delta, Curve, MINIMIZE_DURATION_MS};

/// Minimize/restore animation state
///
/// Holds only the timestamp of the last accepted minimize-flag transition.
/// Progress is a pure function of wall-clock time recomputed every frame, so
/// no scheduling or explicit completion step exists.
#[derive(Clone, Copy, Debug)]
pub struct MinimizeAnimation {
    /// Timestamp of the last accepted flag transition (ms)
    start_ms: f64,
}

impl Default for MinimizeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimizeAnimation {
    /// Create a settled animation
    ///
    /// The start time is seeded a full duration before time zero so the first
    /// sample is already at its endpoint and the initial display toggle is
    /// not rejected by the retrigger guard.
    pub fn new() -> Self {
        Self {
            start_ms: -(MINIMIZE_DURATION_MS as f64) - 1.0,
        }
    }

    /// Restart the animation at the given timestamp
    #[inline]
    pub fn restart(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
    }

    /// Timestamp of the last accepted transition
    #[inline]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Whether a new minimize request may be accepted
    ///
    /// Requests inside the animation window are rejected so the collapse
    /// cannot be retriggered mid-flight.
    #[inline]
    pub fn accepts_minimize(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms > MINIMIZE_DURATION_MS as f64
    }

    /// Visual height multiplier in [0, 1]
    ///
    /// Falling 1 -> 0 while minimized, rising 0 -> 1 while expanded, easing
    /// out over the fixed duration.
    pub fn progress(&self, minimized: bool, now_ms: f64) -> f32 {
        let t = to_delta(self.start_ms, MINIMIZE_DURATION_MS, now_ms);
        if minimized {
            Curve::OutQuart.dec(t)
        } else {
            Curve::OutQuart.inc(t)
        }
    }

    /// Check if the animation has reached its endpoint
    pub fn is_settled(&self, now_ms: f64) -> bool {
        to_delta(self.start_ms, MINIMIZE_DURATION_MS, now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_expanding() {
        let mut anim = MinimizeAnimation::new();
        anim.restart(1000.0);

        assert!((anim.progress(false, 1000.0) - 0.0).abs() < 0.001);
        let mid = anim.progress(false, 1150.0);
        assert!(mid > 0.0 && mid < 1.0);
        assert!((anim.progress(false, 1400.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_minimizing() {
        let mut anim = MinimizeAnimation::new();
        anim.restart(1000.0);

        assert!((anim.progress(true, 1000.0) - 1.0).abs() < 0.001);
        let mid = anim.progress(true, 1150.0);
        assert!(mid > 0.0 && mid < 1.0);
        assert!((anim.progress(true, 1400.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_fresh_animation_is_settled() {
        let anim = MinimizeAnimation::new();
        assert!(anim.is_settled(0.0));
        assert!((anim.progress(false, 0.0) - 1.0).abs() < 0.001);
        assert!((anim.progress(true, 0.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_minimize_guard_window() {
        let mut anim = MinimizeAnimation::new();
        assert!(anim.accepts_minimize(0.0));

        anim.restart(1000.0);
        assert!(!anim.accepts_minimize(1150.0));
        assert!(anim.accepts_minimize(1301.0));
    }
}
