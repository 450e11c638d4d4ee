//! Tweened values and the per-controller animation context

/// Easing curves used by the showcase animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Overshoot-then-settle, for the pop-in
    BackOut,
    /// Accelerating, for exits
    QuadIn,
    /// Decelerating, for entrances
    QuadOut,
}

impl Ease {
    /// Map normalized time `t` in [0, 1] through the curve
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,
            Ease::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// A single animated scalar
///
/// Retargeting always restarts from the current value, so an interrupted
/// animation heads to its new goal without snapping.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    value: f32,
    elapsed: f32,
    duration: f32,
    delay: f32,
    ease: Ease,
    active: bool,
}

impl Tween {
    /// An inactive tween resting at `value`
    pub fn idle(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            value,
            elapsed: 0.0,
            duration: 0.0,
            delay: 0.0,
            ease: Ease::Linear,
            active: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop and rest at `value` immediately
    pub fn snap_to(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.value = value;
        self.active = false;
    }

    /// Animate from the current value toward `to`
    pub fn retarget(&mut self, to: f32, duration: f32, ease: Ease, delay: f32) {
        self.from = self.value;
        self.to = to;
        self.elapsed = 0.0;
        self.duration = duration;
        self.delay = delay;
        self.ease = ease;
        self.active = true;
    }

    /// Advance by `dt` seconds and return the current value
    pub fn advance(&mut self, dt: f32) -> f32 {
        if !self.active {
            return self.value;
        }
        self.elapsed += dt;
        let running = self.elapsed - self.delay;
        if running < 0.0 {
            return self.value;
        }
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (running / self.duration).min(1.0)
        };
        self.value = self.from + (self.to - self.from) * self.ease.apply(t);
        if t >= 1.0 {
            self.value = self.to;
            self.active = false;
        }
        self.value
    }
}

/// Per-controller animation context
///
/// Owns nothing global: each controller instance creates its own timeline
/// and drops it at teardown, so mounting several controllers never shares
/// ticker or plugin state. Carries the reduced-motion preference; when set,
/// every started tween snaps straight to its end value.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    reduced_motion: bool,
}

impl Timeline {
    pub fn new(reduced_motion: bool) -> Self {
        Self { reduced_motion }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Start a tween toward `to`, honoring reduced motion
    pub fn start(&self, tween: &mut Tween, to: f32, duration: f32, ease: Ease) {
        self.start_delayed(tween, to, duration, ease, 0.0);
    }

    /// Start a tween toward `to` after `delay` seconds
    pub fn start_delayed(&self, tween: &mut Tween, to: f32, duration: f32, ease: Ease, delay: f32) {
        if self.reduced_motion {
            tween.snap_to(to);
        } else {
            tween.retarget(to, duration, ease, delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::BackOut, Ease::QuadIn, Ease::QuadOut] {
            assert_relative_eq!(ease.apply(0.0), 0.0, epsilon = 1e-6);
            assert_relative_eq!(ease.apply(1.0), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_back_out_overshoots() {
        // The pop-in visibly overshoots its target before settling
        let peak = (0..100)
            .map(|i| Ease::BackOut.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_tween_reaches_target_and_stops() {
        let mut tween = Tween::idle(0.0);
        tween.retarget(2.0, 1.0, Ease::Linear, 0.0);
        assert_relative_eq!(tween.advance(0.5), 1.0);
        assert_relative_eq!(tween.advance(0.75), 2.0);
        assert!(!tween.is_active());
        // Further advancing holds the end value
        assert_relative_eq!(tween.advance(1.0), 2.0);
    }

    #[test]
    fn test_retarget_restarts_from_current_value() {
        let mut tween = Tween::idle(0.0);
        tween.retarget(1.0, 1.0, Ease::Linear, 0.0);
        tween.advance(0.5);
        tween.retarget(0.0, 1.0, Ease::Linear, 0.0);
        assert_relative_eq!(tween.value(), 0.5);
        assert_relative_eq!(tween.advance(0.5), 0.25);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut tween = Tween::idle(0.0);
        tween.retarget(1.0, 1.0, Ease::Linear, 0.5);
        assert_relative_eq!(tween.advance(0.4), 0.0);
        assert_relative_eq!(tween.advance(0.6), 0.5);
    }

    #[test]
    fn test_reduced_motion_snaps() {
        let timeline = Timeline::new(true);
        let mut tween = Tween::idle(0.0);
        timeline.start(&mut tween, 1.4, 1.1, Ease::BackOut);
        assert_relative_eq!(tween.value(), 1.4);
        assert!(!tween.is_active());
    }
}
