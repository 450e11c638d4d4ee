//! Scroll-visibility animation with a hysteresis band

use crate::tween::{Ease, Timeline, Tween};
use podium_core::POP_START_SCALE;

/// Fraction of viewport height the container top must cross to enter
pub const ENTER_FRACTION: f32 = 0.8;
/// Fraction of viewport height the container bottom crosses when leaving
pub const EXIT_FRACTION: f32 = 0.2;
/// Pop-in / pop-out duration in seconds
pub const POP_DURATION: f32 = 1.1;

/// Where the container sits relative to the band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    /// Not yet scrolled to: container top still below the enter line
    Above,
    /// Inside the band: visible
    Within,
    /// Scrolled past: container bottom above the exit line
    Below,
}

/// A pair of distinct enter/exit thresholds
///
/// Two thresholds instead of one crossing point, so small scroll jitter at
/// a boundary cannot toggle the animation rapidly.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityBand {
    pub enter_fraction: f32,
    pub exit_fraction: f32,
}

impl VisibilityBand {
    pub fn new(enter_fraction: f32, exit_fraction: f32) -> Self {
        Self {
            enter_fraction,
            exit_fraction,
        }
    }

    /// Classify container bounds (viewport-relative, y growing downward)
    pub fn classify(&self, top: f32, bottom: f32, viewport_height: f32) -> BandPosition {
        if top > self.enter_fraction * viewport_height {
            BandPosition::Above
        } else if bottom < self.exit_fraction * viewport_height {
            BandPosition::Below
        } else {
            BandPosition::Within
        }
    }
}

impl Default for VisibilityBand {
    fn default() -> Self {
        Self::new(ENTER_FRACTION, EXIT_FRACTION)
    }
}

/// Drives the model's pop-in/pop-out scale from scroll position
///
/// Toggle semantics in both scroll directions: entering the band plays the
/// pop-in, leaving it (either way) plays the pop-out. Interrupting a running
/// animation restarts from the current value toward the new goal. Scrolling
/// back above the entry threshold snaps the scale to the near-zero start so
/// a later re-entry always replays the full pop-in.
#[derive(Debug)]
pub struct ScrollAnimator {
    band: VisibilityBand,
    position: BandPosition,
    scale: Tween,
    /// Responsive target scale; `None` until the model is installed
    target: Option<f32>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self {
            band: VisibilityBand::default(),
            position: BandPosition::Above,
            scale: Tween::idle(POP_START_SCALE),
            target: None,
        }
    }

    pub fn position(&self) -> BandPosition {
        self.position
    }

    /// Current animated scale
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Activate once the model exists; pops in immediately if already visible
    pub fn set_target(&mut self, timeline: &Timeline, target: f32) {
        self.target = Some(target);
        if self.position == BandPosition::Within {
            timeline.start(&mut self.scale, target, POP_DURATION, Ease::BackOut);
        }
    }

    /// React to a scroll-derived container position change
    ///
    /// A no-op until a target scale exists (no model loaded yet), except for
    /// tracking which side of the band the container is on.
    pub fn on_scroll(
        &mut self,
        timeline: &Timeline,
        top: f32,
        bottom: f32,
        viewport_height: f32,
    ) {
        let next = self.band.classify(top, bottom, viewport_height);
        if next == self.position {
            return;
        }
        self.position = next;

        let Some(target) = self.target else {
            return;
        };
        match next {
            BandPosition::Within => {
                timeline.start(&mut self.scale, target, POP_DURATION, Ease::BackOut);
            }
            BandPosition::Below => {
                timeline.start(&mut self.scale, POP_START_SCALE, POP_DURATION, Ease::QuadIn);
            }
            BandPosition::Above => {
                // Reset so re-entry replays the full pop-in
                self.scale.snap_to(POP_START_SCALE);
            }
        }
    }

    /// Advance the animation and return the scale to apply this frame
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.scale.advance(dt)
    }
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VH: f32 = 1000.0;

    fn visible_bounds() -> (f32, f32) {
        (400.0, 1400.0)
    }

    fn above_bounds() -> (f32, f32) {
        (900.0, 1900.0)
    }

    fn below_bounds() -> (f32, f32) {
        (-900.0, 100.0)
    }

    #[test]
    fn test_band_classification() {
        let band = VisibilityBand::default();
        assert_eq!(band.classify(900.0, 1900.0, VH), BandPosition::Above);
        assert_eq!(band.classify(400.0, 1400.0, VH), BandPosition::Within);
        assert_eq!(band.classify(-900.0, 100.0, VH), BandPosition::Below);
    }

    #[test]
    fn test_inert_without_model() {
        let timeline = Timeline::new(false);
        let mut animator = ScrollAnimator::new();
        let (top, bottom) = visible_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        assert_eq!(animator.position(), BandPosition::Within);
        assert_relative_eq!(animator.advance(2.0), POP_START_SCALE);
    }

    #[test]
    fn test_pop_in_on_enter_and_reverse_on_leave() {
        let timeline = Timeline::new(false);
        let mut animator = ScrollAnimator::new();
        animator.set_target(&timeline, 1.3);

        let (top, bottom) = visible_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        let settled = animator.advance(POP_DURATION + 0.1);
        assert_relative_eq!(settled, 1.3);

        // Scrolling past the exit line shrinks back toward the start scale
        let (top, bottom) = below_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        let settled = animator.advance(POP_DURATION + 0.1);
        assert_relative_eq!(settled, POP_START_SCALE);
    }

    #[test]
    fn test_reentry_replays_from_start_scale() {
        let timeline = Timeline::new(false);
        let mut animator = ScrollAnimator::new();
        animator.set_target(&timeline, 1.4);

        // Enter, advance partway through the pop-in
        let (top, bottom) = visible_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        let partial = animator.advance(0.3);
        assert!(partial > POP_START_SCALE);

        // Back above the entry threshold: snap to the start scale
        let (top, bottom) = above_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        assert_relative_eq!(animator.scale(), POP_START_SCALE);

        // Forward again: the pop-in starts over from the start scale
        let (top, bottom) = visible_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        assert_relative_eq!(animator.scale(), POP_START_SCALE);
        let replayed = animator.advance(0.0);
        assert_relative_eq!(replayed, POP_START_SCALE);
    }

    #[test]
    fn test_interrupted_exit_retargets_from_current_value() {
        let timeline = Timeline::new(false);
        let mut animator = ScrollAnimator::new();
        animator.set_target(&timeline, 1.3);

        let (top, bottom) = visible_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        animator.advance(POP_DURATION + 0.1);

        // Leave, shrink partway, then re-enter mid-animation
        let (top, bottom) = below_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        let mid = animator.advance(0.4);
        assert!(mid < 1.3 && mid > POP_START_SCALE);

        let (top, bottom) = visible_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);
        // Restart from the interrupted value, not from the start scale
        assert_relative_eq!(animator.scale(), mid);
        let settled = animator.advance(POP_DURATION + 0.1);
        assert_relative_eq!(settled, 1.3);
    }

    #[test]
    fn test_model_installed_while_visible_pops_in() {
        let timeline = Timeline::new(false);
        let mut animator = ScrollAnimator::new();
        let (top, bottom) = visible_bounds();
        animator.on_scroll(&timeline, top, bottom, VH);

        animator.set_target(&timeline, 1.1);
        let settled = animator.advance(POP_DURATION + 0.1);
        assert_relative_eq!(settled, 1.1);
    }

    #[test]
    fn test_jitter_at_single_threshold_does_not_toggle() {
        let timeline = Timeline::new(false);
        let mut animator = ScrollAnimator::new();
        animator.set_target(&timeline, 1.3);

        // Enter the band, settle
        animator.on_scroll(&timeline, 700.0, 1700.0, VH);
        animator.advance(POP_DURATION + 0.1);

        // Jitter around the enter line while well clear of the exit line
        animator.on_scroll(&timeline, 790.0, 1790.0, VH);
        assert_eq!(animator.position(), BandPosition::Within);
        assert_relative_eq!(animator.scale(), 1.3);
    }
}
