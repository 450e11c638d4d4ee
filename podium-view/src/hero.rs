//! Hero overlay animation
//!
//! The presentational layer over the scene: headline, subtext, and an
//! explore button, staggered in on a scroll trigger and reversed out when
//! the section leaves. The overlay consumes the same scroll geometry as the
//! model animator and exposes the `on_explore` callback to the host page.

use crate::scroll::{BandPosition, VisibilityBand};
use crate::tween::{Ease, Timeline, Tween};

/// Vertical offset (px) the text elements start from
const TEXT_RISE: f32 = 40.0;
/// Scale the button rests at while hidden
const BUTTON_HIDDEN_SCALE: f32 = 0.8;
/// The overlay enters when the section top crosses 60% of viewport height
const HERO_ENTER_FRACTION: f32 = 0.6;
/// The overlay leaves once the section bottom crosses the viewport top
const HERO_EXIT_FRACTION: f32 = 0.0;

/// A fading, shifting text element
#[derive(Debug)]
pub struct FadeElement {
    pub opacity: Tween,
    pub offset_y: Tween,
}

impl FadeElement {
    fn hidden() -> Self {
        Self {
            opacity: Tween::idle(0.0),
            offset_y: Tween::idle(TEXT_RISE),
        }
    }

    fn advance(&mut self, dt: f32) {
        self.opacity.advance(dt);
        self.offset_y.advance(dt);
    }
}

/// Idle attention pulse on the explore button
#[derive(Debug)]
struct Pulse {
    elapsed: f32,
    period: f32,
    amplitude: f32,
    enabled: bool,
}

impl Pulse {
    fn new() -> Self {
        Self {
            elapsed: 0.0,
            period: 0.7,
            amplitude: 0.08,
            enabled: false,
        }
    }

    fn advance(&mut self, dt: f32) {
        if self.enabled {
            self.elapsed += dt;
        }
    }

    /// Multiplier around 1.0, yoyo-ing between 1.0 and 1.0 + amplitude
    fn value(&self) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let phase = (self.elapsed / self.period) % 2.0;
        let t = if phase < 1.0 { phase } else { 2.0 - phase };
        // ease-in-out so the turnarounds are soft
        let eased = t * t * (3.0 - 2.0 * t);
        1.0 + self.amplitude * eased
    }
}

/// Hero overlay state machine
pub struct HeroOverlay {
    band: VisibilityBand,
    position: BandPosition,
    pub headline: FadeElement,
    pub subtext: FadeElement,
    pub button_opacity: Tween,
    pub button_scale: Tween,
    pulse: Pulse,
    on_explore: Option<Box<dyn FnMut()>>,
}

impl HeroOverlay {
    pub fn new() -> Self {
        Self {
            band: VisibilityBand::new(HERO_ENTER_FRACTION, HERO_EXIT_FRACTION),
            position: BandPosition::Above,
            headline: FadeElement::hidden(),
            subtext: FadeElement::hidden(),
            button_opacity: Tween::idle(0.0),
            button_scale: Tween::idle(BUTTON_HIDDEN_SCALE),
            pulse: Pulse::new(),
            on_explore: None,
        }
    }

    /// Register the host's explore callback
    pub fn set_on_explore(&mut self, callback: impl FnMut() + 'static) {
        self.on_explore = Some(Box::new(callback));
    }

    /// The user pressed the explore button
    pub fn explore(&mut self) {
        if let Some(callback) = self.on_explore.as_mut() {
            callback();
        }
    }

    /// React to scroll-derived section bounds
    pub fn on_scroll(&mut self, timeline: &Timeline, top: f32, bottom: f32, viewport_height: f32) {
        let next = self.band.classify(top, bottom, viewport_height);
        if next == self.position {
            return;
        }
        self.position = next;

        match next {
            BandPosition::Within => self.play_in(timeline),
            // Exit upward shifts text up, exit downward shifts it back down
            BandPosition::Below => self.play_out(timeline, -TEXT_RISE),
            BandPosition::Above => self.play_out(timeline, TEXT_RISE),
        }
    }

    fn play_in(&mut self, timeline: &Timeline) {
        timeline.start(&mut self.headline.opacity, 1.0, 0.8, Ease::QuadOut);
        timeline.start(&mut self.headline.offset_y, 0.0, 0.8, Ease::QuadOut);
        timeline.start_delayed(&mut self.subtext.opacity, 1.0, 0.7, Ease::QuadOut, 0.5);
        timeline.start_delayed(&mut self.subtext.offset_y, 0.0, 0.7, Ease::QuadOut, 0.5);
        timeline.start_delayed(&mut self.button_opacity, 1.0, 0.6, Ease::QuadOut, 1.0);
        timeline.start_delayed(&mut self.button_scale, 1.0, 0.6, Ease::QuadOut, 1.0);
        self.pulse.enabled = !timeline.reduced_motion();
    }

    fn play_out(&mut self, timeline: &Timeline, text_offset: f32) {
        timeline.start(&mut self.headline.opacity, 0.0, 0.5, Ease::QuadIn);
        timeline.start(&mut self.headline.offset_y, text_offset, 0.5, Ease::QuadIn);
        timeline.start(&mut self.subtext.opacity, 0.0, 0.5, Ease::QuadIn);
        timeline.start(&mut self.subtext.offset_y, text_offset, 0.5, Ease::QuadIn);
        timeline.start(&mut self.button_opacity, 0.0, 0.4, Ease::QuadIn);
        timeline.start(&mut self.button_scale, BUTTON_HIDDEN_SCALE, 0.4, Ease::QuadIn);
        self.pulse.enabled = false;
    }

    /// Advance all overlay animations
    pub fn advance(&mut self, dt: f32) {
        self.headline.advance(dt);
        self.subtext.advance(dt);
        self.button_opacity.advance(dt);
        self.button_scale.advance(dt);
        self.pulse.advance(dt);
    }

    /// Button scale including the idle pulse
    pub fn button_display_scale(&self) -> f32 {
        self.button_scale.value() * self.pulse.value()
    }
}

impl Default for HeroOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    const VH: f32 = 1000.0;

    #[test]
    fn test_staggered_entrance() {
        let timeline = Timeline::new(false);
        let mut hero = HeroOverlay::new();
        hero.on_scroll(&timeline, 500.0, 1500.0, VH);

        // Headline moves first; subtext and button wait out their delays
        hero.advance(0.4);
        assert!(hero.headline.opacity.value() > 0.0);
        assert_relative_eq!(hero.subtext.opacity.value(), 0.0);
        assert_relative_eq!(hero.button_opacity.value(), 0.0);

        hero.advance(2.0);
        assert_relative_eq!(hero.headline.opacity.value(), 1.0);
        assert_relative_eq!(hero.subtext.opacity.value(), 1.0);
        assert_relative_eq!(hero.button_opacity.value(), 1.0);
        assert_relative_eq!(hero.headline.offset_y.value(), 0.0);
        assert_relative_eq!(hero.button_scale.value(), 1.0);
    }

    #[test]
    fn test_exit_direction_shifts_text() {
        let timeline = Timeline::new(false);
        let mut hero = HeroOverlay::new();
        hero.on_scroll(&timeline, 500.0, 1500.0, VH);
        hero.advance(3.0);

        // Scroll past: text exits upward
        hero.on_scroll(&timeline, -1200.0, -200.0, VH);
        hero.advance(1.0);
        assert_relative_eq!(hero.headline.offset_y.value(), -TEXT_RISE);
        assert_relative_eq!(hero.headline.opacity.value(), 0.0);

        // Re-enter and scroll back above: text exits downward
        hero.on_scroll(&timeline, 500.0, 1500.0, VH);
        hero.advance(3.0);
        hero.on_scroll(&timeline, 700.0, 1700.0, VH);
        hero.advance(1.0);
        assert_relative_eq!(hero.headline.offset_y.value(), TEXT_RISE);
    }

    #[test]
    fn test_reduced_motion_applies_final_values_immediately() {
        let timeline = Timeline::new(true);
        let mut hero = HeroOverlay::new();
        hero.on_scroll(&timeline, 500.0, 1500.0, VH);

        // No intermediate frames: final state right after the trigger
        assert_relative_eq!(hero.headline.opacity.value(), 1.0);
        assert_relative_eq!(hero.headline.offset_y.value(), 0.0);
        assert_relative_eq!(hero.subtext.opacity.value(), 1.0);
        assert_relative_eq!(hero.button_opacity.value(), 1.0);
        assert_relative_eq!(hero.button_scale.value(), 1.0);
        // And the pulse stays off
        hero.advance(0.35);
        assert_relative_eq!(hero.button_display_scale(), 1.0);
    }

    #[test]
    fn test_pulse_oscillates_while_visible() {
        let timeline = Timeline::new(false);
        let mut hero = HeroOverlay::new();
        hero.on_scroll(&timeline, 500.0, 1500.0, VH);

        // Half a pulse period in: the button sits above its base scale
        hero.advance(0.35);
        assert!(hero.pulse.value() > 1.0);

        // Leaving the band stops the pulse
        hero.on_scroll(&timeline, -1200.0, -200.0, VH);
        hero.advance(1.0);
        assert_relative_eq!(hero.pulse.value(), 1.0);
    }

    #[test]
    fn test_explore_callback_fires() {
        let fired = Rc::new(Cell::new(0));
        let mut hero = HeroOverlay::new();
        let counter = fired.clone();
        hero.set_on_explore(move || counter.set(counter.get() + 1));

        hero.explore();
        hero.explore();
        assert_eq!(fired.get(), 2);
    }
}
