//! Time-based animation primitives.
//!
//! All animations here are explicit functions of elapsed time or explicit
//! per-frame steps; nothing runs on its own. The main loop owns the clock and
//! feeds it in:
//!
//! - **[`Tween`]**: one-shot interpolation over a fixed duration (splash scale-in)
//! - **[`Oscillator`]**: reverse-repeating interpolation that runs forever
//!   (logo rotation, pulse, bounce)
//! - **[`Spring`]**: damped spring stepped per frame (FAB bounce)
//! - **[`SlideTransition`]**: reversible show/hide progress (bottom bar)
//!
//! # Reverse Repeat
//!
//! An oscillator plays its tween forward on even iterations and the same tween
//! backward in time on odd iterations:
//!
//! ```text
//! iteration 0: from ──ease──▶ to
//! iteration 1: to   ◀──ease── from   (time-reversed, same curve)
//! iteration 2: from ──ease──▶ to
//! ```
//!
//! Time math uses integer nanoseconds so period boundaries land exactly.

use std::time::Duration;

use crate::easing::{Easing, lerp};

// =============================================================================
// Spring Constants
// =============================================================================

/// Stiffness for slow, visible spring motion.
pub const STIFFNESS_LOW: f32 = 200.0;

/// Damping ratio that overshoots noticeably before settling.
pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;

/// Integration sub-step. Large frame deltas are split so the spring stays stable.
const SPRING_MAX_STEP: Duration = Duration::from_millis(4);

/// Spring is at rest when both displacement and velocity are below these.
const SPRING_REST_DISPLACEMENT: f32 = 0.001;
const SPRING_REST_VELOCITY: f32 = 0.01;

// =============================================================================
// Time Helpers
// =============================================================================

/// Linear fraction of `elapsed` over `duration`, clamped to 0.0-1.0.
///
/// A zero duration is treated as already complete.
pub fn fraction(elapsed: Duration, duration: Duration) -> f32 {
    let total = duration.as_nanos();
    if total == 0 {
        return 1.0;
    }
    let done = elapsed.as_nanos().min(total);
    (done as f64 / total as f64) as f32
}

// =============================================================================
// Tween
// =============================================================================

/// One-shot interpolation from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub const fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self { from, to, duration, easing }
    }

    /// Value at `elapsed`. Holds `to` once the duration has passed.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        lerp(self.from, self.to, self.easing.transform(fraction(elapsed, self.duration)))
    }

    /// Whether the tween has reached its end value.
    #[inline]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

// =============================================================================
// Oscillator
// =============================================================================

/// Infinite reverse-repeating tween between two bounds.
///
/// `period` is the duration of one direction (one half of a full back-and-forth).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub from: f32,
    pub to: f32,
    pub period: Duration,
    pub easing: Easing,
}

impl Oscillator {
    pub const fn new(from: f32, to: f32, period: Duration, easing: Easing) -> Self {
        Self { from, to, period, easing }
    }

    /// Build from a `(from, to)` pair, as stored in config.
    pub const fn between(range: (f32, f32), period: Duration, easing: Easing) -> Self {
        Self::new(range.0, range.1, period, easing)
    }

    /// Value at `elapsed` since the oscillation started.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let period = self.period.as_nanos();
        if period == 0 {
            return self.to;
        }
        let elapsed = elapsed.as_nanos();
        let iteration = elapsed / period;
        let frac = ((elapsed % period) as f64 / period as f64) as f32;

        // Odd iterations play the same tween backwards in time
        let forward = if iteration % 2 == 0 { frac } else { 1.0 - frac };
        lerp(self.from, self.to, self.easing.transform(forward))
    }
}

// =============================================================================
// Spring
// =============================================================================

/// Damped spring with unit mass, stepped once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping_ratio: f32,
}

impl Spring {
    /// Create a spring at rest at `value`.
    pub const fn new(value: f32, stiffness: f32, damping_ratio: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness,
            damping_ratio,
        }
    }

    /// Move the rest point. The current value and velocity carry over.
    pub const fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[inline]
    pub const fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Whether the spring has settled at its target.
    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < SPRING_REST_DISPLACEMENT && self.velocity.abs() < SPRING_REST_VELOCITY
    }

    /// Advance the simulation by `dt`.
    ///
    /// Uses semi-implicit Euler in sub-steps of at most 4ms. Snaps to the
    /// target once at rest.
    pub fn step(&mut self, dt: Duration) {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let damping = 2.0 * self.damping_ratio * self.stiffness.sqrt();
        let mut remaining = dt;
        while !remaining.is_zero() {
            let h = remaining.min(SPRING_MAX_STEP);
            remaining -= h;
            let h = h.as_secs_f32();

            let displacement = self.value - self.target;
            let accel = -self.stiffness * displacement - damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

// =============================================================================
// Slide Transition
// =============================================================================

/// Reversible enter/exit transition.
///
/// Tracks a linear progress between 0.0 (fully hidden) and 1.0 (fully shown).
/// Changing direction mid-slide continues from the current position rather than
/// restarting, so the element never jumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTransition {
    progress: f32,
    visible: bool,
    duration: Duration,
    easing: Easing,
}

impl SlideTransition {
    /// Create a transition already settled in the given state.
    pub const fn new(visible: bool, duration: Duration, easing: Easing) -> Self {
        Self {
            progress: if visible { 1.0 } else { 0.0 },
            visible,
            duration,
            easing,
        }
    }

    /// Set the target state.
    ///
    /// Returns `true` when the target changed.
    pub const fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            false
        } else {
            self.visible = visible;
            true
        }
    }

    /// Target state (where the transition is heading).
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance toward the target by `dt`.
    pub fn step(&mut self, dt: Duration) {
        let delta = fraction(dt, self.duration);
        self.progress = if self.visible {
            (self.progress + delta).min(1.0)
        } else {
            (self.progress - delta).max(0.0)
        };
    }

    /// Whether the transition has reached its target.
    pub fn is_settled(&self) -> bool {
        if self.visible { self.progress >= 1.0 } else { self.progress <= 0.0 }
    }

    /// Eased progress (0.0 hidden, 1.0 shown).
    pub fn progress(&self) -> f32 {
        self.easing.transform(self.progress)
    }

    /// Pixel offset for sliding an element of `extent` pixels out of view.
    ///
    /// 0 when fully shown, `extent` when fully hidden.
    pub fn offset(&self, extent: u32) -> i32 {
        ((1.0 - self.progress()) * extent as f32).round() as i32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    // -------------------------------------------------------------------------
    // Tween Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fraction_clamps() {
        assert_eq!(fraction(ms(0), ms(100)), 0.0);
        assert_eq!(fraction(ms(50), ms(100)), 0.5);
        assert_eq!(fraction(ms(100), ms(100)), 1.0);
        assert_eq!(fraction(ms(500), ms(100)), 1.0);
        assert_eq!(fraction(ms(5), Duration::ZERO), 1.0, "Zero duration is complete");
    }

    #[test]
    fn test_tween_end_points() {
        let tween = Tween::new(0.0, 1.0, ms(1000), Easing::FAST_OUT_SLOW_IN);
        assert_eq!(tween.value_at(ms(0)), 0.0);
        assert_eq!(tween.value_at(ms(1000)), 1.0);
        assert_eq!(tween.value_at(ms(4000)), 1.0, "Tween should hold its end value");
        assert!(!tween.is_finished(ms(999)));
        assert!(tween.is_finished(ms(1000)));
    }

    #[test]
    fn test_tween_is_eased() {
        let tween = Tween::new(0.0, 1.0, ms(1000), Easing::FAST_OUT_SLOW_IN);
        let linear = Tween::new(0.0, 1.0, ms(1000), Easing::Linear);
        assert!(
            tween.value_at(ms(500)) > linear.value_at(ms(500)),
            "Fast-out-slow-in should be ahead of linear at the midpoint"
        );
    }

    // -------------------------------------------------------------------------
    // Oscillator Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_oscillator_hits_bounds_at_half_periods() {
        let osc = Oscillator::new(-10.0, 10.0, ms(1000), Easing::FAST_OUT_SLOW_IN);
        assert_eq!(osc.value_at(ms(0)), -10.0);
        assert_eq!(osc.value_at(ms(1000)), 10.0);
        assert_eq!(osc.value_at(ms(2000)), -10.0);
        assert_eq!(osc.value_at(ms(3000)), 10.0);
    }

    #[test]
    fn test_oscillator_stays_in_range() {
        let osc = Oscillator::new(0.0, -20.0, ms(600), Easing::FAST_OUT_SLOW_IN);
        for t in (0..10_000).step_by(7) {
            let v = osc.value_at(ms(t));
            assert!((-20.0..=0.0).contains(&v), "Value {v} at {t}ms out of range");
        }
    }

    #[test]
    fn test_oscillator_reverse_is_time_mirrored() {
        let osc = Oscillator::new(1.0, 1.1, ms(800), Easing::FAST_OUT_SLOW_IN);
        // 200ms into the reverse leg mirrors 600ms into the forward leg
        let forward = osc.value_at(ms(600));
        let reverse = osc.value_at(ms(1000));
        assert!((forward - reverse).abs() < 1e-5, "{forward} vs {reverse}");
    }

    #[test]
    fn test_oscillator_zero_period() {
        let osc = Oscillator::new(0.0, 5.0, Duration::ZERO, Easing::Linear);
        assert_eq!(osc.value_at(ms(123)), 5.0);
    }

    // -------------------------------------------------------------------------
    // Spring Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_spring_at_rest_stays_put() {
        let mut spring = Spring::new(1.0, STIFFNESS_LOW, DAMPING_RATIO_MEDIUM_BOUNCY);
        spring.step(ms(16));
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_spring_overshoots_then_settles() {
        let mut spring = Spring::new(1.0, STIFFNESS_LOW, DAMPING_RATIO_MEDIUM_BOUNCY);
        spring.set_target(1.2);

        let mut peak = 1.0f32;
        let mut frames = 0;
        while !spring.is_at_rest() && frames < 1000 {
            spring.step(ms(16));
            peak = peak.max(spring.value());
            frames += 1;
        }

        assert!(peak > 1.2, "Bouncy spring should overshoot, peak was {peak}");
        assert!(frames < 1000, "Spring should settle, took {frames} frames");
        assert_eq!(spring.value(), 1.2, "Spring should snap to target when at rest");
    }

    #[test]
    fn test_spring_retarget_mid_flight() {
        let mut spring = Spring::new(1.0, STIFFNESS_LOW, DAMPING_RATIO_MEDIUM_BOUNCY);
        spring.set_target(1.2);
        spring.step(ms(50));
        let mid = spring.value();
        assert!(mid > 1.0 && mid < 1.3);

        spring.set_target(1.0);
        for _ in 0..500 {
            spring.step(ms(16));
        }
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_spring_large_step_is_stable() {
        let mut spring = Spring::new(0.0, STIFFNESS_LOW, DAMPING_RATIO_MEDIUM_BOUNCY);
        spring.set_target(1.0);
        spring.step(Duration::from_secs(10));
        assert!((spring.value() - 1.0).abs() < 0.01, "Value was {}", spring.value());
    }

    // -------------------------------------------------------------------------
    // Slide Transition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_slide_starts_settled() {
        let shown = SlideTransition::new(true, ms(300), Easing::Linear);
        assert!(shown.is_settled());
        assert_eq!(shown.offset(48), 0);

        let hidden = SlideTransition::new(false, ms(300), Easing::Linear);
        assert!(hidden.is_settled());
        assert_eq!(hidden.offset(48), 48);
    }

    #[test]
    fn test_slide_out_takes_duration() {
        let mut slide = SlideTransition::new(true, ms(300), Easing::Linear);
        assert!(slide.set_visible(false));
        assert!(!slide.set_visible(false), "Same target should not count as a change");

        slide.step(ms(150));
        assert_eq!(slide.offset(48), 24);
        assert!(!slide.is_settled());

        slide.step(ms(150));
        assert!(slide.is_settled());
        assert_eq!(slide.offset(48), 48);
    }

    #[test]
    fn test_slide_reversal_continues_from_current() {
        let mut slide = SlideTransition::new(true, ms(300), Easing::Linear);
        slide.set_visible(false);
        slide.step(ms(100));
        let partway = slide.offset(300);
        assert_eq!(partway, 100);

        slide.set_visible(true);
        slide.step(ms(50));
        assert_eq!(slide.offset(300), 50, "Reversal should not jump");
    }
}
