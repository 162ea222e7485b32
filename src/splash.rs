//! Splash sequence timing.
//!
//! The sequence is a one-shot scale-in of the logo followed by a dwell, after
//! which a completion callback fires exactly once. Three decorative loops
//! (rotation, pulse, bounce) run alongside for as long as the splash is on
//! screen and have no influence on completion.
//!
//! ```text
//! 0ms ──── entry scale 0→1 ────▶ 1000ms ──── dwell ────▶ 3000ms: on_finished()
//!      rotation ±10°, pulse 1.0↔1.1, bounce 0↔-20px  (until teardown)
//! ```
//!
//! # Teardown
//!
//! If the splash is dismissed before the dwell ends, the completion callback
//! must not run. The sequencer owns a [`CancellationToken`]; cancelling any
//! clone of it, or dropping the sequencer, drops the pending callback unrun.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::animations::{Oscillator, Tween};
use crate::config::{
    LOGO_BOUNCE_PERIOD,
    LOGO_BOUNCE_RANGE,
    LOGO_PULSE_PERIOD,
    LOGO_PULSE_RANGE,
    LOGO_ROTATION_PERIOD,
    LOGO_ROTATION_RANGE,
    SPLASH_DWELL,
    SPLASH_ENTRY_DURATION,
};
use crate::easing::Easing;

/// Where the sequence is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    /// Logo scaling in.
    Entering,
    /// Holding after the entry animation.
    Dwelling,
    /// Completion callback has fired.
    Finished,
    /// Torn down before completion; callback will never fire.
    Cancelled,
}

/// Logo transform for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoTransform {
    /// Entry scale multiplied by pulse.
    pub scale: f32,
    /// Rotation in degrees (clockwise on screen).
    pub rotation_deg: f32,
    /// Vertical offset in pixels (negative is up).
    pub translate_y: f32,
}

impl LogoTransform {
    /// Untransformed logo.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_deg: 0.0,
        translate_y: 0.0,
    };
}

/// Output of one [`SplashSequencer::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashFrame {
    pub transform: LogoTransform,
    pub phase: SplashPhase,
}

/// Drives the splash animation from explicit elapsed-time ticks.
pub struct SplashSequencer {
    entry: Tween,
    dwell: Duration,
    rotation: Oscillator,
    pulse: Oscillator,
    bounce: Oscillator,
    on_finished: Option<Box<dyn FnOnce()>>,
    cancel: CancellationToken,
    phase: SplashPhase,
}

impl SplashSequencer {
    /// Sequencer with the standard timings.
    pub fn new(on_finished: impl FnOnce() + 'static) -> Self {
        Self::with_timing(SPLASH_ENTRY_DURATION, SPLASH_DWELL, on_finished)
    }

    /// Sequencer with custom entry and dwell durations.
    pub fn with_timing(entry: Duration, dwell: Duration, on_finished: impl FnOnce() + 'static) -> Self {
        let easing = Easing::FAST_OUT_SLOW_IN;
        Self {
            entry: Tween::new(0.0, 1.0, entry, easing),
            dwell,
            rotation: Oscillator::between(LOGO_ROTATION_RANGE, LOGO_ROTATION_PERIOD, easing),
            pulse: Oscillator::between(LOGO_PULSE_RANGE, LOGO_PULSE_PERIOD, easing),
            bounce: Oscillator::between(LOGO_BOUNCE_RANGE, LOGO_BOUNCE_PERIOD, easing),
            on_finished: Some(Box::new(on_finished)),
            cancel: CancellationToken::new(),
            phase: SplashPhase::Entering,
        }
    }

    /// Token that tears the sequence down when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Cancel the sequence. No effect once finished.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[inline]
    pub const fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Earliest elapsed time at which completion can fire.
    #[inline]
    pub fn completion_time(&self) -> Duration {
        self.entry.duration + self.dwell
    }

    /// Logo transform at `elapsed`, independent of phase.
    pub fn transform_at(&self, elapsed: Duration) -> LogoTransform {
        LogoTransform {
            scale: self.entry.value_at(elapsed) * self.pulse.value_at(elapsed),
            rotation_deg: self.rotation.value_at(elapsed),
            translate_y: self.bounce.value_at(elapsed),
        }
    }

    /// Advance to `elapsed` (time since the splash was shown).
    ///
    /// Fires the completion callback on the first tick at or after
    /// [`completion_time`](Self::completion_time), unless cancelled first.
    pub fn tick(&mut self, elapsed: Duration) -> SplashFrame {
        if self.phase != SplashPhase::Finished && self.cancel.is_cancelled() {
            if self.on_finished.take().is_some() {
                log::debug!("splash cancelled at {}ms", elapsed.as_millis());
            }
            self.phase = SplashPhase::Cancelled;
        }

        if matches!(self.phase, SplashPhase::Entering | SplashPhase::Dwelling) {
            self.phase = if elapsed >= self.completion_time() {
                if let Some(on_finished) = self.on_finished.take() {
                    log::info!("splash finished after {}ms", elapsed.as_millis());
                    on_finished();
                }
                SplashPhase::Finished
            } else if self.entry.is_finished(elapsed) {
                SplashPhase::Dwelling
            } else {
                SplashPhase::Entering
            };
        }

        SplashFrame {
            transform: self.transform_at(elapsed),
            phase: self.phase,
        }
    }
}

impl Drop for SplashSequencer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    const fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Sequencer plus a shared counter of callback invocations.
    fn counted() -> (SplashSequencer, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (SplashSequencer::new(move || c.set(c.get() + 1)), count)
    }

    #[test]
    fn test_phases_follow_timeline() {
        let (mut splash, count) = counted();
        assert_eq!(splash.tick(ms(0)).phase, SplashPhase::Entering);
        assert_eq!(splash.tick(ms(999)).phase, SplashPhase::Entering);
        assert_eq!(splash.tick(ms(1000)).phase, SplashPhase::Dwelling);
        assert_eq!(splash.tick(ms(2999)).phase, SplashPhase::Dwelling);
        assert_eq!(count.get(), 0, "Must not fire before entry + dwell");
        assert_eq!(splash.tick(ms(3000)).phase, SplashPhase::Finished);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let (mut splash, count) = counted();
        for t in (0..10_000).step_by(16) {
            splash.tick(ms(t));
        }
        assert_eq!(count.get(), 1);
        assert_eq!(splash.phase(), SplashPhase::Finished);
    }

    #[test]
    fn test_late_first_tick_still_fires_once() {
        let (mut splash, count) = counted();
        splash.tick(ms(60_000));
        splash.tick(ms(60_016));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancel_suppresses_completion() {
        let (mut splash, count) = counted();
        splash.tick(ms(1500));
        splash.cancel();
        assert_eq!(splash.tick(ms(3000)).phase, SplashPhase::Cancelled);
        splash.tick(ms(5000));
        assert_eq!(count.get(), 0, "Cancelled splash must never complete");
    }

    #[test]
    fn test_cancel_through_token_clone() {
        let (mut splash, count) = counted();
        let token = splash.cancellation_token();
        token.cancel();
        splash.tick(ms(4000));
        assert_eq!(count.get(), 0);
        assert_eq!(splash.phase(), SplashPhase::Cancelled);
    }

    #[test]
    fn test_drop_cancels_and_never_fires() {
        let (splash, count) = counted();
        let token = splash.cancellation_token();
        drop(splash);
        assert!(token.is_cancelled());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_cancel_after_finish_keeps_finished() {
        let (mut splash, count) = counted();
        splash.tick(ms(3000));
        splash.cancel();
        assert_eq!(splash.tick(ms(3016)).phase, SplashPhase::Finished);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_custom_timing() {
        let (count, c) = {
            let count = Rc::new(Cell::new(0));
            (Rc::clone(&count), count)
        };
        let mut splash = SplashSequencer::with_timing(ms(100), ms(50), move || c.set(c.get() + 1));
        assert_eq!(splash.completion_time(), ms(150));
        splash.tick(ms(149));
        assert_eq!(count.get(), 0);
        splash.tick(ms(150));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_entry_scale_grows_to_pulse_range() {
        let splash = SplashSequencer::new(|| {});
        assert_eq!(splash.transform_at(ms(0)).scale, 0.0, "Logo starts invisible");
        let settled = splash.transform_at(ms(1600)).scale;
        assert!((1.0..=1.1).contains(&settled), "After entry, scale is the pulse: {settled}");
    }

    #[test]
    fn test_loops_keep_running_after_finish() {
        let (mut splash, _) = counted();
        let a = splash.tick(ms(3000)).transform;
        let b = splash.tick(ms(3300)).transform;
        assert_ne!(a, b, "Decorative loops continue after completion");
        assert!((-10.0..=10.0).contains(&b.rotation_deg));
        assert!((-20.0..=0.0).contains(&b.translate_y));
    }
}
