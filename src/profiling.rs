//! Frame profiling and the on-screen event log.
//!
//! [`ProfilingMetrics`] tracks frame timing and a handful of counters for the
//! visibility gate and the bottom bar. [`DebugLog`] keeps the last few event
//! lines for the debug page and forwards every line to the `log` facade, so
//! the same events show up in the terminal under `RUST_LOG=info`.
//!
//! ```ignore
//! let frame_start = Instant::now();
//! // ... update + draw ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Lines kept for the debug page.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Characters per stored line. Longer messages are truncated on screen only.
pub const LOG_LINE_LENGTH: usize = 38;

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing and interaction counters.
pub struct ProfilingMetrics {
    /// Total frame time (update + render + sleep)
    pub frame_time_us: u32,
    /// Time spent updating and drawing
    pub render_time_us: u32,
    /// Time spent sleeping to hold the frame rate
    pub sleep_time_us: u32,

    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    /// Frames rendered since startup
    pub total_frames: u64,
    /// Samples fed to the visibility gate
    pub gate_updates: u32,
    /// Times the bottom bar changed target visibility
    pub bar_toggles: u32,
    /// Times the FAB bounce was toggled
    pub fab_toggles: u32,
    /// List rows drawn in the last frame
    pub rows_drawn: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            gate_updates: 0,
            bar_toggles: 0,
            fab_toggles: 0,
            rows_drawn: 0,
            start_time: Instant::now(),
        }
    }

    /// Exponential moving average weight of the newest frame.
    const EMA_ALPHA: f32 = 0.1;

    /// Record timing for one frame.
    pub fn record_frame(&mut self, total_time: Duration, render_time: Duration, sleep_time: Duration) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Frames per second derived from the average frame time.
    pub fn fps(&self) -> u32 {
        match self.frame_time_avg_us() {
            0 => 0,
            avg => 1_000_000 / avg,
        }
    }

    #[inline]
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> {
        format_hms(self.uptime())
    }

    #[inline]
    pub const fn inc_gate_updates(&mut self) {
        self.gate_updates += 1;
    }

    #[inline]
    pub const fn inc_bar_toggles(&mut self) {
        self.bar_toggles += 1;
    }

    #[inline]
    pub const fn inc_fab_toggles(&mut self) {
        self.fab_toggles += 1;
    }

    #[inline]
    pub const fn set_rows_drawn(&mut self, n: u32) {
        self.rows_drawn = n;
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a duration as `HH:MM:SS`. Hours wrap at 100.
fn format_hms(elapsed: Duration) -> String<12> {
    let secs = elapsed.as_secs();
    let mut s = String::new();
    write!(s, "{:02}:{:02}:{:02}", (secs / 3600) % 100, (secs % 3600) / 60, secs % 60).ok();
    s
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of recent event lines.
///
/// Holds the last [`LOG_BUFFER_SIZE`] lines; the oldest is dropped on overflow.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Record an event line and forward it to the logger.
    pub fn push(&mut self, msg: &str) {
        log::info!("{msg}");

        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
