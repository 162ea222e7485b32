//! Debug/profiling page rendering.
//!
//! Displays frame timing, interaction counters, the bar visibility state, and
//! the recent event log. Toggled with `F1` from any page after the splash.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │ DEBUG   UP 00:01:23         60 FPS │
//! ├────────────────────────────────────┤
//! │ TIMING           │ EVENTS          │
//! │ Frame:  16.0ms   │ Frames: 5012    │
//! │ Render: 0.4ms    │ Gate:   312     │
//! │ Sleep:  15.6ms   │ Bar:    14      │
//! │ Min:    15.9ms   │ FAB:    3       │
//! │ Max:    18.2ms   │ Rows:   10      │
//! │ Avg:    16.1ms   │                 │
//! │ Bar: hidden  up: no                │
//! ├────────────────────────────────────┤
//! │ > Page: Expressive Docked FAB      │
//! │ > Bar hidden                       │
//! │ > _                                │
//! └────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};
use heapless::String;

use crate::{
    colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW},
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
    profiling::{DebugLog, ProfilingMetrics},
    scroll::VisibilityState,
    styles::LOG_STYLE,
    widgets::primitives::{draw_divider, fill_rect},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Header Y position (text baseline)
const HEADER_Y: i32 = 12;

/// Y position of divider below header
const HEADER_DIVIDER_Y: i32 = 18;

/// Y position where stats section headers start
const SECTION_HEADER_Y: i32 = 30;

/// Y position where stats values start
const STATS_Y: i32 = 44;

/// Y position of the visibility state line
const VISIBILITY_Y: i32 = 128;

/// Y position of divider above log
const LOG_DIVIDER_Y: i32 = 138;

/// Y position where log terminal starts
const LOG_Y: i32 = 152;

/// Height of each log line
const LOG_LINE_HEIGHT: i32 = 12;

/// X position for left column (frame timing)
const COL1_X: i32 = 4;

/// X position for right column (event counters)
const COL2_X: i32 = 124;

/// Line height for stats
const STAT_LINE_HEIGHT: i32 = 13;

// =============================================================================
// Styles
// =============================================================================

const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);

const SECTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Min/max/avg and the visibility line
const HIGHLIGHT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, YELLOW);

const LOG_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, ORANGE);

/// Terminal background (very dark green tint)
const TERMINAL_BG: Rgb565 = Rgb565::new(1, 2, 1);

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug/profiling page.
///
/// `visibility` is the gate output when the docked FAB demo is open.
pub fn draw_debug_page<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    visibility: Option<VisibilityState>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    draw_header(display, metrics);
    draw_divider(display, HEADER_DIVIDER_Y, 2, SCREEN_WIDTH as i32 - 2, GRAY);

    Text::new("TIMING", Point::new(COL1_X, SECTION_HEADER_Y), SECTION_STYLE)
        .draw(display)
        .ok();
    Text::new("EVENTS", Point::new(COL2_X, SECTION_HEADER_Y), SECTION_STYLE)
        .draw(display)
        .ok();

    draw_timing_column(display, metrics);
    draw_event_column(display, metrics);
    draw_visibility_line(display, visibility);

    draw_divider(display, LOG_DIVIDER_Y, 2, SCREEN_WIDTH as i32 - 2, GRAY);
    draw_log_terminal(display, log);
}

/// Title, uptime, and FPS.
fn draw_header<D>(display: &mut D, metrics: &ProfilingMetrics)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new("DEBUG", Point::new(COL1_X, HEADER_Y), HEADER_STYLE)
        .draw(display)
        .ok();

    let mut s: String<16> = String::new();
    let _ = write!(s, "UP {}", metrics.uptime_string());
    Text::new(&s, Point::new(52, HEADER_Y), VALUE_STYLE).draw(display).ok();

    let mut s: String<12> = String::new();
    let _ = write!(s, "{} FPS", metrics.fps());
    Text::new(&s, Point::new(178, HEADER_Y), VALUE_STYLE).draw(display).ok();
}

fn ms(us: u32) -> f32 {
    us as f32 / 1000.0
}

/// Frame timing statistics (left column).
fn draw_timing_column<D>(display: &mut D, metrics: &ProfilingMetrics)
where
    D: DrawTarget<Color = Rgb565>,
{
    let min_us = if metrics.frame_time_min_us == u32::MAX {
        0
    } else {
        metrics.frame_time_min_us
    };
    let rows: [(&str, u32, MonoTextStyle<'static, Rgb565>); 6] = [
        ("Frame: ", metrics.frame_time_us, VALUE_STYLE),
        ("Render:", metrics.render_time_us, VALUE_STYLE),
        ("Sleep: ", metrics.sleep_time_us, VALUE_STYLE),
        ("Min:   ", min_us, HIGHLIGHT_STYLE),
        ("Max:   ", metrics.frame_time_max_us, HIGHLIGHT_STYLE),
        ("Avg:   ", metrics.frame_time_avg_us(), HIGHLIGHT_STYLE),
    ];

    let mut y = STATS_Y;
    for (label, us, style) in rows {
        let mut s: String<20> = String::new();
        let _ = write!(s, "{label}{:.1}ms", ms(us));
        Text::new(&s, Point::new(COL1_X, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

/// Interaction counters (right column).
fn draw_event_column<D>(display: &mut D, metrics: &ProfilingMetrics)
where
    D: DrawTarget<Color = Rgb565>,
{
    let rows: [(&str, u64); 5] = [
        ("Frames:", metrics.total_frames),
        ("Gate:  ", u64::from(metrics.gate_updates)),
        ("Bar:   ", u64::from(metrics.bar_toggles)),
        ("FAB:   ", u64::from(metrics.fab_toggles)),
        ("Rows:  ", u64::from(metrics.rows_drawn)),
    ];

    let mut y = STATS_Y;
    for (label, value) in rows {
        let mut s: String<20> = String::new();
        let _ = write!(s, "{label}{value}");
        Text::new(&s, Point::new(COL2_X, y), VALUE_STYLE).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

/// Current gate output, or a placeholder outside the demo.
fn draw_visibility_line<D>(display: &mut D, visibility: Option<VisibilityState>)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut s: String<32> = String::new();
    match visibility {
        Some(state) => {
            let _ = write!(
                s,
                "Bar: {}  up: {}",
                if state.bar_visible { "shown" } else { "hidden" },
                if state.is_scrolling_up { "yes" } else { "no" }
            );
        }
        None => {
            let _ = s.push_str("Bar: -");
        }
    }
    Text::new(&s, Point::new(COL1_X, VISIBILITY_Y), HIGHLIGHT_STYLE)
        .draw(display)
        .ok();
}

/// Event log terminal (bottom section).
fn draw_log_terminal<D>(display: &mut D, log: &DebugLog)
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(
        display,
        Rectangle::new(
            Point::new(0, LOG_DIVIDER_Y + 2),
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
        ),
        TERMINAL_BG,
    );

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), LOG_STYLE).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), LOG_TEXT_STYLE)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    // Cursor on the next line
    Text::new("> _", Point::new(COL1_X, y), LOG_STYLE).draw(display).ok();
}
