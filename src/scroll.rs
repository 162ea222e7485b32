//! Scroll tracking for the docked-FAB demo.
//!
//! Two pieces live here:
//!
//! - [`LazyListState`]: a pixel-space model of a list of fixed-height rows. It
//!   turns drags and flings into a scroll position and reports it the way a
//!   lazy list does, as the topmost visible row plus the pixels scrolled past
//!   that row's start.
//! - [`ScrollVisibilityGate`]: consumes those samples and decides whether the
//!   bottom app bar should be shown.
//!
//! # Visibility Rule
//!
//! ```text
//! index changed   -> scrolling_up = index  < prev_index
//! index unchanged -> scrolling_up = offset < prev_offset
//! bar_visible     =  scrolling_up || !in_progress
//! ```
//!
//! The bar hides only while a gesture is actively moving toward the end of
//! the list. When indices differ, the index comparison decides even if the
//! offsets alone would suggest the opposite direction (frame skips during
//! fast flings).

use std::time::Duration;

use crate::config::{FLING_DECAY, FLING_STOP_VELOCITY};

// =============================================================================
// Scroll Samples
// =============================================================================

/// Topmost visible row and the pixels scrolled past its start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollPosition {
    pub index: usize,
    pub offset: u32,
}

impl ScrollPosition {
    pub const fn new(index: usize, offset: u32) -> Self {
        Self { index, offset }
    }
}

/// One observation fed to the gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollSample {
    pub position: ScrollPosition,
    /// True while a drag or fling is active.
    pub in_progress: bool,
}

impl ScrollSample {
    pub const fn new(index: usize, offset: u32, in_progress: bool) -> Self {
        Self {
            position: ScrollPosition::new(index, offset),
            in_progress,
        }
    }
}

// =============================================================================
// Visibility Gate
// =============================================================================

/// Output of the gate for one sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub is_scrolling_up: bool,
    pub bar_visible: bool,
}

/// Decides bottom bar visibility from consecutive scroll samples.
///
/// Retains exactly one previous position. Each [`update`](Self::update)
/// compares against it and then overwrites it.
#[derive(Clone, Debug)]
pub struct ScrollVisibilityGate {
    previous: Option<ScrollPosition>,
    state: VisibilityState,
}

impl ScrollVisibilityGate {
    /// Create a gate with no history.
    pub const fn new() -> Self {
        Self {
            previous: None,
            state: VisibilityState {
                is_scrolling_up: false,
                bar_visible: true,
            },
        }
    }

    /// Process one sample.
    ///
    /// The first sample after creation or [`reset`](Self::reset) has no
    /// predecessor and reports `is_scrolling_up = false`.
    pub fn update(&mut self, sample: ScrollSample) -> VisibilityState {
        let current = sample.position;
        let is_scrolling_up = match self.previous {
            None => false,
            Some(prev) if prev.index != current.index => current.index < prev.index,
            Some(prev) => current.offset < prev.offset,
        };
        self.previous = Some(current);

        self.state = VisibilityState {
            is_scrolling_up,
            bar_visible: is_scrolling_up || !sample.in_progress,
        };
        self.state
    }

    /// Last computed state (visible, not scrolling up before any sample).
    #[inline]
    pub const fn state(&self) -> VisibilityState {
        self.state
    }

    /// Forget the retained position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScrollVisibilityGate {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Lazy List Model
// =============================================================================

/// Scroll state of a list of equally tall rows.
///
/// Position is kept in pixels and clamped to the scrollable range. Positive
/// deltas and velocities move toward the end of the list.
#[derive(Clone, Debug)]
pub struct LazyListState {
    item_count: usize,
    row_height: u32,
    viewport_height: u32,
    /// Pixels scrolled from the top of the content.
    position: f32,
    /// Fling velocity in pixels per second.
    velocity: f32,
    dragging: bool,
    /// The current drag has actually moved the position.
    drag_moved: bool,
}

impl LazyListState {
    pub const fn new(item_count: usize, row_height: u32, viewport_height: u32) -> Self {
        Self {
            item_count,
            row_height,
            viewport_height,
            position: 0.0,
            velocity: 0.0,
            dragging: false,
            drag_moved: false,
        }
    }

    #[inline]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub const fn row_height(&self) -> u32 {
        self.row_height
    }

    /// Total height of all rows.
    pub const fn content_height(&self) -> u32 {
        self.item_count as u32 * self.row_height
    }

    /// Largest valid scroll position.
    pub const fn max_scroll(&self) -> u32 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// Current scroll position in whole pixels.
    #[inline]
    pub fn scroll_px(&self) -> u32 {
        self.position.round() as u32
    }

    /// Topmost visible row and offset into it.
    pub fn first_visible(&self) -> ScrollPosition {
        if self.row_height == 0 {
            return ScrollPosition::default();
        }
        let px = self.scroll_px();
        ScrollPosition::new((px / self.row_height) as usize, px % self.row_height)
    }

    /// Range of row indices at least partly inside the viewport.
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        if self.row_height == 0 {
            return 0..0;
        }
        let first = self.first_visible();
        let bottom = self.scroll_px() + self.viewport_height;
        let last = bottom.div_ceil(self.row_height) as usize;
        first.index..last.min(self.item_count)
    }

    /// True while a drag has moved the list or a fling is still moving.
    ///
    /// A press that has not scrolled anything yet, or a drag pushing against
    /// a clamped edge, does not count.
    #[inline]
    pub fn is_scroll_in_progress(&self) -> bool {
        (self.dragging && self.drag_moved) || self.velocity != 0.0
    }

    #[inline]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Sample for the visibility gate.
    pub fn sample(&self) -> ScrollSample {
        ScrollSample {
            position: self.first_visible(),
            in_progress: self.is_scroll_in_progress(),
        }
    }

    /// Start a drag gesture. Any running fling stops.
    pub const fn begin_drag(&mut self) {
        self.dragging = true;
        self.drag_moved = false;
        self.velocity = 0.0;
    }

    /// Move by `delta` pixels (positive scrolls toward the end).
    pub fn scroll_by(&mut self, delta: f32) {
        let next = (self.position + delta).clamp(0.0, self.max_scroll() as f32);
        if self.dragging && next != self.position {
            self.drag_moved = true;
        }
        self.position = next;
    }

    /// End a drag, handing `release_velocity` (px/s) over to a fling.
    pub fn end_drag(&mut self, release_velocity: f32) {
        self.dragging = false;
        self.drag_moved = false;
        self.fling(release_velocity);
    }

    /// Add momentum (px/s).
    pub fn fling(&mut self, velocity: f32) {
        self.velocity += velocity;
        if self.velocity.abs() < FLING_STOP_VELOCITY || self.at_edge_in_direction() {
            self.velocity = 0.0;
        }
    }

    /// Advance the fling by one frame.
    pub fn tick(&mut self, dt: Duration) {
        if self.dragging || self.velocity == 0.0 {
            return;
        }
        let dt = dt.as_secs_f32();
        self.scroll_by(self.velocity * dt);
        self.velocity *= (-FLING_DECAY * dt).exp();

        if self.velocity.abs() < FLING_STOP_VELOCITY || self.at_edge_in_direction() {
            self.velocity = 0.0;
        }
    }

    /// Whether the fling is pushing against the start or end of the list.
    fn at_edge_in_direction(&self) -> bool {
        (self.velocity < 0.0 && self.position <= 0.0) || (self.velocity > 0.0 && self.position >= self.max_scroll() as f32)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Feed a sequence of samples and collect the outputs.
    fn run(samples: &[ScrollSample]) -> Vec<VisibilityState> {
        let mut gate = ScrollVisibilityGate::new();
        samples.iter().map(|s| gate.update(*s)).collect()
    }

    // -------------------------------------------------------------------------
    // Gate Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_sample_in_progress_hides_bar() {
        let out = run(&[ScrollSample::new(0, 0, true)]);
        assert!(!out[0].is_scrolling_up, "No predecessor means no upward evidence");
        assert!(!out[0].bar_visible);
    }

    #[test]
    fn test_first_sample_at_rest_shows_bar() {
        let out = run(&[ScrollSample::new(7, 12, false)]);
        assert!(!out[0].is_scrolling_up);
        assert!(out[0].bar_visible);
    }

    #[test]
    fn test_down_then_up_within_item() {
        let out = run(&[
            ScrollSample::new(0, 0, true),
            ScrollSample::new(0, 50, true),
            ScrollSample::new(0, 10, true),
        ]);
        let up: Vec<bool> = out.iter().map(|s| s.is_scrolling_up).collect();
        let visible: Vec<bool> = out.iter().map(|s| s.bar_visible).collect();
        assert_eq!(up, [false, false, true]);
        assert_eq!(visible, [false, false, true]);
    }

    #[test]
    fn test_gesture_end_shows_bar() {
        let out = run(&[ScrollSample::new(2, 0, true), ScrollSample::new(2, 0, false)]);
        let visible: Vec<bool> = out.iter().map(|s| s.bar_visible).collect();
        assert_eq!(visible, [false, true]);
    }

    #[test]
    fn test_index_decrease_wins_over_offset() {
        // Offset grew, but the index went back: still upward
        let out = run(&[ScrollSample::new(5, 0, true), ScrollSample::new(3, 30, true)]);
        assert!(out[1].is_scrolling_up);
        assert!(out[1].bar_visible);
    }

    #[test]
    fn test_index_increase_wins_over_offset() {
        // Offset shrank, but the index moved forward: downward
        let out = run(&[ScrollSample::new(3, 30, true), ScrollSample::new(4, 0, true)]);
        assert!(!out[1].is_scrolling_up);
        assert!(!out[1].bar_visible);
    }

    #[test]
    fn test_compares_only_with_previous_sample() {
        let out = run(&[
            ScrollSample::new(0, 40, true),
            ScrollSample::new(0, 10, true), // up vs 40
            ScrollSample::new(0, 20, true), // down vs 10, even though < 40
        ]);
        assert!(out[1].is_scrolling_up);
        assert!(!out[2].is_scrolling_up, "Comparison must use the immediately preceding sample");
    }

    #[test]
    fn test_state_and_reset() {
        let mut gate = ScrollVisibilityGate::new();
        assert!(gate.state().bar_visible, "Bar is visible before any sample");

        gate.update(ScrollSample::new(3, 0, true));
        let s = gate.update(ScrollSample::new(2, 0, true));
        assert_eq!(gate.state(), s);
        assert!(s.is_scrolling_up);

        gate.reset();
        let s = gate.update(ScrollSample::new(1, 0, true));
        assert!(!s.is_scrolling_up, "Reset should forget the previous position");
    }

    proptest! {
        #[test]
        fn prop_visible_when_not_in_progress(
            samples in prop::collection::vec((0usize..100, 0u32..64, any::<bool>()), 1..50)
        ) {
            let mut gate = ScrollVisibilityGate::new();
            for (index, offset, in_progress) in samples {
                let state = gate.update(ScrollSample::new(index, offset, in_progress));
                if !in_progress {
                    prop_assert!(state.bar_visible);
                }
                prop_assert_eq!(state.bar_visible, state.is_scrolling_up || !in_progress);
            }
        }

        #[test]
        fn prop_same_index_smaller_offset_is_up(index in 0usize..100, o1 in 1u32..1000, o2_frac in 0.0f64..1.0) {
            let o2 = (f64::from(o1) * o2_frac) as u32; // o2 < o1
            let out = run(&[ScrollSample::new(index, o1, true), ScrollSample::new(index, o2, true)]);
            prop_assert!(out[1].is_scrolling_up);
        }

        #[test]
        fn prop_index_five_to_three_is_up(o1 in 0u32..1000, o2 in 0u32..1000, busy in any::<bool>()) {
            let out = run(&[ScrollSample::new(5, o1, busy), ScrollSample::new(3, o2, busy)]);
            prop_assert!(out[1].is_scrolling_up);
            prop_assert!(out[1].bar_visible);
        }
    }

    // -------------------------------------------------------------------------
    // Lazy List Tests
    // -------------------------------------------------------------------------

    fn list() -> LazyListState {
        // 51 rows of 32px in a 288px viewport: max scroll 1344
        LazyListState::new(51, 32, 288)
    }

    #[test]
    fn test_list_geometry() {
        let list = list();
        assert_eq!(list.content_height(), 1632);
        assert_eq!(list.max_scroll(), 1344);
        assert_eq!(list.first_visible(), ScrollPosition::new(0, 0));
        assert_eq!(list.visible_rows(), 0..9);
    }

    #[test]
    fn test_first_visible_tracks_position() {
        let mut list = list();
        list.scroll_by(70.0);
        assert_eq!(list.first_visible(), ScrollPosition::new(2, 6));
        assert_eq!(list.visible_rows(), 2..12);
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut list = list();
        list.scroll_by(-50.0);
        assert_eq!(list.scroll_px(), 0);
        list.scroll_by(10_000.0);
        assert_eq!(list.scroll_px(), 1344);
        assert_eq!(list.visible_rows().end, 51, "Last row must be reachable");
    }

    #[test]
    fn test_short_list_does_not_scroll() {
        let mut list = LazyListState::new(3, 32, 288);
        assert_eq!(list.max_scroll(), 0);
        list.scroll_by(100.0);
        assert_eq!(list.scroll_px(), 0);
        assert_eq!(list.visible_rows(), 0..3);
    }

    #[test]
    fn test_drag_marks_in_progress() {
        let mut list = list();
        assert!(!list.is_scroll_in_progress());
        list.begin_drag();
        assert!(list.is_dragging());
        assert!(!list.is_scroll_in_progress(), "Press without movement is not a scroll");
        list.scroll_by(10.0);
        assert!(list.is_scroll_in_progress());
        list.end_drag(0.0);
        assert!(!list.is_scroll_in_progress(), "Release without velocity settles immediately");
    }

    #[test]
    fn test_drag_against_start_is_not_in_progress() {
        let mut list = list();
        list.begin_drag();
        list.scroll_by(-40.0);
        assert_eq!(list.scroll_px(), 0);
        assert!(!list.is_scroll_in_progress(), "Clamped drag did not move the list");

        list.scroll_by(20.0);
        list.scroll_by(-20.0);
        assert!(list.is_scroll_in_progress(), "Drag stays in progress once it has moved");
    }

    #[test]
    fn test_fling_moves_and_decays() {
        let mut list = list();
        list.fling(600.0);
        assert!(list.is_scroll_in_progress());

        let mut frames = 0;
        while list.is_scroll_in_progress() && frames < 1000 {
            list.tick(Duration::from_millis(16));
            frames += 1;
        }
        assert!(frames < 1000, "Fling should come to rest");
        assert!(list.scroll_px() > 0, "Fling should have moved the list");
    }

    #[test]
    fn test_fling_against_start_is_ignored() {
        let mut list = list();
        list.fling(-600.0);
        assert!(!list.is_scroll_in_progress(), "Cannot fling past the start");
    }

    #[test]
    fn test_fling_stops_at_end() {
        let mut list = list();
        list.scroll_by(1340.0);
        list.fling(2000.0);
        for _ in 0..10 {
            list.tick(Duration::from_millis(16));
        }
        assert_eq!(list.scroll_px(), 1344);
        assert!(!list.is_scroll_in_progress());
    }

    #[test]
    fn test_begin_drag_stops_fling() {
        let mut list = list();
        list.fling(600.0);
        list.begin_drag();
        let before = list.scroll_px();
        list.tick(Duration::from_millis(16));
        assert_eq!(list.scroll_px(), before, "Dragging list should not coast");
    }

    #[test]
    fn test_upward_fling_feeds_gate_upward() {
        let mut list = list();
        list.scroll_by(500.0);
        let mut gate = ScrollVisibilityGate::new();
        gate.update(list.sample());

        list.fling(-600.0);
        list.tick(Duration::from_millis(16));
        let state = gate.update(list.sample());
        assert!(state.is_scrolling_up);
        assert!(state.bar_visible);
    }
}
