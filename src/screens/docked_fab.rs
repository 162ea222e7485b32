//! Docked FAB demo: a long list under a bottom app bar that hides while the
//! list scrolls toward its end and returns when scrolling back or at rest.
//!
//! # Frame Update
//!
//! ```text
//! list.tick(dt)                       // fling physics
//! sample = list.sample()
//! if sample changed:                  // observe only real changes
//!     state = gate.update(sample)
//!     slide.set_visible(state.bar_visible)
//! slide.step(dt)                      // 300ms eased slide
//! fab.step(dt)                        // spring toward 1.0 or 1.2
//! ```
//!
//! Drag velocity is measured per frame from the pixels dragged since the
//! previous tick and handed to the list as a fling on release.

use std::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::{
    animations::{DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_LOW, SlideTransition, Spring},
    colors::SURFACE,
    config::{
        BAR_SLIDE_DURATION,
        BOTTOM_BAR_HEIGHT,
        FAB_PRESSED_SCALE,
        LIST_CONTENT_ITEMS,
        LIST_ROW_HEIGHT,
        LIST_VIEWPORT_HEIGHT,
        SCREEN_WIDTH,
        TOP_BAR_HEIGHT,
    },
    easing::Easing,
    pages::Page,
    scroll::{LazyListState, ScrollSample, ScrollVisibilityGate, VisibilityState},
    widgets::{
        BACK_BUTTON_BOUNDS,
        BarAction,
        RowContent,
        bottom_bar::{self, draw_bottom_bar},
        draw_list,
        draw_top_bar,
    },
};

/// Helper text shown as the first row.
const INSTRUCTIONS: &[&str] = &["Scroll down to hide the bar.", "Scroll up to show it.", "Tap the FAB for bounce."];

const LIST_AREA: Rectangle = Rectangle::new(
    Point::new(0, TOP_BAR_HEIGHT as i32),
    Size::new(SCREEN_WIDTH, LIST_VIEWPORT_HEIGHT),
);

/// Weight of the newest frame in the drag velocity estimate.
const DRAG_VELOCITY_SMOOTHING: f32 = 0.5;

/// Something a click on the demo asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoAction {
    Back,
    Home,
    Search,
    /// FAB pressed; carries the new pressed state.
    Fab(bool),
}

/// What changed during one [`DockedFabDemo::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The gate saw a new sample.
    pub gate_updated: bool,
    /// The bar's target visibility flipped to this value.
    pub bar_target: Option<bool>,
}

/// In-progress mouse drag.
#[derive(Clone, Copy, Debug)]
struct Drag {
    last_y: i32,
    /// Pixels moved since the last tick (positive toward the list end)
    pending: f32,
    /// Smoothed velocity in px/s
    velocity: f32,
}

/// State of the docked FAB demo.
pub struct DockedFabDemo {
    list: LazyListState,
    gate: ScrollVisibilityGate,
    last_sample: Option<ScrollSample>,
    slide: SlideTransition,
    fab: Spring,
    fab_pressed: bool,
    drag: Option<Drag>,
}

impl DockedFabDemo {
    pub fn new() -> Self {
        Self {
            // Instructions row plus the content items
            list: LazyListState::new(LIST_CONTENT_ITEMS + 1, LIST_ROW_HEIGHT, LIST_VIEWPORT_HEIGHT),
            gate: ScrollVisibilityGate::new(),
            last_sample: None,
            slide: SlideTransition::new(true, BAR_SLIDE_DURATION, Easing::FAST_OUT_SLOW_IN),
            fab: Spring::new(1.0, STIFFNESS_LOW, DAMPING_RATIO_MEDIUM_BOUNCY),
            fab_pressed: false,
            drag: None,
        }
    }

    #[inline]
    pub const fn list(&self) -> &LazyListState {
        &self.list
    }

    #[inline]
    pub const fn visibility(&self) -> VisibilityState {
        self.gate.state()
    }

    /// Current bar slide offset in pixels (0 shown, bar height hidden).
    #[inline]
    pub fn bar_offset(&self) -> i32 {
        self.slide.offset(BOTTOM_BAR_HEIGHT)
    }

    #[inline]
    pub const fn fab_scale(&self) -> f32 {
        self.fab.value()
    }

    #[inline]
    pub const fn fab_pressed(&self) -> bool {
        self.fab_pressed
    }

    /// Return to the initial state when the demo is opened again.
    ///
    /// The gate is kept and reset so the first sample after re-entry has no
    /// predecessor.
    pub fn reset(&mut self) {
        let mut gate = core::mem::take(&mut self.gate);
        gate.reset();
        *self = Self { gate, ..Self::new() };
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Flip the FAB between rest and pressed scale. Returns the new state.
    pub fn toggle_fab(&mut self) -> bool {
        self.fab_pressed = !self.fab_pressed;
        self.fab.set_target(if self.fab_pressed { FAB_PRESSED_SCALE } else { 1.0 });
        self.fab_pressed
    }

    /// Add fling momentum (px/s, positive toward the list end).
    pub fn fling(&mut self, velocity: f32) {
        self.list.fling(velocity);
    }

    /// Mouse button pressed at `point`.
    ///
    /// Buttons take priority over the list. A press inside the list starts a
    /// drag and returns `None`.
    pub fn press(&mut self, point: Point) -> Option<DemoAction> {
        if BACK_BUTTON_BOUNDS.contains(point) {
            return Some(DemoAction::Back);
        }
        match bottom_bar::hit_test(point, self.bar_offset(), self.fab_scale()) {
            Some(BarAction::Fab) => return Some(DemoAction::Fab(self.toggle_fab())),
            Some(BarAction::Home) => return Some(DemoAction::Home),
            Some(BarAction::Search) => return Some(DemoAction::Search),
            None => {}
        }
        // The visible bar overlays the list and swallows presses
        let offset = self.bar_offset();
        if LIST_AREA.contains(point) && !bottom_bar::bar_rect(offset).contains(point) {
            self.list.begin_drag();
            self.drag = Some(Drag {
                last_y: point.y,
                pending: 0.0,
                velocity: 0.0,
            });
        }
        None
    }

    /// Pointer moved to `point`. Scrolls the list while dragging.
    pub fn drag_to(&mut self, point: Point) {
        if let Some(drag) = self.drag.as_mut() {
            // Content follows the pointer: moving up scrolls toward the end
            let delta = (drag.last_y - point.y) as f32;
            drag.last_y = point.y;
            drag.pending += delta;
            self.list.scroll_by(delta);
        }
    }

    /// Mouse button released. Ends any drag with its measured velocity.
    pub fn release(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.list.end_drag(drag.velocity);
        }
    }

    // -------------------------------------------------------------------------
    // Frame Update
    // -------------------------------------------------------------------------

    /// Advance physics and animations by `dt`.
    pub fn tick(&mut self, dt: Duration) -> TickOutcome {
        if let Some(drag) = self.drag.as_mut() {
            let secs = dt.as_secs_f32();
            if secs > 0.0 {
                let instant = drag.pending / secs;
                drag.velocity = DRAG_VELOCITY_SMOOTHING.mul_add(instant, (1.0 - DRAG_VELOCITY_SMOOTHING) * drag.velocity);
            }
            drag.pending = 0.0;
        }
        self.list.tick(dt);

        let mut outcome = TickOutcome::default();
        let sample = self.list.sample();
        if self.last_sample != Some(sample) {
            self.last_sample = Some(sample);
            let state = self.gate.update(sample);
            outcome.gate_updated = true;
            if self.slide.set_visible(state.bar_visible) {
                log::debug!(
                    "bar {} at {:?} (up={}, in_progress={})",
                    if state.bar_visible { "shown" } else { "hidden" },
                    sample.position,
                    state.is_scrolling_up,
                    sample.in_progress
                );
                outcome.bar_target = Some(state.bar_visible);
            }
        }

        self.slide.step(dt);
        self.fab.step(dt);
        outcome
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Draw the demo. Returns the number of list rows drawn.
    pub fn draw<D>(&self, display: &mut D, fps: Option<u32>) -> u32
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(SURFACE).ok();
        let rows = draw_list(display, &self.list, LIST_AREA, |i| {
            if i == 0 {
                RowContent::Caption(INSTRUCTIONS)
            } else {
                RowContent::headline(format_args!("Content Item {i}"))
            }
        });
        draw_top_bar(display, Page::DockedFab.title(), true, fps);
        draw_bottom_bar(display, self.bar_offset(), self.fab_scale());
        rows
    }
}

impl Default for DockedFabDemo {
    fn default() -> Self {
        Self::new()
    }
}
