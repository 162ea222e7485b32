//! Bottom app bar with two actions and a docked FAB.
//!
//! The bar is drawn `slide_offset` pixels below its resting position, so an
//! offset of [`BOTTOM_BAR_HEIGHT`] puts it fully off screen. The FAB is a
//! square with its top-left and bottom-right corners cut, scaled about its
//! centre.
//!
//! ```text
//! ┌────────────────────────────────┐
//! │  ⌂    ⌕                  ◸▣◿  │  48px
//! └────────────────────────────────┘
//!   home search               FAB
//! ```

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::{
    colors::{ON_PRIMARY, ON_SURFACE_VARIANT, OUTLINE_VARIANT, PRIMARY, SURFACE_CONTAINER},
    config::{BOTTOM_BAR_HEIGHT, FAB_CORNER_CUT, FAB_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH},
    widgets::{
        icons::{ICON_SIZE, draw_camera_icon, draw_home_icon, draw_search_icon},
        primitives::{cut_corner_polygon, draw_divider, fill_convex_polygon, fill_rect, scaled_rect},
    },
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Top edge of the bar when fully shown.
const BAR_TOP: i32 = (SCREEN_HEIGHT - BOTTOM_BAR_HEIGHT) as i32;

/// Vertical centre of bar content when fully shown.
const BAR_CENTER_Y: i32 = BAR_TOP + (BOTTOM_BAR_HEIGHT / 2) as i32;

/// Square touch target around each action icon.
const ACTION_TARGET: u32 = 40;

const HOME_X: i32 = 28;
const SEARCH_X: i32 = 72;

/// FAB centre x, inset 16px from the right edge.
const FAB_X: i32 = SCREEN_WIDTH as i32 - 16 - (FAB_SIZE / 2) as i32;

// =============================================================================
// Geometry
// =============================================================================

/// Something on the bar that can be clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarAction {
    Home,
    Search,
    Fab,
}

/// Bar rectangle at `slide_offset`.
pub const fn bar_rect(slide_offset: i32) -> Rectangle {
    Rectangle::new(
        Point::new(0, BAR_TOP + slide_offset),
        Size::new(SCREEN_WIDTH, BOTTOM_BAR_HEIGHT),
    )
}

/// FAB centre at `slide_offset`.
pub const fn fab_center(slide_offset: i32) -> Point {
    Point::new(FAB_X, BAR_CENTER_Y + slide_offset)
}

/// FAB outline bounds at `slide_offset` and `scale`.
pub fn fab_bounds(slide_offset: i32, scale: f32) -> Rectangle {
    scaled_rect(fab_center(slide_offset), FAB_SIZE, scale)
}

fn action_bounds(x: i32, slide_offset: i32) -> Rectangle {
    Rectangle::with_center(
        Point::new(x, BAR_CENTER_Y + slide_offset),
        Size::new(ACTION_TARGET, ACTION_TARGET),
    )
}

/// What lies under `point`, if anything.
///
/// A bar slid fully out of view has no targets.
pub fn hit_test(point: Point, slide_offset: i32, fab_scale: f32) -> Option<BarAction> {
    if slide_offset >= BOTTOM_BAR_HEIGHT as i32 {
        return None;
    }
    if fab_bounds(slide_offset, fab_scale).contains(point) {
        Some(BarAction::Fab)
    } else if action_bounds(HOME_X, slide_offset).contains(point) {
        Some(BarAction::Home)
    } else if action_bounds(SEARCH_X, slide_offset).contains(point) {
        Some(BarAction::Search)
    } else {
        None
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the bar at `slide_offset` with the FAB at `fab_scale`.
pub fn draw_bottom_bar<D>(display: &mut D, slide_offset: i32, fab_scale: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    if slide_offset >= BOTTOM_BAR_HEIGHT as i32 {
        return;
    }

    let bar = bar_rect(slide_offset);
    fill_rect(display, bar, SURFACE_CONTAINER);
    draw_divider(display, bar.top_left.y, 0, SCREEN_WIDTH as i32 - 1, OUTLINE_VARIANT);

    let icon_y = BAR_CENTER_Y + slide_offset;
    draw_home_icon(display, Point::new(HOME_X, icon_y), ON_SURFACE_VARIANT);
    draw_search_icon(display, Point::new(SEARCH_X, icon_y), ON_SURFACE_VARIANT);

    draw_fab(display, slide_offset, fab_scale);
}

fn draw_fab<D>(display: &mut D, slide_offset: i32, scale: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = fab_bounds(slide_offset, scale);
    let cut = (FAB_CORNER_CUT as f32 * scale).round() as u32;
    fill_convex_polygon(display, &cut_corner_polygon(bounds, cut), PRIMARY);

    // Icon keeps its size; only the container bounces
    if bounds.size.width > ICON_SIZE {
        draw_camera_icon(display, fab_center(slide_offset), ON_PRIMARY, PRIMARY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::Framebuffer;

    fn screen() -> Framebuffer {
        Framebuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_shown_bar_occupies_bottom_strip() {
        let mut fb = screen();
        draw_bottom_bar(&mut fb, 0, 1.0);
        assert!(fb.count_in_rows(SURFACE_CONTAINER, BAR_TOP as u32, SCREEN_HEIGHT) > 0);
        assert_eq!(fb.count_in_rows(SURFACE_CONTAINER, 0, BAR_TOP as u32), 0);
        assert_eq!(fb.count_in_rows(Rgb565::BLACK, BAR_TOP as u32, SCREEN_HEIGHT), 0);
    }

    #[test]
    fn test_hidden_bar_draws_nothing() {
        let mut fb = screen();
        draw_bottom_bar(&mut fb, BOTTOM_BAR_HEIGHT as i32, 1.0);
        assert_eq!(fb.count(Rgb565::BLACK), (SCREEN_WIDTH * SCREEN_HEIGHT) as usize);
    }

    #[test]
    fn test_half_slid_bar_is_partly_visible() {
        let mut fb = screen();
        draw_bottom_bar(&mut fb, 24, 1.0);
        assert_eq!(
            fb.count_in_rows(SURFACE_CONTAINER, 0, BAR_TOP as u32 + 24),
            0,
            "Slid bar starts 24px lower"
        );
        assert!(fb.count_in_rows(SURFACE_CONTAINER, BAR_TOP as u32 + 24, SCREEN_HEIGHT) > 0);
    }

    #[test]
    fn test_fab_has_cut_corners() {
        let mut fb = screen();
        draw_bottom_bar(&mut fb, 0, 1.0);
        let b = fab_bounds(0, 1.0);
        let (l, t) = (b.top_left.x, b.top_left.y);
        let (r, btm) = (l + FAB_SIZE as i32 - 1, t + FAB_SIZE as i32 - 1);
        assert_eq!(fb.pixel(l + 1, t + 1), Some(SURFACE_CONTAINER), "Top-left corner is cut");
        assert_eq!(fb.pixel(r - 1, btm - 1), Some(SURFACE_CONTAINER), "Bottom-right corner is cut");
        assert_eq!(fb.pixel(r - 3, t + 3), Some(PRIMARY), "Top-right corner is square");
        assert_eq!(fb.pixel(l + 3, btm - 3), Some(PRIMARY), "Bottom-left corner is square");
    }

    #[test]
    fn test_fab_scale_grows_container() {
        let mut small = screen();
        draw_bottom_bar(&mut small, 0, 1.0);
        let mut big = screen();
        draw_bottom_bar(&mut big, 0, 1.2);
        assert!(big.count(PRIMARY) > small.count(PRIMARY));
    }

    #[test]
    fn test_hit_test() {
        let fab = fab_center(0);
        assert_eq!(hit_test(fab, 0, 1.0), Some(BarAction::Fab));
        assert_eq!(hit_test(Point::new(HOME_X, BAR_CENTER_Y), 0, 1.0), Some(BarAction::Home));
        assert_eq!(hit_test(Point::new(SEARCH_X, BAR_CENTER_Y), 0, 1.0), Some(BarAction::Search));
        assert_eq!(hit_test(Point::new(140, BAR_CENTER_Y), 0, 1.0), None);
        assert_eq!(
            hit_test(fab, BOTTOM_BAR_HEIGHT as i32, 1.0),
            None,
            "Hidden bar cannot be clicked"
        );
    }
}
