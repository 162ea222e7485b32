//! Top app bar.
//!
//! A surface-colored strip across the top of the screen with an optional back
//! arrow on the left and the screen title. The back arrow's touch target is
//! exported as [`BACK_BUTTON_BOUNDS`] so the main loop can hit-test clicks.
//!
//! ```text
//! ┌────────────────────────────────┐
//! │ ←  Expressive Docked FAB       │  32px
//! └────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{OUTLINE_VARIANT, ON_SURFACE, SURFACE_CONTAINER},
    config::{SCREEN_WIDTH, TOP_BAR_HEIGHT},
    styles::{CAPTION_STYLE, LEFT_MIDDLE, RIGHT_MIDDLE, TITLE_STYLE},
    widgets::{icons::draw_back_icon, primitives::draw_divider},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Whole bar.
const BAR_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, TOP_BAR_HEIGHT));

/// Touch target around the back arrow.
pub const BACK_BUTTON_BOUNDS: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(TOP_BAR_HEIGHT, TOP_BAR_HEIGHT));

/// Centre of the back arrow icon.
const BACK_ICON_CENTER: Point = Point::new((TOP_BAR_HEIGHT / 2) as i32, (TOP_BAR_HEIGHT / 2) as i32);

/// Title start when a back arrow is shown.
const TITLE_POS_WITH_BACK: Point = Point::new(TOP_BAR_HEIGHT as i32 + 4, (TOP_BAR_HEIGHT / 2) as i32);

/// Title start without a back arrow.
const TITLE_POS: Point = Point::new(12, (TOP_BAR_HEIGHT / 2) as i32);

/// FPS readout anchor (right edge, vertically centred).
const FPS_POS: Point = Point::new(SCREEN_WIDTH as i32 - 6, (TOP_BAR_HEIGHT / 2) as i32);

const BAR_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SURFACE_CONTAINER);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the top app bar.
///
/// `fps` draws a small frame-rate readout at the right edge when set.
pub fn draw_top_bar<D>(display: &mut D, title: &str, show_back: bool, fps: Option<u32>)
where
    D: DrawTarget<Color = Rgb565>,
{
    BAR_RECT.into_styled(BAR_FILL_STYLE).draw(display).ok();

    let title_pos = if show_back {
        draw_back_icon(display, BACK_ICON_CENTER, ON_SURFACE);
        TITLE_POS_WITH_BACK
    } else {
        TITLE_POS
    };
    Text::with_text_style(title, title_pos, TITLE_STYLE, LEFT_MIDDLE)
        .draw(display)
        .ok();

    if let Some(fps) = fps {
        let mut s: String<12> = String::new();
        let _ = write!(s, "{fps}");
        Text::with_text_style(&s, FPS_POS, CAPTION_STYLE, RIGHT_MIDDLE)
            .draw(display)
            .ok();
    }

    draw_divider(
        display,
        TOP_BAR_HEIGHT as i32 - 1,
        0,
        SCREEN_WIDTH as i32 - 1,
        OUTLINE_VARIANT,
    );
}
