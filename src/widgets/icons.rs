//! Line-art icons on a 16x16 grid.
//!
//! Each function draws the icon centred on `center`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

/// Icon box edge in pixels.
pub const ICON_SIZE: u32 = 16;

/// Stroke width for icon outlines.
const STROKE: u32 = 2;

fn line<D>(display: &mut D, center: Point, from: (i32, i32), to: (i32, i32), color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(center + Point::new(from.0, from.1), center + Point::new(to.0, to.1))
        .into_styled(PrimitiveStyle::with_stroke(color, STROKE))
        .draw(display)
        .ok();
}

/// Left-pointing arrow.
pub fn draw_back_icon<D>(display: &mut D, center: Point, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    line(display, center, (-6, 0), (6, 0), color);
    line(display, center, (-6, 0), (-1, -5), color);
    line(display, center, (-6, 0), (-1, 5), color);
}

/// House: roof triangle over a square body.
pub fn draw_home_icon<D>(display: &mut D, center: Point, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Triangle::new(
        center + Point::new(-7, -1),
        center + Point::new(0, -7),
        center + Point::new(7, -1),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();
    Rectangle::new(center + Point::new(-5, -1), Size::new(11, 8))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Magnifier: ring with a handle toward the bottom right.
pub fn draw_search_icon<D>(display: &mut D, center: Point, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center + Point::new(-2, -2), 10)
        .into_styled(PrimitiveStyle::with_stroke(color, STROKE))
        .draw(display)
        .ok();
    line(display, center, (2, 2), (6, 6), color);
}

/// Camera body with a lens and a viewfinder bump.
///
/// `lens` is the fill behind the lens ring, normally the button container color.
pub fn draw_camera_icon<D>(display: &mut D, center: Point, color: Rgb565, lens: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(center + Point::new(-3, -7), Size::new(7, 3))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    Rectangle::new(center + Point::new(-8, -5), Size::new(17, 12))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    Circle::with_center(center + Point::new(0, 1), 8)
        .into_styled(PrimitiveStyle::with_fill(lens))
        .draw(display)
        .ok();
    Circle::with_center(center + Point::new(0, 1), 4)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Right-pointing chevron for list rows that open a screen.
pub fn draw_chevron_icon<D>(display: &mut D, center: Point, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    line(display, center, (-2, -5), (3, 0), color);
    line(display, center, (3, 0), (-2, 5), color);
}
