//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

/// Fill a convex polygon as a fan of triangles from its first vertex.
///
/// Fewer than three points draws nothing.
pub fn fill_convex_polygon<D>(display: &mut D, points: &[Point], color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some((&first, rest)) = points.split_first() else {
        return;
    };
    let style = PrimitiveStyle::with_fill(color);
    for pair in rest.windows(2) {
        Triangle::new(first, pair[0], pair[1]).into_styled(style).draw(display).ok();
    }
}

/// Fill a circle of `radius` pixels centred on `center`. Radii under half a pixel draw nothing.
pub fn fill_circle<D>(display: &mut D, center: Point, radius: f32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let diameter = (radius * 2.0).round();
    if diameter < 1.0 {
        return;
    }
    Circle::with_center(center, diameter as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Fill an axis-aligned rectangle.
pub fn fill_rect<D>(display: &mut D, rect: Rectangle, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    rect.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}

/// Draw a 1px horizontal divider from `x0` to `x1` (inclusive).
pub fn draw_divider<D>(display: &mut D, y: i32, x0: i32, x1: i32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(x0, y), Point::new(x1, y))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Vertices of `rect` with the top-left and bottom-right corners cut by `cut` pixels.
///
/// Clockwise from the end of the top-left cut. The cut is clamped to half
/// the shorter side so the shape stays convex.
pub fn cut_corner_polygon(rect: Rectangle, cut: u32) -> [Point; 6] {
    let cut = cut.min(rect.size.width / 2).min(rect.size.height / 2) as i32;
    let left = rect.top_left.x;
    let top = rect.top_left.y;
    let right = left + rect.size.width as i32 - 1;
    let bottom = top + rect.size.height as i32 - 1;
    [
        Point::new(left + cut, top),
        Point::new(right, top),
        Point::new(right, bottom - cut),
        Point::new(right - cut, bottom),
        Point::new(left, bottom),
        Point::new(left, top + cut),
    ]
}

/// Rectangle of `size` scaled by `scale` about `center`.
pub fn scaled_rect(center: Point, size: u32, scale: f32) -> Rectangle {
    let side = (size as f32 * scale).round().max(1.0) as u32;
    Rectangle::with_center(center, Size::new(side, side))
}

/// 2D transform: scale, rotate (degrees, clockwise on screen), then translate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    origin: Point,
    scale: f32,
    sin: f32,
    cos: f32,
    translate_y: f32,
}

impl Affine {
    pub fn new(origin: Point, scale: f32, rotation_deg: f32, translate_y: f32) -> Self {
        let (sin, cos) = rotation_deg.to_radians().sin_cos();
        Self {
            origin,
            scale,
            sin,
            cos,
            translate_y,
        }
    }

    /// Map a point given relative to the origin into screen space.
    pub fn apply(&self, dx: f32, dy: f32) -> Point {
        let x = dx * self.scale;
        let y = dy * self.scale;
        let rx = x.mul_add(self.cos, -y * self.sin);
        let ry = x.mul_add(self.sin, y * self.cos);
        Point::new(
            self.origin.x + rx.round() as i32,
            self.origin.y + (ry + self.translate_y).round() as i32,
        )
    }

    #[inline]
    pub const fn scale(&self) -> f32 {
        self.scale
    }
}
