//! Geometric app logo.
//!
//! A primary disc with a four-point sparkle and a white core. All points are
//! defined relative to the logo centre and mapped through an [`Affine`], so
//! the splash transform (scale, rotation, vertical bounce) applies uniformly.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::{
    colors::{PRIMARY, TERTIARY_CONTAINER, WHITE},
    splash::LogoTransform,
    widgets::primitives::{Affine, fill_circle, fill_convex_polygon},
};

/// Sparkle tip distance as a fraction of the disc radius.
const SPARKLE_REACH: f32 = 0.8;

/// Sparkle half-width at the centre as a fraction of the disc radius.
const SPARKLE_WAIST: f32 = 0.22;

/// White core radius as a fraction of the disc radius.
const CORE_RADIUS: f32 = 0.18;

/// Draw the logo of `size` pixels centred on `center` with `transform` applied.
pub fn draw_logo<D>(display: &mut D, center: Point, size: u32, transform: &LogoTransform)
where
    D: DrawTarget<Color = Rgb565>,
{
    if transform.scale <= 0.0 {
        return;
    }
    let radius = size as f32 / 2.0;
    let affine = Affine::new(center, transform.scale, transform.rotation_deg, transform.translate_y);
    let origin = affine.apply(0.0, 0.0);

    fill_circle(display, origin, radius * affine.scale(), PRIMARY);

    let reach = radius * SPARKLE_REACH;
    let waist = radius * SPARKLE_WAIST;
    // Up, right, down, left: tip then the two waist points
    for (tx, ty, wx, wy) in [
        (0.0, -reach, waist, 0.0),
        (reach, 0.0, 0.0, waist),
        (0.0, reach, waist, 0.0),
        (-reach, 0.0, 0.0, waist),
    ] {
        let points = [
            affine.apply(tx, ty),
            affine.apply(wx, wy),
            affine.apply(-wx, -wy),
        ];
        fill_convex_polygon(display, &points, TERTIARY_CONTAINER);
    }

    fill_circle(display, origin, radius * CORE_RADIUS * affine.scale(), WHITE);
}
