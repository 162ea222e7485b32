//! Splash screen rendering.
//!
//! Black background, a static field of translucent white dots, and the logo
//! at the screen centre with the sequencer's transform applied. Timing lives
//! in [`crate::splash`]; this module only draws a frame.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::{
    colors::{BLACK, white_with_alpha},
    config::{CENTER_X, CENTER_Y, LOGO_SIZE},
    particles::ParticleField,
    splash::LogoTransform,
    widgets::{draw_logo, primitives::fill_circle},
};

const LOGO_CENTER: Point = Point::new(CENTER_X, CENTER_Y);

/// Draw one splash frame.
pub fn draw_splash<D>(display: &mut D, field: &ParticleField, transform: &LogoTransform)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    for p in field.particles() {
        let center = Point::new(p.x.round() as i32, p.y.round() as i32);
        fill_circle(display, center, p.radius, white_with_alpha(p.alpha));
    }

    draw_logo(display, LOGO_CENTER, LOGO_SIZE, transform);
}
