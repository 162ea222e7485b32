//! Color constants for the catalog screens.
//!
//! The palette is the baseline design-system scheme converted to RGB565.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! A 24-bit `#RRGGBB` color converts as `(RR >> 3, GG >> 2, BB >> 3)`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Splash background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Particles and logo highlight.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green. Debug page headings.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Debug page highlights.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Scheme Colors (application-specific)
// =============================================================================

/// Primary (#6750A4). FAB container, selection marker, logo body.
pub const PRIMARY: Rgb565 = Rgb565::new(12, 20, 20);

/// On-primary (#FFFFFF). Icons drawn on the FAB.
pub const ON_PRIMARY: Rgb565 = Rgb565::WHITE;

/// Primary container (#EADDFF). Selected catalog row.
pub const PRIMARY_CONTAINER: Rgb565 = Rgb565::new(29, 55, 31);

/// Surface (#FEF7FF). Screen background behind lists.
pub const SURFACE: Rgb565 = Rgb565::new(31, 61, 31);

/// Surface container (#F3EDF7). Top and bottom app bars.
pub const SURFACE_CONTAINER: Rgb565 = Rgb565::new(30, 59, 30);

/// On-surface (#1D1B20). Titles and list text.
pub const ON_SURFACE: Rgb565 = Rgb565::new(3, 6, 4);

/// On-surface variant (#49454F). Action icons and secondary text.
pub const ON_SURFACE_VARIANT: Rgb565 = Rgb565::new(9, 17, 9);

/// Outline variant (#CAC4D0). List dividers.
pub const OUTLINE_VARIANT: Rgb565 = Rgb565::new(25, 49, 26);

/// Tertiary container (#FFD8E4). Logo accent points.
pub const TERTIARY_CONTAINER: Rgb565 = Rgb565::new(31, 54, 28);

/// Dark gray for debug page dividers.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Orange for debug log text.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Blend white over black at `alpha` (0.0-1.0).
///
/// RGB565 has no alpha channel, and every translucent element in this app
/// sits on the black splash background, so the blend reduces to scaling
/// each channel.
pub fn white_with_alpha(alpha: f32) -> Rgb565 {
    let a = alpha.clamp(0.0, 1.0);
    Rgb565::new(
        (31.0 * a).round() as u8,
        (63.0 * a).round() as u8,
        (31.0 * a).round() as u8,
    )
}
