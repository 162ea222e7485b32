//! Pre-computed static text styles.
//!
//! All styles used by the screens are `const`, so nothing is built per frame.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

use crate::colors::{GREEN, ON_SURFACE, ON_SURFACE_VARIANT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned, vertically centred on the anchor. Titles and list rows.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new().baseline(Baseline::Middle).build();

/// Right-aligned, vertically centred on the anchor. FPS readout.
pub const RIGHT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, anchored at the top. Multi-line captions.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new().baseline(Baseline::Top).build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small muted text: captions and the FPS readout.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, ON_SURFACE_VARIANT);

/// Small green text for the debug log terminal.
pub const LOG_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);

/// List row text.
pub const BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, ON_SURFACE);

/// Top app bar title (`ProFont` 12pt).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, ON_SURFACE);
