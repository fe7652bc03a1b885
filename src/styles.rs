//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible in
//! embedded-graphics 0.8, so every fixed style lives in the binary's read-only
//! data instead of being rebuilt each frame.
//!
//! The oxygen warning text changes color with the lamp state, so its font is
//! exposed as [`WARNING_FONT`] and callers build
//! `MonoTextStyle::new(WARNING_FONT, color)` with just the color varying.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Gauge labels, readouts, and warning messages.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Title string in the bottom-left corner.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. FPS counter in the top-right corner.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Font of the oxygen status messages. Color varies with the lamp state, so
/// callers construct `MonoTextStyle::new(WARNING_FONT, color)` per frame.
pub const WARNING_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for gauge labels and the FPS counter.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Medium white text for the static title string.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white text for the depth readout (`ProFont` 18pt).
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
