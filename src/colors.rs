//! Color palette for the instrument panel.
//!
//! All colors are `const Rgb565` values so styles built from them can also be
//! computed at compile time. Rgb565 channel ranges are 0-31 (red), 0-63
//! (green), 0-31 (blue).
//!
//! The display has no alpha channel; "transparent" phosphor effects are
//! produced by scaling a color toward the black scope background (see
//! [`crate::animations::scale_rgb565`]).

use embedded_graphics::pixelcolor::Rgb565;

/// Pure black. Scope interior and gauge wells.
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Pure white. Labels and readouts.
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Panel background, a very dark navy.
pub const PANEL_BG: Rgb565 = Rgb565::new(1, 4, 6);

/// Phosphor green for the sweep wedge, trail, and safe-state text.
pub const GREEN: Rgb565 = Rgb565::new(0, 63, 0);

/// Pale green for the expanding pulse ring.
pub const PALE_GREEN: Rgb565 = Rgb565::new(16, 63, 16);

/// Warning red for contacts, the critical lamp, and the low-oxygen text.
pub const RED: Rgb565 = Rgb565::new(31, 0, 0);

/// Fill color of the depth and oxygen gauges.
pub const GAUGE_BLUE: Rgb565 = Rgb565::new(0, 32, 31);

/// Face color of the sonar toggle button, a dark blue.
pub const BUTTON_BLUE: Rgb565 = Rgb565::new(0, 0, 16);

/// Unlit lamp face (Neutral mode and the off phase of a blink).
pub const LAMP_OFF: Rgb565 = Rgb565::new(5, 10, 5);

/// Build a neutral gray from a single 8-bit intensity.
///
/// Used by the bezel and gauge-frame gradients, which ramp through many gray
/// levels that would be unwieldy as named constants.
pub const fn gray565(intensity: u8) -> Rgb565 {
    Rgb565::new(intensity >> 3, intensity >> 2, intensity >> 3)
}
