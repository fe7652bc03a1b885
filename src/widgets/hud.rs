//! Static title text and the optional FPS counter.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::Text;
use embedded_graphics::Drawable;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::config::{FPS_POS, TITLE_POS};
use crate::styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE};

/// Static label in the bottom-left corner of the panel.
const TITLE_TEXT: &str = "SUBMARINE DASHBOARD";

/// Draw the static title string.
pub fn draw_title(display: &mut SimulatorDisplay<Rgb565>) {
    Text::with_text_style(TITLE_TEXT, TITLE_POS, TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the FPS readout in the top-right corner.
pub fn draw_fps(display: &mut SimulatorDisplay<Rgb565>, fps: f32) {
    let mut fps_str: String<16> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::with_text_style(&fps_str, FPS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
