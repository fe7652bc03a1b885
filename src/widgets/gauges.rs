//! Vertical depth and oxygen gauges with their labels and status text.
//!
//! Both gauges share one body: a gradient frame, a black well, and a blue
//! fill rising from the bottom in proportion to the widget's fill ratio.
//! The well and fill are redrawn every frame (the values animate
//! continuously), which also erases the previous frame's fill level.
//!
//! The depth gauge adds a rounded meter readout beneath the well. The oxygen
//! gauge adds the warning lamp above the well and the status message text
//! beneath it: blinking red "LOW OXYGEN LEVEL" while critical, steady green
//! "Oxygen Level Sufficient" while safe, nothing in the neutral band.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::colors::{BLACK, GAUGE_BLUE, GREEN, RED};
use crate::config::{
    DEPTH_GAUGE_POS, DEPTH_LABEL_POS, DEPTH_VALUE_POS, GAUGE_SIZE, MESSAGE_LINE1_POS,
    MESSAGE_LINE2_POS, OXYGEN_GAUGE_POS, OXYGEN_LABEL_POS,
};
use crate::depth::DepthGauge;
use crate::oxygen::{LampMode, OxygenSupply};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, VALUE_STYLE_WHITE, WARNING_FONT};
use crate::widgets::lamp::draw_warning_lamp;
use crate::widgets::primitives::draw_gauge_frame;

/// Draw the depth gauge, its label, and the meter readout.
pub fn draw_depth_gauge(display: &mut SimulatorDisplay<Rgb565>, depth: &DepthGauge) {
    draw_gauge_body(display, DEPTH_GAUGE_POS, depth.normalized_fill());

    Text::with_text_style("DEPTH", DEPTH_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let mut readout: String<16> = String::new();
    let _ = write!(readout, "Depth: {}m", depth.display_meters());
    Text::with_text_style(&readout, DEPTH_VALUE_POS, VALUE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the oxygen gauge, its label, the warning lamp, and the status text.
pub fn draw_oxygen_gauge(display: &mut SimulatorDisplay<Rgb565>, oxygen: &OxygenSupply) {
    draw_gauge_body(display, OXYGEN_GAUGE_POS, oxygen.normalized_fill());

    Text::with_text_style("OXYGEN", OXYGEN_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    draw_warning_lamp(display, oxygen.lamp_mode(), oxygen.lamp_visible());
    draw_status_message(display, oxygen);
}

/// Shared gauge body: gradient frame, black well, bottom-up fill.
fn draw_gauge_body(display: &mut SimulatorDisplay<Rgb565>, top_left: Point, fill_ratio: f32) {
    draw_gauge_frame(display, top_left, GAUGE_SIZE);

    Rectangle::new(top_left, GAUGE_SIZE)
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    let fill_height = (GAUGE_SIZE.height as f32 * fill_ratio.clamp(0.0, 1.0)) as u32;
    if fill_height > 0 {
        Rectangle::new(
            Point::new(
                top_left.x,
                top_left.y + (GAUGE_SIZE.height - fill_height) as i32,
            ),
            Size::new(GAUGE_SIZE.width, fill_height),
        )
        .into_styled(PrimitiveStyle::with_fill(GAUGE_BLUE))
        .draw(display)
        .ok();
    }
}

/// Two-line oxygen status message under the gauge.
///
/// The critical warning follows the lamp's blink phase; the safe message is
/// steady; the neutral band shows nothing.
fn draw_status_message(display: &mut SimulatorDisplay<Rgb565>, oxygen: &OxygenSupply) {
    let (line1, line2, color) = match oxygen.lamp_mode() {
        LampMode::Critical if oxygen.lamp_visible() => ("LOW OXYGEN", "LEVEL", RED),
        LampMode::Safe => ("Oxygen Level", "Sufficient", GREEN),
        LampMode::Critical | LampMode::Neutral => return,
    };

    let style = MonoTextStyle::new(WARNING_FONT, color);
    Text::with_text_style(line1, MESSAGE_LINE1_POS, style, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(line2, MESSAGE_LINE2_POS, style, CENTERED)
        .draw(display)
        .ok();
}
