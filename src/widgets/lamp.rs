//! Oxygen warning lamp: bezel, face, and critical glow halo.
//!
//! The glow is a stack of concentric filled circles, largest and dimmest
//! first, so the overdraw builds a radial gradient around the lit lamp.
//! Because nothing else repaints this corner of the panel, the full glow
//! extent is cleared to the panel background first — otherwise the halo of
//! the previous blink phase would linger after the lamp turns off.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::animations::scale_rgb565;
use crate::colors::{GREEN, LAMP_OFF, PANEL_BG, RED};
use crate::config::{
    LAMP_BEZEL_THICKNESS, LAMP_CENTER, LAMP_GLOW_LAYERS, LAMP_GLOW_RADIUS, LAMP_RADIUS,
};
use crate::oxygen::LampMode;
use crate::widgets::primitives::draw_bezel_ring;

/// Draw the lamp for the given mode and blink phase.
pub fn draw_warning_lamp(display: &mut SimulatorDisplay<Rgb565>, mode: LampMode, visible: bool) {
    // Erase the previous frame's glow before deciding whether to redraw it
    Circle::with_center(LAMP_CENTER, (LAMP_GLOW_RADIUS * 2) as u32)
        .into_styled(PrimitiveStyle::with_fill(PANEL_BG))
        .draw(display)
        .ok();

    let lit_critical = mode == LampMode::Critical && visible;
    if lit_critical {
        draw_glow(display);
    }

    draw_bezel_ring(display, LAMP_CENTER, LAMP_RADIUS, LAMP_BEZEL_THICKNESS);

    let face = match mode {
        LampMode::Critical if visible => RED,
        LampMode::Critical => LAMP_OFF,
        LampMode::Safe => GREEN,
        LampMode::Neutral => LAMP_OFF,
    };
    Circle::with_center(LAMP_CENTER, (LAMP_RADIUS * 2) as u32)
        .into_styled(PrimitiveStyle::with_fill(face))
        .draw(display)
        .ok();
}

/// Radial red glow: concentric layers brightening toward the lamp.
fn draw_glow(display: &mut SimulatorDisplay<Rgb565>) {
    for layer in (1..=LAMP_GLOW_LAYERS).rev() {
        let t = layer as f32 / LAMP_GLOW_LAYERS as f32;
        let radius = LAMP_RADIUS + ((LAMP_GLOW_RADIUS - LAMP_RADIUS) as f32 * t) as i32;
        let brightness = 0.05 + 0.30 * (1.0 - t);
        Circle::with_center(LAMP_CENTER, (radius * 2) as u32)
            .into_styled(PrimitiveStyle::with_fill(scale_rgb565(RED, brightness)))
            .draw(display)
            .ok();
    }
}
