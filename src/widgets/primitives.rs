//! Low-level drawing primitives shared across widgets.
//!
//! The panel's circular instruments (scope, lamp, button) share the same
//! machined-metal bezel look: concentric stroke circles stepping from dark
//! gray at the inner edge to light gray at the outer edge. The rectangular
//! gauges use the equivalent treatment with nested stroke rectangles.
//!
//! Both gradients are drawn as N discrete 1-2 px steps; at panel scale the
//! steps read as a smooth gradient.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::gray565;
use crate::config::GAUGE_EDGE_STEPS;

/// Draw a circular bezel ring from `inner_radius` outward by `thickness`.
///
/// Gray ramps from ~10% at the inner edge to ~90% at the outer edge. The
/// 2 px stroke at 1 px radius steps overlaps slightly so no gaps appear on
/// the diagonals.
pub fn draw_bezel_ring(
    display: &mut SimulatorDisplay<Rgb565>,
    center: Point,
    inner_radius: i32,
    thickness: i32,
) {
    for i in 0..thickness {
        let t = i as f32 / thickness as f32;
        let intensity = (26.0 + 204.0 * t) as u8;
        let radius = inner_radius + i;
        Circle::with_center(center, (radius * 2) as u32)
            .into_styled(PrimitiveStyle::with_stroke(gray565(intensity), 2))
            .draw(display)
            .ok();
    }
}

/// Draw the gradient frame around a gauge well.
///
/// Nested 1 px stroke rectangles expand outward from the well boundary,
/// ramping from ~40% gray at the inner edge to ~80% at the outer edge.
pub fn draw_gauge_frame(display: &mut SimulatorDisplay<Rgb565>, top_left: Point, size: Size) {
    for i in 1..=GAUGE_EDGE_STEPS {
        let t = i as f32 / GAUGE_EDGE_STEPS as f32;
        let intensity = (102.0 + 102.0 * t) as u8;
        Rectangle::new(
            Point::new(top_left.x - i, top_left.y - i),
            Size::new(size.width + 2 * i as u32, size.height + 2 * i as u32),
        )
        .into_styled(PrimitiveStyle::with_stroke(gray565(intensity), 1))
        .draw(display)
        .ok();
    }
}
