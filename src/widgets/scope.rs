//! Sonar scope rendering: disc, bezel, sweep wedge, trail, pulse ring, blips.
//!
//! Draw order matters because Rgb565 has no alpha blending — later elements
//! overwrite earlier ones:
//!
//! 1. Bezel ring and black scope disc (the face everything fades toward)
//! 2. Phosphor trail wedges, oldest (dimmest) first
//! 3. Sweep wedge with its leading-edge brightness ramp (enabled only)
//! 4. Expanding pulse ring (enabled only)
//! 5. Contact blips on top
//!
//! All "transparency" is [`scale_rgb565`] toward the black disc. The sweep
//! wedge ramps from faint at the trailing edge to bright at the leading
//! edge, and the whole wedge breathes with [`pulse_intensity`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Sector};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::animations::{pulse_intensity, scale_rgb565};
use crate::colors::{BLACK, GREEN, PALE_GREEN, RED};
use crate::config::{
    CONTACT_RADIUS, PULSE_RING_LIFETIME_SECS, SCOPE_BEZEL_THICKNESS, SCOPE_CENTER, SCOPE_RADIUS,
    SWEEP_STEPS, SWEEP_WIDTH_DEG,
};
use crate::sonar::SonarScope;
use crate::widgets::primitives::draw_bezel_ring;

/// Diameter of the wedge geometry, inset slightly from the scope edge.
const WEDGE_DIAMETER: u32 = ((SCOPE_RADIUS - 4) * 2) as u32;

/// Widest angular gap between consecutive trail samples that still renders
/// as a wedge. Larger gaps come from stalled frames and would flash a huge
/// slice for one frame.
const MAX_TRAIL_SEGMENT_DEG: f32 = 10.0;

/// Draw the complete sonar scope from the current simulation state.
pub fn draw_sonar_scope(display: &mut SimulatorDisplay<Rgb565>, scope: &SonarScope, now: f32) {
    draw_bezel_ring(display, SCOPE_CENTER, SCOPE_RADIUS, SCOPE_BEZEL_THICKNESS);

    Circle::with_center(SCOPE_CENTER, (SCOPE_RADIUS * 2) as u32)
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    draw_trail(display, scope, now);

    if scope.is_enabled() {
        draw_sweep_wedge(display, scope.angle_deg(), now);
        draw_pulse_ring(display, now);
    }

    draw_contacts(display, scope, now);
}

/// Fading wedges between consecutive trail samples.
///
/// Each segment's brightness is the average of both samples' decay, halved
/// so the trail stays subtler than the live sweep.
fn draw_trail(display: &mut SimulatorDisplay<Rgb565>, scope: &SonarScope, now: f32) {
    for (a, b) in scope.trail().zip(scope.trail().skip(1)) {
        let sweep = (b.angle_deg - a.angle_deg).rem_euclid(360.0);
        if sweep <= 0.0 || sweep > MAX_TRAIL_SEGMENT_DEG {
            continue;
        }
        let brightness = (a.decay(now) + b.decay(now)) * 0.5 * 0.5;
        Sector::with_center(
            SCOPE_CENTER,
            WEDGE_DIAMETER,
            a.angle_deg.deg(),
            sweep.deg(),
        )
        .into_styled(PrimitiveStyle::with_fill(scale_rgb565(GREEN, brightness)))
        .draw(display)
        .ok();
    }
}

/// The live sweep wedge, centered on the needle angle.
///
/// Rendered as sub-wedges ramping from faint at the trailing edge to bright
/// at the leading edge, all modulated by the breathing pulse.
fn draw_sweep_wedge(display: &mut SimulatorDisplay<Rgb565>, angle_deg: f32, now: f32) {
    let pulse = pulse_intensity(now);
    let step = SWEEP_WIDTH_DEG / SWEEP_STEPS as f32;

    for i in 0..SWEEP_STEPS {
        let start = angle_deg - SWEEP_WIDTH_DEG / 2.0 + i as f32 * step;
        let ramp = (i + 1) as f32 / SWEEP_STEPS as f32;
        let brightness = (0.15 + 0.55 * ramp) * pulse;
        Sector::with_center(SCOPE_CENTER, WEDGE_DIAMETER, start.deg(), step.deg())
            .into_styled(PrimitiveStyle::with_fill(scale_rgb565(GREEN, brightness)))
            .draw(display)
            .ok();
    }
}

/// One expanding, fading ring per pulse cycle.
fn draw_pulse_ring(display: &mut SimulatorDisplay<Rgb565>, now: f32) {
    let progress = now.rem_euclid(PULSE_RING_LIFETIME_SECS) / PULSE_RING_LIFETIME_SECS;
    let radius = (progress * SCOPE_RADIUS as f32) as i32;
    if radius < 2 || radius >= SCOPE_RADIUS {
        return;
    }
    let brightness = (1.0 - progress) * 0.5;
    Circle::with_center(SCOPE_CENTER, (radius * 2) as u32)
        .into_styled(PrimitiveStyle::with_stroke(
            scale_rgb565(PALE_GREEN, brightness),
            2,
        ))
        .draw(display)
        .ok();
}

/// Live contacts: a bright core over a dim halo, both fading with age.
fn draw_contacts(display: &mut SimulatorDisplay<Rgb565>, scope: &SonarScope, now: f32) {
    for contact in scope.contacts() {
        let alpha = contact.alpha(now);
        let center = Point::new(
            SCOPE_CENTER.x + contact.dx as i32,
            SCOPE_CENTER.y + contact.dy as i32,
        );

        Circle::with_center(center, ((CONTACT_RADIUS + 4) * 2) as u32)
            .into_styled(PrimitiveStyle::with_fill(scale_rgb565(RED, alpha * 0.35)))
            .draw(display)
            .ok();
        Circle::with_center(center, (CONTACT_RADIUS * 2) as u32)
            .into_styled(PrimitiveStyle::with_fill(scale_rgb565(RED, alpha)))
            .draw(display)
            .ok();
    }
}
