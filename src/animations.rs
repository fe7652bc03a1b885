//! Animation timing and color helpers shared by the widgets.
//!
//! This module provides:
//! - **Phosphor fades**: [`scale_rgb565`] scales a color toward black, the
//!   RGB565 equivalent of alpha compositing onto the black scope face. The
//!   sweep trail, contact blips, and pulse ring all decay through it.
//! - **Pulse modulation**: [`pulse_intensity`] maps a sine of wall time into
//!   a bounded brightness factor for the sweep wedge.
//! - **Blink timing**: [`BlinkState`] toggles a visibility flag at a fixed
//!   wall-clock cadence, driving the critical lamp and low-oxygen text.
//!
//! Color math uses integer fixed-point on the raw RGB565 components, the same
//! technique as the background color transitions in the original dashboard.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::config::{BLINK_INTERVAL_SECS, PULSE_MAX, PULSE_MIN, PULSE_RATE};

// =============================================================================
// Phosphor Fade
// =============================================================================

/// Scale a color toward black by `brightness` in `[0.0, 1.0]`.
///
/// `brightness = 1.0` returns the color unchanged; `0.0` returns black.
/// Out-of-range inputs are clamped. Each RGB565 component is scaled with
/// 8-bit fixed-point math.
pub fn scale_rgb565(color: Rgb565, brightness: f32) -> Rgb565 {
    let t_fixed = (brightness.clamp(0.0, 1.0) * 256.0) as u32;

    let raw = u32::from(color.into_storage());
    let r = (raw >> 11) & 0x1F;
    let g = (raw >> 5) & 0x3F;
    let b = raw & 0x1F;

    Rgb565::new(
        ((r * t_fixed) >> 8) as u8,
        ((g * t_fixed) >> 8) as u8,
        ((b * t_fixed) >> 8) as u8,
    )
}

// =============================================================================
// Sweep Pulse
// =============================================================================

/// Brightness factor for the sweep wedge at wall time `now`.
///
/// Follows `0.5 + 0.5*sin(now * PULSE_RATE)` remapped into
/// `[PULSE_MIN, PULSE_MAX]`, so the wedge breathes instead of blinking.
pub fn pulse_intensity(now: f32) -> f32 {
    let wave = (now * PULSE_RATE).sin().mul_add(0.5, 0.5);
    PULSE_MIN + (PULSE_MAX - PULSE_MIN) * wave
}

// =============================================================================
// Blink Timing
// =============================================================================

/// Periodic on/off visibility with a fixed toggle interval.
///
/// Tracks the wall time of the last toggle and flips `visible` whenever
/// `BLINK_INTERVAL_SECS` has elapsed, giving a ~1 s on/off period. The lamp
/// resets the state when leaving the critical mode so the next critical
/// episode starts with the lamp on.
#[derive(Debug, Clone, Copy)]
pub struct BlinkState {
    last_toggle: f32,
    visible: bool,
}

impl BlinkState {
    /// Start visible, with the toggle clock anchored at time zero.
    pub const fn new() -> Self {
        Self {
            last_toggle: 0.0,
            visible: true,
        }
    }

    /// Advance the blink clock to wall time `now`, toggling if due.
    pub fn update(&mut self, now: f32) {
        if now - self.last_toggle >= BLINK_INTERVAL_SECS {
            self.visible = !self.visible;
            self.last_toggle = now;
        }
    }

    /// Force the visible phase and re-anchor the toggle clock at `now`.
    pub const fn reset(&mut self, now: f32) {
        self.visible = true;
        self.last_toggle = now;
    }

    /// Whether the blinking element is currently in its visible phase.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for BlinkState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
