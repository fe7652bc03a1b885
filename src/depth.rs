//! Depth simulation: commanded target with smoothed actual depth.
//!
//! Dive/surface commands move a *target* depth at a fixed rate; the actual
//! depth chases the target exponentially and snaps once within a small
//! epsilon, so the gauge moves like a vessel with inertia rather than
//! jumping with the key press.
//!
//! Both values are clamped to `[0, MAX_DEPTH_M]` on every mutation. Commands
//! arrive pre-clamped from the input layer's per-frame `dt`, but the clamp is
//! applied here unconditionally so a stalled frame's oversized `dt` cannot
//! push the state out of its domain.

use crate::config::{DEPTH_CHASE_GAIN, DEPTH_COMMAND_RATE, DEPTH_SNAP_EPSILON, MAX_DEPTH_M};

/// Current and commanded depth in meters, both in `[0, MAX_DEPTH_M]`.
#[derive(Debug, Clone, Copy)]
pub struct DepthGauge {
    depth_m: f32,
    target_m: f32,
}

impl DepthGauge {
    /// Start surfaced: depth and target at 0 m.
    pub const fn new() -> Self {
        Self {
            depth_m: 0.0,
            target_m: 0.0,
        }
    }

    /// Dive command held for `dt` seconds: raise the target depth.
    pub fn command_increase(&mut self, dt: f32) {
        self.target_m = (self.target_m + DEPTH_COMMAND_RATE * dt).clamp(0.0, MAX_DEPTH_M);
    }

    /// Surface command held for `dt` seconds: lower the target depth.
    pub fn command_decrease(&mut self, dt: f32) {
        self.target_m = (self.target_m - DEPTH_COMMAND_RATE * dt).clamp(0.0, MAX_DEPTH_M);
    }

    /// Advance the chase of actual depth toward the target.
    ///
    /// Exponential approach with gain `DEPTH_CHASE_GAIN`; snaps exactly onto
    /// the target once within `DEPTH_SNAP_EPSILON` meters.
    pub fn tick(&mut self, dt: f32) {
        if (self.depth_m - self.target_m).abs() > DEPTH_SNAP_EPSILON {
            self.depth_m += (self.target_m - self.depth_m) * dt * DEPTH_CHASE_GAIN;
        } else {
            self.depth_m = self.target_m;
        }
        self.depth_m = self.depth_m.clamp(0.0, MAX_DEPTH_M);
    }

    /// Actual depth in meters.
    #[allow(dead_code)] // Exercised by the simulation tests
    pub const fn depth_m(&self) -> f32 {
        self.depth_m
    }

    /// Commanded target depth in meters.
    #[allow(dead_code)] // Exercised by the simulation tests
    pub const fn target_m(&self) -> f32 {
        self.target_m
    }

    /// Gauge fill ratio in `[0, 1]`.
    pub fn normalized_fill(&self) -> f32 {
        self.depth_m / MAX_DEPTH_M
    }

    /// Depth rounded to whole meters for the readout text.
    pub fn display_meters(&self) -> i32 {
        self.depth_m.round() as i32
    }

    /// Whether the vessel is below the surface (drives oxygen depletion).
    pub fn is_submerged(&self) -> bool {
        self.depth_m > 0.0
    }
}

impl Default for DepthGauge {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
