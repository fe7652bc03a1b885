//! Oxygen supply simulation and warning lamp state.
//!
//! The oxygen level is a fraction in `[0, 1]` derived from the depth state
//! every tick: it depletes at a fixed rate while the vessel is submerged and
//! refills at the same rate at the surface, clamped to its domain on every
//! update.
//!
//! # Lamp Modes and Hysteresis
//!
//! The lamp is Critical at or below 25%, Safe above 75%, and Neutral in
//! between — with one deliberate asymmetry: once Critical has latched,
//! climbing back into the middle band keeps the lamp Critical until the
//! level exceeds 75%. Without the latch, hovering around the 25% boundary
//! would flicker the lamp between Critical and Neutral every few frames.
//!
//! # Blink
//!
//! While Critical, a [`BlinkState`] toggles lamp and warning-text visibility
//! every half second. Leaving Critical resets the blink so the next critical
//! episode starts with the lamp lit.

use crate::animations::BlinkState;
use crate::config::{
    OXYGEN_CRITICAL_THRESHOLD, OXYGEN_DEPLETION_RATE, OXYGEN_REFILL_RATE, OXYGEN_SAFE_THRESHOLD,
};

/// Warning lamp display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampMode {
    /// Oxygen at or below the critical threshold (or latched there): red,
    /// blinking, with glow and warning text.
    Critical,
    /// Oxygen above the safe threshold: steady green with status text.
    Safe,
    /// Middle band (never latched critical): lamp dark, no text.
    Neutral,
}

/// Oxygen level plus derived lamp and blink state.
#[derive(Debug, Clone, Copy)]
pub struct OxygenSupply {
    /// Remaining oxygen as a fraction of capacity, `[0, 1]`.
    level: f32,
    lamp: LampMode,
    blink: BlinkState,
}

impl OxygenSupply {
    /// Start with a full tank: level 1.0, lamp Safe.
    pub const fn new() -> Self {
        Self {
            level: 1.0,
            lamp: LampMode::Safe,
            blink: BlinkState::new(),
        }
    }

    /// Integrate the level and re-derive lamp and blink state.
    ///
    /// `submerged` comes from the depth widget; `dt` is the frame delta and
    /// `now` the wall time used for blink pacing.
    pub fn derive(&mut self, submerged: bool, dt: f32, now: f32) {
        let rate = if submerged {
            -OXYGEN_DEPLETION_RATE
        } else {
            OXYGEN_REFILL_RATE
        };
        self.level = (self.level + rate * dt).clamp(0.0, 1.0);

        self.lamp = Self::next_mode(self.lamp, self.level);

        if self.lamp == LampMode::Critical {
            self.blink.update(now);
        } else {
            self.blink.reset(now);
        }
    }

    /// Threshold mapping with the sticky-Critical latch.
    fn next_mode(prev: LampMode, level: f32) -> LampMode {
        if level <= OXYGEN_CRITICAL_THRESHOLD {
            LampMode::Critical
        } else if level > OXYGEN_SAFE_THRESHOLD {
            LampMode::Safe
        } else if prev == LampMode::Critical {
            // Sticky: the middle band does not clear a critical warning
            LampMode::Critical
        } else {
            LampMode::Neutral
        }
    }

    /// Remaining oxygen fraction in `[0, 1]`.
    #[allow(dead_code)] // Exercised by the simulation tests
    pub const fn level(&self) -> f32 {
        self.level
    }

    /// Gauge fill ratio; identical to the level, both already normalized.
    pub const fn normalized_fill(&self) -> f32 {
        self.level
    }

    /// Current lamp mode.
    pub const fn lamp_mode(&self) -> LampMode {
        self.lamp
    }

    /// Whether the lamp (and warning text) is in its visible phase.
    ///
    /// Safe and Neutral lamps never blink; a Critical lamp follows the blink
    /// clock.
    pub const fn lamp_visible(&self) -> bool {
        match self.lamp {
            LampMode::Critical => self.blink.is_visible(),
            LampMode::Safe | LampMode::Neutral => true,
        }
    }
}

impl Default for OxygenSupply {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
