//! Application configuration constants.
//!
//! All layout positions, timing values, and simulation rates are `const`,
//! computed at compile time. Drawing code references these directly instead of
//! recalculating positions every frame, and the simulation modules share one
//! authoritative set of rates and thresholds.
//!
//! # Panel Layout
//!
//! ```text
//!  (0,0)                                                    (1280,0)
//!   ┌────────────────────────────────────────────────────────────┐
//!   │ [lamp]                                            FPS (opt)│
//!   │  O2                 ╭───────────────╮               DEPTH  │
//!   │ ┌──┐              ╭╯  sonar scope   ╰╮              ┌──┐   │
//!   │ │  │              │   center 560,360 │              │  │   │
//!   │ │  │              ╰╮   radius 220   ╭╯              │  │   │
//!   │ └──┘                ╰───────────────╯    (button)   └──┘   │
//!   │  LOW OXYGEN                            Depth: 142m         │
//!   │  title                                                     │
//!   └────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Display Configuration
// =============================================================================

/// Window width in pixels (fixed logical resolution).
pub const SCREEN_WIDTH: u32 = 1280;

/// Window height in pixels.
pub const SCREEN_HEIGHT: u32 = 720;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_micros(16_667);

// =============================================================================
// Sonar Scope
// =============================================================================

/// Center of the sonar scope disc.
pub const SCOPE_CENTER: Point = Point::new(560, 360);

/// Radius of the sonar scope disc in pixels.
pub const SCOPE_RADIUS: i32 = 220;

/// Thickness of the gradient bezel ring around the scope.
pub const SCOPE_BEZEL_THICKNESS: i32 = 22;

/// Sweep rotation speed in degrees per second.
pub const SWEEP_SPEED_DEG: f32 = 40.0;

/// Angular width of the rendered sweep wedge in degrees.
pub const SWEEP_WIDTH_DEG: f32 = 30.0;

/// Number of sub-wedges used to ramp the sweep brightness across its width.
pub const SWEEP_STEPS: usize = 12;

/// How long a trail sample stays visible before eviction, in seconds.
pub const TRAIL_DURATION_SECS: f32 = 0.5;

/// Capacity of the trail ring buffer. At 60 FPS a 0.5 s trail holds ~30
/// samples; the extra headroom absorbs bursts of short frames.
pub const TRAIL_CAPACITY: usize = 64;

/// Seconds between contact spawns while the sonar is enabled.
pub const CONTACT_SPAWN_INTERVAL_SECS: f32 = 7.0;

/// Seconds a contact takes to fade from full brightness to removal.
pub const CONTACT_FADE_SECS: f32 = 2.0;

/// Maximum concurrent contacts. With a 7 s spawn interval and a 2 s fade at
/// most one contact is normally alive; the capacity leaves a wide margin.
pub const CONTACT_CAPACITY: usize = 8;

/// Radius of the disk contacts can spawn in, inset so blips stay inside the
/// scope edge.
pub const CONTACT_FIELD_RADIUS: f32 = (SCOPE_RADIUS - 16) as f32;

/// Pixel radius of a contact blip core.
pub const CONTACT_RADIUS: i32 = 7;

/// Lifetime of one expanding pulse ring cycle, in seconds.
pub const PULSE_RING_LIFETIME_SECS: f32 = 2.0;

/// Angular rate (radians/second) of the sweep brightness pulse.
pub const PULSE_RATE: f32 = 2.0;

/// Lower bound of the pulse brightness modulation.
pub const PULSE_MIN: f32 = 0.3;

/// Upper bound of the pulse brightness modulation.
pub const PULSE_MAX: f32 = 1.0;

// =============================================================================
// Depth Simulation
// =============================================================================

/// Maximum commandable depth in meters.
pub const MAX_DEPTH_M: f32 = 250.0;

/// Rate at which dive/surface commands move the target depth, meters/second.
pub const DEPTH_COMMAND_RATE: f32 = 50.0;

/// Gain of the exponential chase of actual depth toward target depth.
pub const DEPTH_CHASE_GAIN: f32 = 2.0;

/// Below this distance the chase snaps depth to target, in meters.
pub const DEPTH_SNAP_EPSILON: f32 = 0.1;

// =============================================================================
// Oxygen Simulation
// =============================================================================

/// Oxygen consumed per second while submerged, as a fraction of capacity.
pub const OXYGEN_DEPLETION_RATE: f32 = 0.05;

/// Oxygen replenished per second while surfaced.
pub const OXYGEN_REFILL_RATE: f32 = 0.05;

/// At or below this level the lamp goes Critical.
pub const OXYGEN_CRITICAL_THRESHOLD: f32 = 0.25;

/// Above this level the lamp goes Safe (and sticky Critical releases).
pub const OXYGEN_SAFE_THRESHOLD: f32 = 0.75;

/// Seconds between blink visibility toggles of the Critical lamp and text.
pub const BLINK_INTERVAL_SECS: f32 = 0.5;

// =============================================================================
// Gauge Layout
// =============================================================================

/// Dimensions of the vertical gauge wells.
pub const GAUGE_SIZE: Size = Size::new(36, 300);

/// Number of 1 px gradient steps in the gauge frame.
pub const GAUGE_EDGE_STEPS: i32 = 10;

/// Top-left corner of the depth gauge well (right side of the panel).
pub const DEPTH_GAUGE_POS: Point = Point::new(1120, 210);

/// Top-left corner of the oxygen gauge well (left side of the panel).
pub const OXYGEN_GAUGE_POS: Point = Point::new(124, 210);

/// Centered position of the "DEPTH" label above the depth gauge.
pub const DEPTH_LABEL_POS: Point = Point::new(1138, 196);

/// Centered position of the depth readout below the depth gauge.
pub const DEPTH_VALUE_POS: Point = Point::new(1138, 548);

/// Centered position of the "OXYGEN" label above the oxygen gauge.
pub const OXYGEN_LABEL_POS: Point = Point::new(142, 196);

/// Centered position of the first oxygen status message line.
pub const MESSAGE_LINE1_POS: Point = Point::new(160, 580);

/// Centered position of the second oxygen status message line.
pub const MESSAGE_LINE2_POS: Point = Point::new(160, 608);

// =============================================================================
// Warning Lamp Layout
// =============================================================================

/// Center of the oxygen warning lamp, above the oxygen gauge.
pub const LAMP_CENTER: Point = Point::new(142, 130);

/// Radius of the lamp disc in pixels.
pub const LAMP_RADIUS: i32 = 20;

/// Thickness of the gradient bezel ring around the lamp.
pub const LAMP_BEZEL_THICKNESS: i32 = 8;

/// Outer radius of the critical glow halo.
pub const LAMP_GLOW_RADIUS: i32 = 60;

/// Number of concentric layers in the glow halo.
pub const LAMP_GLOW_LAYERS: i32 = 15;

// =============================================================================
// Sonar Toggle Button Layout
// =============================================================================

/// Center of the round sonar on/off button, below-right of the scope.
pub const BUTTON_CENTER: Point = Point::new(880, 600);

/// Radius of the button disc in pixels.
pub const BUTTON_RADIUS: i32 = 24;

/// Thickness of the gradient bezel ring around the button.
pub const BUTTON_BEZEL_THICKNESS: i32 = 8;

// =============================================================================
// Static Text Layout
// =============================================================================

/// Position of the static title text in the bottom-left corner.
pub const TITLE_POS: Point = Point::new(12, 706);

/// Position of the FPS counter (right-aligned, top-right corner).
pub const FPS_POS: Point = Point::new((SCREEN_WIDTH - 8) as i32, 18);
