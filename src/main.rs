// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in animation calculations
#![allow(clippy::cast_sign_loss)] // i32->u32 where geometry guarantees the sign

//! Submarine instrument panel simulator.
//!
//! An animated dashboard with three coupled instruments, rendered at 60 FPS
//! into an SDL window via `embedded-graphics-simulator`:
//!
//! - **Sonar scope**: rotating sweep with a phosphor trail, an expanding
//!   pulse ring, and transient contact blips that fade out over two seconds.
//!   Toggled on and off with a key or by clicking the panel button.
//! - **Depth gauge**: dive/surface commands move a target depth at a fixed
//!   rate; the actual depth chases it smoothly, like a vessel with inertia.
//! - **Oxygen gauge**: depletes while submerged, refills at the surface, and
//!   drives a warning lamp with blink, glow, and status text. The critical
//!   warning is sticky: it only clears once the level climbs back above 75%.
//!
//! # Controls
//!
//! | Key / Mouse | Action |
//! |-------------|--------|
//! | `W` (hold) | Dive (increase target depth) |
//! | `S` (hold) | Surface (decrease target depth) |
//! | `T` / click button | Toggle sonar (one toggle per press) |
//! | `F` | Toggle FPS display |
//! | `Esc` / close | Quit |
//!
//! # Architecture
//!
//! ```text
//! events ──> InputState ──> Dashboard::update ──> Dashboard::draw ──> window
//!             (edge latch)    ├── DepthGauge        ├── scope widget
//!                             ├── OxygenSupply      ├── gauges + lamp
//!                             └── SonarScope        └── button, title
//! ```
//!
//! The simulation is single-threaded and frame-stepped: sample input, advance
//! the widgets by the frame delta, redraw everything, present, then sleep the
//! remainder of the 1/60 s frame budget. All state lives in one [`Dashboard`]
//! owned by the main loop; widgets are pure drawing functions over it.
//!
//! Simulation state is clamped to its domain on every update, so an
//! oversized frame delta after a stall cannot push depth or oxygen out of
//! range. Initialization failures (no SDL, no video device) abort startup
//! inside the simulator backend with a nonzero exit; after startup no error
//! crosses the draw loop.

mod animations;
mod colors;
mod config;
mod dashboard;
mod depth;
mod input;
mod oxygen;
mod sonar;
mod styles;
mod widgets;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};

use colors::PANEL_BG;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use dashboard::Dashboard;
use input::InputState;

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Submarine Dashboard", &output_settings);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut dashboard = Dashboard::new();
    let mut input = InputState::new();
    let mut rng = rand::rng();

    // Raw key/mouse levels, folded into InputState once per frame
    let mut dive_key_held = false;
    let mut surface_key_held = false;
    let mut toggle_key_held = false;
    let mut button_mouse_held = false;

    // FPS counter state (F key toggles)
    let mut show_fps = false;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // Present one frame before polling events (the simulator requires an
    // update before its first event pump)
    display.clear(PANEL_BG).ok();
    dashboard.draw(&mut display, 0.0);
    window.update(&display);

    let start_time = Instant::now();
    let mut last_frame = Instant::now();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;
        let now = frame_start.duration_since(start_time).as_secs_f32();

        // Handle window events (close, key and mouse state)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // OS key repeat carries no new information for held keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return,
                        Keycode::W => dive_key_held = true,
                        Keycode::S => surface_key_held = true,
                        Keycode::T => toggle_key_held = true,
                        Keycode::F => show_fps = !show_fps,
                        _ => {}
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::W => dive_key_held = false,
                    Keycode::S => surface_key_held = false,
                    Keycode::T => toggle_key_held = false,
                    _ => {}
                },
                SimulatorEvent::MouseButtonDown { mouse_btn, point } => {
                    // Only clicks that land on the button count as a press
                    if mouse_btn == MouseButton::Left && widgets::button_contains(point) {
                        button_mouse_held = true;
                    }
                }
                SimulatorEvent::MouseButtonUp { mouse_btn, .. } => {
                    if mouse_btn == MouseButton::Left {
                        button_mouse_held = false;
                    }
                }
                _ => {}
            }
        }

        // Fold raw levels into the per-frame input sample; the toggle latch
        // turns the held key/button level into a single edge per press
        input.sample(
            dive_key_held,
            surface_key_held,
            toggle_key_held || button_mouse_held,
        );

        // Advance the simulation and redraw the whole panel
        dashboard.update(&mut input, dt, now, &mut rng);

        display.clear(PANEL_BG).ok();
        dashboard.draw(&mut display, now);
        if show_fps {
            widgets::draw_fps(&mut display, current_fps);
        }
        window.update(&display);

        // FPS calculation (updated once per second)
        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // Sleep to maintain the target frame rate (~60 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
