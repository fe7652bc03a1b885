//! Widget rendering for the instrument panel.
//!
//! Each submodule draws one visual component from the simulation state the
//! core modules expose; none of them mutate state. All drawing goes through
//! embedded-graphics primitives into the simulator display, so the widgets
//! never touch the windowing backend directly.
//!
//! - [`scope`]: sonar disc, bezel, sweep wedge, trail, pulse ring, contacts
//! - [`gauges`]: vertical depth and oxygen gauges with labels and messages
//! - [`lamp`]: oxygen warning lamp with blink and critical glow
//! - [`button`]: round sonar on/off push button and its hit test
//! - [`hud`]: static title text and the optional FPS counter
//! - [`primitives`]: shared bezel-ring and gauge-frame gradients

mod button;
mod gauges;
mod hud;
mod lamp;
mod primitives;
mod scope;

pub use button::{button_contains, draw_sonar_button};
pub use gauges::{draw_depth_gauge, draw_oxygen_gauge};
pub use hud::{draw_fps, draw_title};
pub use scope::draw_sonar_scope;
