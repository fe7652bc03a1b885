//! Per-frame orchestration of the instrument panel.
//!
//! [`Dashboard`] owns the entire simulation state — sonar scope, depth gauge,
//! oxygen supply — constructed once at startup with the documented initial
//! values (sweep at 0°, surfaced, full oxygen, sonar enabled). There are no
//! module-level globals; the main loop owns one `Dashboard` and threads it
//! through update and draw.
//!
//! # Frame Order
//!
//! `update` routes input and advances the widgets in dependency order: the
//! edge-triggered toggle reaches the sonar, held commands reach the depth
//! target, the depth chase ticks, oxygen derives from the resulting depth,
//! and finally the sonar advances.
//!
//! `draw` composites in a fixed order so later elements layer correctly:
//! sonar scope, toggle button, depth gauge, oxygen gauge with lamp and
//! message, static title.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::SimulatorDisplay;
use rand::Rng;

use crate::depth::DepthGauge;
use crate::input::InputState;
use crate::oxygen::OxygenSupply;
use crate::sonar::SonarScope;
use crate::widgets;

/// All simulation state for one run of the panel.
#[derive(Debug)]
pub struct Dashboard {
    sonar: SonarScope,
    depth: DepthGauge,
    oxygen: OxygenSupply,
}

impl Dashboard {
    /// Initial state: sonar enabled at 0°, surfaced, oxygen full.
    pub const fn new() -> Self {
        Self {
            sonar: SonarScope::new(),
            depth: DepthGauge::new(),
            oxygen: OxygenSupply::new(),
        }
    }

    /// Advance one frame of simulation.
    ///
    /// `dt` is the elapsed time since the previous frame and `now` the wall
    /// time since startup; both in seconds. `input` must have been sampled
    /// for this frame already.
    pub fn update(&mut self, input: &mut InputState, dt: f32, now: f32, rng: &mut impl Rng) {
        if input.take_sonar_toggle() {
            self.sonar.toggle();
        }
        if input.dive_held() {
            self.depth.command_increase(dt);
        }
        if input.surface_held() {
            self.depth.command_decrease(dt);
        }

        self.depth.tick(dt);
        self.oxygen.derive(self.depth.is_submerged(), dt, now);
        self.sonar.update(dt, now, rng);
    }

    /// Draw every widget in the fixed panel order.
    ///
    /// The caller clears the display to the panel background first.
    pub fn draw(&self, display: &mut SimulatorDisplay<Rgb565>, now: f32) {
        widgets::draw_sonar_scope(display, &self.sonar, now);
        widgets::draw_sonar_button(display, self.sonar.is_enabled());
        widgets::draw_depth_gauge(display, &self.depth);
        widgets::draw_oxygen_gauge(display, &self.oxygen);
        widgets::draw_title(display);
    }

    #[allow(dead_code)] // Exercised by the simulation tests
    pub const fn sonar(&self) -> &SonarScope {
        &self.sonar
    }

    #[allow(dead_code)] // Exercised by the simulation tests
    pub const fn depth(&self) -> &DepthGauge {
        &self.depth
    }

    #[allow(dead_code)] // Exercised by the simulation tests
    pub const fn oxygen(&self) -> &OxygenSupply {
        &self.oxygen
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_DEPTH_M;
    use crate::oxygen::LampMode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Sample fixed input levels and advance one 0.1 s frame.
    fn frame(dash: &mut Dashboard, input: &mut InputState, now: f32, dive: bool, toggle: bool) {
        input.sample(dive, false, toggle);
        dash.update(input, 0.1, now, &mut rng());
    }

    #[test]
    fn test_initial_state() {
        let dash = Dashboard::new();
        assert!(dash.sonar().is_enabled(), "Sonar starts enabled");
        assert_eq!(dash.sonar().angle_deg(), 0.0, "Sweep starts at 0°");
        assert_eq!(dash.depth().depth_m(), 0.0, "Starts surfaced");
        assert_eq!(dash.oxygen().level(), 1.0, "Oxygen starts full");
        assert_eq!(dash.oxygen().lamp_mode(), LampMode::Safe);
    }

    #[test]
    fn test_toggle_edge_routes_to_sonar() {
        let mut dash = Dashboard::new();
        let mut input = InputState::new();

        frame(&mut dash, &mut input, 0.1, false, true);
        assert!(!dash.sonar().is_enabled(), "First press should disable the sonar");

        // Held across frames: no further toggling
        for step in 2..=5 {
            frame(&mut dash, &mut input, step as f32 * 0.1, false, true);
            assert!(!dash.sonar().is_enabled(), "Held toggle must not flip again");
        }

        // Release and press again: re-enables
        frame(&mut dash, &mut input, 0.6, false, false);
        frame(&mut dash, &mut input, 0.7, false, true);
        assert!(dash.sonar().is_enabled(), "New press should re-enable");
    }

    #[test]
    fn test_dive_command_moves_depth_and_depletes_oxygen() {
        let mut dash = Dashboard::new();
        let mut input = InputState::new();

        // Hold dive for 20 s of simulated time
        for step in 1..=200 {
            frame(&mut dash, &mut input, step as f32 * 0.1, true, false);
        }
        assert!(dash.depth().is_submerged(), "Held dive should submerge the vessel");
        assert!(
            dash.depth().depth_m() > 100.0,
            "Depth should have chased well below the surface"
        );
        assert!(
            dash.oxygen().level() < 1.0,
            "Oxygen should deplete while submerged"
        );
    }

    #[test]
    fn test_depth_and_oxygen_stay_in_domain() {
        let mut dash = Dashboard::new();
        let mut input = InputState::new();

        for step in 1..=1200 {
            frame(&mut dash, &mut input, step as f32 * 0.1, true, false);
            assert!(
                (0.0..=MAX_DEPTH_M).contains(&dash.depth().depth_m()),
                "Depth out of domain"
            );
            assert!(
                (0.0..=1.0).contains(&dash.oxygen().level()),
                "Oxygen out of domain"
            );
        }
        // 120 s submerged fully drains the tank and latches critical
        assert_eq!(dash.oxygen().level(), 0.0);
        assert_eq!(dash.oxygen().lamp_mode(), LampMode::Critical);
    }

    #[test]
    fn test_surfacing_refills_oxygen() {
        let mut dash = Dashboard::new();
        let mut input = InputState::new();

        // Drain some oxygen at depth
        for step in 1..=100 {
            frame(&mut dash, &mut input, step as f32 * 0.1, true, false);
        }
        let drained = dash.oxygen().level();
        assert!(drained < 1.0);

        // Command the surface and wait for the chase + refill
        for step in 101..=1200 {
            input.sample(false, true, false);
            dash.update(&mut input, 0.1, step as f32 * 0.1, &mut rng());
        }
        assert!(!dash.depth().is_submerged(), "Should be back at the surface");
        assert!(
            dash.oxygen().level() > drained,
            "Oxygen should refill at the surface"
        );
    }

    #[test]
    fn test_disabled_sonar_does_not_stop_depth_or_oxygen() {
        let mut dash = Dashboard::new();
        let mut input = InputState::new();

        frame(&mut dash, &mut input, 0.1, false, true);
        assert!(!dash.sonar().is_enabled());

        for step in 2..=100 {
            frame(&mut dash, &mut input, step as f32 * 0.1, true, false);
        }
        assert!(dash.depth().is_submerged(), "Depth must keep simulating");
        assert!(dash.oxygen().level() < 1.0, "Oxygen must keep simulating");
        assert_eq!(dash.sonar().angle_deg(), 0.0, "Sweep stays frozen meanwhile");
    }
}
