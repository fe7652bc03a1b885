//! Round sonar on/off push button and its mouse hit test.
//!
//! The button shares the bezel treatment of the lamp and scope. Its face
//! dims while the sonar is disabled, giving a subtle powered/unpowered cue
//! without an extra indicator.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::animations::scale_rgb565;
use crate::colors::BUTTON_BLUE;
use crate::config::{BUTTON_BEZEL_THICKNESS, BUTTON_CENTER, BUTTON_RADIUS};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE};
use crate::widgets::primitives::draw_bezel_ring;

/// Centered position of the "SONAR" caption under the button.
const BUTTON_LABEL_POS: Point = Point::new(
    BUTTON_CENTER.x,
    BUTTON_CENTER.y + BUTTON_RADIUS + BUTTON_BEZEL_THICKNESS + 14,
);

/// Draw the button; the face dims while the sonar is disabled.
pub fn draw_sonar_button(display: &mut SimulatorDisplay<Rgb565>, enabled: bool) {
    draw_bezel_ring(display, BUTTON_CENTER, BUTTON_RADIUS, BUTTON_BEZEL_THICKNESS);

    let face = if enabled {
        BUTTON_BLUE
    } else {
        scale_rgb565(BUTTON_BLUE, 0.4)
    };
    Circle::with_center(BUTTON_CENTER, (BUTTON_RADIUS * 2) as u32)
        .into_styled(PrimitiveStyle::with_fill(face))
        .draw(display)
        .ok();

    Text::with_text_style("SONAR", BUTTON_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Whether a cursor position falls inside the button's circular face.
pub fn button_contains(point: Point) -> bool {
    let dx = point.x - BUTTON_CENTER.x;
    let dy = point.y - BUTTON_CENTER.y;
    dx * dx + dy * dy <= BUTTON_RADIUS * BUTTON_RADIUS
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_center() {
        assert!(button_contains(BUTTON_CENTER), "Center must hit");
    }

    #[test]
    fn test_contains_edge() {
        let on_edge = Point::new(BUTTON_CENTER.x + BUTTON_RADIUS, BUTTON_CENTER.y);
        assert!(button_contains(on_edge), "Point on the rim should hit");

        let outside = Point::new(BUTTON_CENTER.x + BUTTON_RADIUS + 1, BUTTON_CENTER.y);
        assert!(!button_contains(outside), "One pixel past the rim should miss");
    }

    #[test]
    fn test_contains_diagonal() {
        // A corner of the bounding square lies outside the circle
        let corner = Point::new(
            BUTTON_CENTER.x + BUTTON_RADIUS,
            BUTTON_CENTER.y + BUTTON_RADIUS,
        );
        assert!(!button_contains(corner), "Bounding-box corner should miss the circle");
    }

    #[test]
    fn test_contains_far_away() {
        assert!(!button_contains(Point::new(0, 0)));
        assert!(!button_contains(Point::new(-50, -50)));
    }
}
