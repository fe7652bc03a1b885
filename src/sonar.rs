//! Sonar scope simulation: sweep rotation, phosphor trail, and contacts.
//!
//! The scope owns three time-driven pieces of state:
//!
//! - **Sweep**: an angle in `[0, 360)` advancing at a fixed rate while the
//!   sonar is enabled, wrapping at 360. Frozen while disabled.
//! - **Trail**: a bounded ring of `{angle, timestamp}` samples approximating
//!   phosphor persistence. Appended once per enabled tick, evicted
//!   oldest-first once samples exceed the trail duration.
//! - **Contacts**: transient returns spawned on a fixed interval at a random
//!   position inside the scope disk, fading linearly over two seconds.
//!
//! # Disabled Behavior
//!
//! Toggling the sonar off freezes the sweep and stops trail appends and
//! contact spawns. Existing contacts keep aging and fading on their own
//! clocks and the trail keeps evicting, so the display decays naturally
//! instead of snapping clear.
//!
//! # Memory
//!
//! Both collections are fixed-capacity `heapless` buffers sized for the
//! worst case, so steady-state operation performs no allocation. Contact
//! removal uses `retain`, which compacts in place without reordering the
//! survivors.

use heapless::{Deque, Vec};
use rand::Rng;

use crate::config::{
    CONTACT_CAPACITY, CONTACT_FADE_SECS, CONTACT_FIELD_RADIUS, CONTACT_SPAWN_INTERVAL_SECS,
    SWEEP_SPEED_DEG, TRAIL_CAPACITY, TRAIL_DURATION_SECS,
};

// =============================================================================
// Trail Samples
// =============================================================================

/// One recorded sweep position, used to render the fading phosphor trail.
#[derive(Debug, Clone, Copy)]
pub struct TrailSample {
    /// Sweep angle at the time of the sample, degrees in `[0, 360)`.
    pub angle_deg: f32,
    /// Wall time the sample was taken, seconds.
    pub timestamp: f32,
}

impl TrailSample {
    /// Remaining brightness of this sample at wall time `now`, in `[0, 1]`.
    ///
    /// Decays linearly from 1 at insertion to 0 at the trail duration.
    pub fn decay(&self, now: f32) -> f32 {
        (1.0 - (now - self.timestamp) / TRAIL_DURATION_SECS).clamp(0.0, 1.0)
    }
}

// =============================================================================
// Contacts
// =============================================================================

/// A transient sonar return ("blip") with a fixed fade-out lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Horizontal offset from the scope center, pixels.
    pub dx: f32,
    /// Vertical offset from the scope center, pixels.
    pub dy: f32,
    /// Wall time the contact appeared, seconds.
    pub spawn_time: f32,
}

impl Contact {
    /// Brightness of this contact at wall time `now`: `1 - age/fade`,
    /// clamped to `[0, 1]`.
    pub fn alpha(&self, now: f32) -> f32 {
        (1.0 - (now - self.spawn_time) / CONTACT_FADE_SECS).clamp(0.0, 1.0)
    }

    /// Whether this contact has outlived its fade duration.
    pub fn is_expired(&self, now: f32) -> bool {
        now - self.spawn_time >= CONTACT_FADE_SECS
    }
}

// =============================================================================
// Sonar Scope
// =============================================================================

/// Complete sonar state: enable mode, sweep angle, trail, and contacts.
#[derive(Debug)]
pub struct SonarScope {
    enabled: bool,
    angle_deg: f32,
    trail: Deque<TrailSample, TRAIL_CAPACITY>,
    contacts: Vec<Contact, CONTACT_CAPACITY>,
    /// Wall time of the most recent spawn; `None` until the first spawn,
    /// so the first enabled tick spawns immediately (spawn-then-wait).
    last_spawn: Option<f32>,
}

impl SonarScope {
    /// New scope: enabled, sweep at 0°, no trail or contacts.
    pub const fn new() -> Self {
        Self {
            enabled: true,
            angle_deg: 0.0,
            trail: Deque::new(),
            contacts: Vec::new(),
            last_spawn: None,
        }
    }

    /// Flip between enabled and disabled.
    pub const fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current sweep angle, degrees in `[0, 360)`.
    pub const fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Trail samples in insertion order (oldest first).
    pub fn trail(&self) -> impl Iterator<Item = &TrailSample> {
        self.trail.iter()
    }

    /// Live contacts. Order is stable across removals.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Advance the simulation by `dt` seconds to wall time `now`.
    ///
    /// Contact aging and trail eviction run in every mode; sweep rotation,
    /// trail appends, and spawning only while enabled.
    pub fn update(&mut self, dt: f32, now: f32, rng: &mut impl Rng) {
        self.contacts.retain(|c| !c.is_expired(now));
        self.evict_trail(now);

        if !self.enabled {
            return;
        }

        self.angle_deg = (self.angle_deg + SWEEP_SPEED_DEG * dt).rem_euclid(360.0);
        self.push_trail(now);

        let spawn_due = match self.last_spawn {
            None => true,
            Some(t) => now - t >= CONTACT_SPAWN_INTERVAL_SECS,
        };
        if spawn_due {
            self.spawn_contact(now, rng);
            self.last_spawn = Some(now);
        }
    }

    /// Append the current sweep position to the trail.
    fn push_trail(&mut self, now: f32) {
        if self.trail.is_full() {
            self.trail.pop_front();
        }
        let _ = self.trail.push_back(TrailSample {
            angle_deg: self.angle_deg,
            timestamp: now,
        });
    }

    /// Drop trail samples that have reached the trail duration, oldest first.
    fn evict_trail(&mut self, now: f32) {
        while let Some(front) = self.trail.front() {
            if now - front.timestamp >= TRAIL_DURATION_SECS {
                self.trail.pop_front();
            } else {
                break;
            }
        }
    }

    /// Place one contact uniformly inside the scope disk.
    ///
    /// Area-correct sampling: `r = R*sqrt(u)` with uniform `u`, so blips do
    /// not cluster toward the center. A full buffer drops the spawn, which
    /// cannot happen at the configured spawn/fade rates.
    fn spawn_contact(&mut self, now: f32, rng: &mut impl Rng) {
        let radius = CONTACT_FIELD_RADIUS * rng.random::<f32>().sqrt();
        let theta = rng.random_range(0.0..core::f32::consts::TAU);
        let _ = self.contacts.push(Contact {
            dx: theta.cos() * radius,
            dy: theta.sin() * radius,
            spawn_time: now,
        });
    }
}

impl Default for SonarScope {
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
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Drive the scope with fixed-size ticks from `t=dt` up to `t_end` inclusive,
    /// recording the wall times at which the contact count increased.
    fn run_and_record_spawns(scope: &mut SonarScope, dt: f32, t_end: f32) -> std::vec::Vec<f32> {
        let mut rng = rng();
        let mut spawn_times = std::vec::Vec::new();
        let mut prev_len = scope.contacts().len();
        let steps = (t_end / dt).round() as u32;
        for step in 1..=steps {
            let now = step as f32 * dt;
            scope.update(dt, now, &mut rng);
            if scope.contacts().len() > prev_len {
                spawn_times.push(now);
            }
            prev_len = scope.contacts().len();
        }
        spawn_times
    }

    // -------------------------------------------------------------------------
    // Sweep Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_scope_initial_state() {
        let scope = SonarScope::new();
        assert!(scope.is_enabled(), "Scope should start enabled");
        assert_eq!(scope.angle_deg(), 0.0, "Sweep should start at 0°");
        assert_eq!(scope.trail().count(), 0, "Trail should start empty");
        assert!(scope.contacts().is_empty(), "No contacts at startup");
    }

    #[test]
    fn test_sweep_advances_at_fixed_rate() {
        let mut scope = SonarScope::new();
        let mut rng = rng();

        // 1 second in 10 ticks: 40°/s -> 40°
        for step in 1..=10 {
            scope.update(0.1, step as f32 * 0.1, &mut rng);
        }
        assert!(
            (scope.angle_deg() - SWEEP_SPEED_DEG).abs() < 1e-3,
            "After 1 s the sweep should be at {SWEEP_SPEED_DEG}°, got {}",
            scope.angle_deg()
        );
    }

    #[test]
    fn test_sweep_wraparound_law() {
        let mut scope = SonarScope::new();
        let mut rng = rng();

        // 100 ticks of 0.1 s at 40°/s: total D = 400°, angle must be D mod 360
        for step in 1..=100 {
            scope.update(0.1, step as f32 * 0.1, &mut rng);
        }
        let expected = (100.0 * 0.1 * SWEEP_SPEED_DEG).rem_euclid(360.0);
        assert!(
            (scope.angle_deg() - expected).abs() < 1e-2,
            "Angle {} should equal total rotation mod 360 = {expected}",
            scope.angle_deg()
        );
        assert!(
            (0.0..360.0).contains(&scope.angle_deg()),
            "Angle must stay in [0, 360)"
        );
    }

    #[test]
    fn test_sweep_angle_always_in_domain() {
        let mut scope = SonarScope::new();
        let mut rng = rng();
        for step in 1..=500 {
            scope.update(0.033, step as f32 * 0.033, &mut rng);
            assert!(
                (0.0..360.0).contains(&scope.angle_deg()),
                "Angle {} escaped [0, 360) at step {step}",
                scope.angle_deg()
            );
        }
    }

    // -------------------------------------------------------------------------
    // Trail Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_trail_samples_within_duration() {
        let mut scope = SonarScope::new();
        let mut rng = rng();
        for step in 1..=120 {
            let now = step as f32 * 0.016;
            scope.update(0.016, now, &mut rng);
            for sample in scope.trail() {
                assert!(
                    now - sample.timestamp < TRAIL_DURATION_SECS + 1e-6,
                    "Trail invariant violated: sample age {} at t={now}",
                    now - sample.timestamp
                );
            }
        }
    }

    #[test]
    fn test_trail_sample_absent_after_duration() {
        let mut scope = SonarScope::new();
        let mut rng = rng();

        // Insert one sample at t=0.1, then advance past the trail duration
        scope.update(0.1, 0.1, &mut rng);
        assert_eq!(scope.trail().count(), 1);

        scope.update(0.1, 0.1 + TRAIL_DURATION_SECS, &mut rng);
        assert!(
            scope.trail().all(|s| s.timestamp > 0.1),
            "A sample inserted at T must be gone at T + trail duration"
        );
    }

    #[test]
    fn test_trail_decay_endpoints() {
        let sample = TrailSample {
            angle_deg: 0.0,
            timestamp: 5.0,
        };
        assert!((sample.decay(5.0) - 1.0).abs() < 1e-6, "Fresh sample decays from 1");
        assert!(
            sample.decay(5.0 + TRAIL_DURATION_SECS) < 1e-6,
            "Expired sample should decay to 0"
        );
        assert!(
            (sample.decay(5.0 + TRAIL_DURATION_SECS / 2.0) - 0.5).abs() < 1e-3,
            "Decay should be linear"
        );
    }

    #[test]
    fn test_trail_bounded_by_capacity() {
        let mut scope = SonarScope::new();
        let mut rng = rng();
        // Tiny dt means samples outlive the window by count; capacity must hold
        for step in 1..=1000 {
            scope.update(0.001, step as f32 * 0.001, &mut rng);
            assert!(scope.trail().count() <= TRAIL_CAPACITY);
        }
    }

    // -------------------------------------------------------------------------
    // Contact Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_contact_alpha_endpoints() {
        let contact = Contact {
            dx: 0.0,
            dy: 0.0,
            spawn_time: 3.0,
        };
        assert!((contact.alpha(3.0) - 1.0).abs() < 1e-6, "alpha(T) should be 1");
        assert!(
            contact.alpha(3.0 + CONTACT_FADE_SECS) < 1e-6,
            "alpha(T + fade) should be 0"
        );
        assert!(!contact.is_expired(3.0 + CONTACT_FADE_SECS - 0.01));
        assert!(contact.is_expired(3.0 + CONTACT_FADE_SECS));
    }

    #[test]
    fn test_contact_alpha_monotonically_decreasing() {
        let contact = Contact {
            dx: 1.0,
            dy: 1.0,
            spawn_time: 0.0,
        };
        let mut prev = f32::MAX;
        for step in 0..=20 {
            let a = contact.alpha(step as f32 * 0.1);
            assert!(a <= prev, "Contact alpha must never increase");
            prev = a;
        }
    }

    #[test]
    fn test_spawn_schedule_over_21_seconds() {
        // Spawn-then-wait at a 7 s interval: spawns near t=0, 7, 14 and
        // exactly three in total by t=21.
        let mut scope = SonarScope::new();
        let spawns = run_and_record_spawns(&mut scope, 0.1, 21.0);

        assert_eq!(spawns.len(), 3, "Expected exactly 3 spawns in 21 s, got {spawns:?}");
        let expected = [0.1, 7.1, 14.1];
        for (got, want) in spawns.iter().zip(expected) {
            assert!(
                (got - want).abs() < 0.15,
                "Spawn at {got}, expected near {want} (all: {spawns:?})"
            );
        }
    }

    #[test]
    fn test_contacts_removed_within_fade_of_spawn() {
        let mut scope = SonarScope::new();
        let mut rng = rng();

        // First spawn on the first tick, then advance well past its fade
        scope.update(0.1, 0.1, &mut rng);
        assert_eq!(scope.contacts().len(), 1);

        let mut now = 0.1;
        while now < 0.1 + CONTACT_FADE_SECS + 0.2 {
            now += 0.1;
            scope.update(0.1, now, &mut rng);
        }
        assert!(
            scope.contacts().is_empty(),
            "Contact should be removed within {CONTACT_FADE_SECS} s of spawning"
        );
    }

    #[test]
    fn test_contacts_spawn_inside_field_radius() {
        let mut scope = SonarScope::new();
        let mut rng = rng();
        // Collect a number of spawns and bound-check their positions
        for step in 1..=2200 {
            scope.update(0.1, step as f32 * 0.1, &mut rng);
            for c in scope.contacts() {
                let r = (c.dx * c.dx + c.dy * c.dy).sqrt();
                assert!(
                    r <= CONTACT_FIELD_RADIUS + 1e-3,
                    "Contact at radius {r} outside the field radius"
                );
            }
        }
    }

    // -------------------------------------------------------------------------
    // Disabled Mode Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_disabled_freezes_sweep_and_trail() {
        let mut scope = SonarScope::new();
        let mut rng = rng();

        for step in 1..=10 {
            scope.update(0.1, step as f32 * 0.1, &mut rng);
        }
        let frozen_angle = scope.angle_deg();

        scope.toggle();
        assert!(!scope.is_enabled());

        for step in 11..=30 {
            scope.update(0.1, step as f32 * 0.1, &mut rng);
        }
        assert_eq!(
            scope.angle_deg(),
            frozen_angle,
            "Sweep must not advance while disabled"
        );
        assert_eq!(
            scope.trail().count(),
            0,
            "Trail should fully evict (and not refill) while disabled"
        );
    }

    #[test]
    fn test_disabled_contacts_keep_aging() {
        let mut scope = SonarScope::new();
        let mut rng = rng();

        // Spawn one contact, then disable
        scope.update(0.1, 0.1, &mut rng);
        assert_eq!(scope.contacts().len(), 1);
        scope.toggle();

        // Contacts are not force-cleared: still fading mid-life...
        scope.update(0.1, 1.0, &mut rng);
        assert_eq!(scope.contacts().len(), 1, "Disabling must not clear live contacts");
        let alpha = scope.contacts()[0].alpha(1.0);
        assert!(alpha < 1.0, "Contact should keep fading while disabled");

        // ...and removed once expired, with no respawn
        scope.update(0.1, 0.1 + CONTACT_FADE_SECS, &mut rng);
        assert!(scope.contacts().is_empty(), "Expired contact should age out while disabled");
    }

    #[test]
    fn test_reenable_resumes_from_frozen_angle() {
        let mut scope = SonarScope::new();
        let mut rng = rng();

        for step in 1..=5 {
            scope.update(0.1, step as f32 * 0.1, &mut rng);
        }
        let frozen = scope.angle_deg();

        scope.toggle();
        scope.update(0.1, 10.0, &mut rng);
        scope.toggle();
        scope.update(0.1, 10.1, &mut rng);

        let expected = (frozen + SWEEP_SPEED_DEG * 0.1).rem_euclid(360.0);
        assert!(
            (scope.angle_deg() - expected).abs() < 1e-3,
            "Sweep should continue from the frozen angle, no jump"
        );
    }
}
