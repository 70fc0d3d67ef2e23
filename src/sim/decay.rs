//! Orbital decay kinematics
//!
//! A body circles the sun while its orbit shrinks. Speed and pull are not
//! integrated from two-body dynamics; they follow closed-form heuristics of
//! the current radius:
//!
//! - `|v| = v0 * sqrt(r / r0)`
//! - `|a| = v0^2 * (r0 / r)^2`
//!
//! and the radius shrinks by `decay_rate * |a| * dt` each step. The run ends
//! once the body touches the sun.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ring::RingBuffer;
use super::scene::{KinematicVectors, Phase};
use crate::consts::{DECAY_RATE_STEP, MAX_HISTORY};
use crate::display::DisplayConfig;
use crate::settings::OrbitSettings;
use crate::{polar_to_cartesian, tangent_of, wrap_angle};

/// Fixed geometry of the sun/body system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParams {
    pub sun_radius: f32,
    pub body_radius: f32,
    pub initial_orbit_radius: f32,
    pub initial_velocity: f32,
}

impl OrbitParams {
    pub fn from_settings(settings: &OrbitSettings) -> Self {
        Self {
            sun_radius: settings.sun_radius,
            body_radius: settings.body_radius,
            initial_orbit_radius: settings.initial_orbit_radius,
            initial_velocity: settings.initial_velocity,
        }
    }

    /// Orbit radius at which the body touches the sun
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.sun_radius + self.body_radius
    }

    /// Speed along the orbit at radius `r`
    #[inline]
    pub fn velocity_magnitude(&self, r: f32) -> f32 {
        self.initial_velocity * (r / self.initial_orbit_radius).sqrt()
    }

    /// Pull toward the sun at radius `r`
    #[inline]
    pub fn acceleration_magnitude(&self, r: f32) -> f32 {
        let ratio = self.initial_orbit_radius / r;
        self.initial_velocity * self.initial_velocity * ratio * ratio
    }

    /// Angular velocity of a body at the initial radius
    #[inline]
    pub fn initial_omega(&self) -> f32 {
        self.initial_velocity / self.initial_orbit_radius
    }
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self::from_settings(&OrbitSettings::default())
    }
}

/// Result of a single decay step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// The body reached the sun; the run is over
    Collided,
}

/// Mutable orbital state, advanced once per step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Angular position (radians)
    pub angle: f32,
    pub orbit_radius: f32,
    /// Angular velocity derived from the last step
    pub angular_velocity: f32,
    pub decay_rate: f32,
    pub elapsed_time: f32,
    /// User-entered angular velocity, replaces the derived one when set
    pub omega_override: Option<f32>,
}

impl SimulationState {
    pub fn new(params: &OrbitParams, decay_rate: f32) -> Self {
        Self {
            angle: 0.0,
            orbit_radius: params.initial_orbit_radius,
            angular_velocity: params.initial_omega(),
            decay_rate,
            elapsed_time: 0.0,
            omega_override: None,
        }
    }

    /// Angular velocity used to move the body
    #[inline]
    pub fn effective_omega(&self) -> f32 {
        self.omega_override.unwrap_or(self.angular_velocity)
    }
}

/// Advance the orbit by `dt`.
///
/// Angle moves with the angular velocity from the previous step, then speed
/// and pull are re-evaluated at the current radius before it shrinks.
pub fn advance(state: &mut SimulationState, params: &OrbitParams, dt: f32) -> StepOutcome {
    state.angle = wrap_angle(state.angle + state.effective_omega() * dt);

    let acc = params.acceleration_magnitude(state.orbit_radius);
    let vel = params.velocity_magnitude(state.orbit_radius);
    state.angular_velocity = vel / state.orbit_radius;

    state.orbit_radius -= state.decay_rate * acc * dt;
    state.elapsed_time += dt;

    if state.orbit_radius <= params.collision_radius() {
        StepOutcome::Collided
    } else {
        StepOutcome::Continue
    }
}

/// Orbital decay scene: state plus everything drawn around it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayScene {
    pub params: OrbitParams,
    pub state: SimulationState,
    pub phase: Phase,
    /// Decay rate restored on reset
    pub initial_decay_rate: f32,
    /// Simulation seconds per wall-clock second
    pub time_scale: f32,
    pub show_vector_field: bool,
    pub show_trail: bool,
    /// Screen positions of the body
    pub trail: RingBuffer<Vec2>,
    pub velocity_history: RingBuffer<f32>,
    pub acceleration_history: RingBuffer<f32>,
    pub radius_history: RingBuffer<f32>,
}

impl DecayScene {
    pub fn new(settings: &OrbitSettings) -> Self {
        let params = OrbitParams::from_settings(settings);
        Self {
            params,
            state: SimulationState::new(&params, settings.decay_rate),
            phase: Phase::Running,
            initial_decay_rate: settings.decay_rate,
            time_scale: settings.time_scale,
            show_vector_field: false,
            show_trail: true,
            trail: RingBuffer::new(settings.trail_length),
            velocity_history: RingBuffer::new(MAX_HISTORY),
            acceleration_history: RingBuffer::new(MAX_HISTORY),
            radius_history: RingBuffer::new(MAX_HISTORY),
        }
    }

    /// Advance by `dt` wall-clock seconds and record history
    pub fn step(&mut self, dt: f32) -> StepOutcome {
        let outcome = advance(&mut self.state, &self.params, dt * self.time_scale);

        self.velocity_history.push(self.velocity_magnitude());
        self.acceleration_history.push(self.acceleration_magnitude());
        self.radius_history.push(self.state.orbit_radius);

        if outcome == StepOutcome::Collided {
            log::info!(
                "Body collided with the sun after {:.1}s of simulated time; simulation ending",
                self.state.elapsed_time
            );
            self.phase = Phase::Finished;
        }
        outcome
    }

    pub fn velocity_magnitude(&self) -> f32 {
        self.params.velocity_magnitude(self.state.orbit_radius)
    }

    pub fn acceleration_magnitude(&self) -> f32 {
        self.params.acceleration_magnitude(self.state.orbit_radius)
    }

    /// Radius lost over the recorded history window
    pub fn radius_drop(&self) -> f32 {
        match (self.radius_history.first(), self.radius_history.last()) {
            (Some(oldest), Some(newest)) => oldest - newest,
            _ => 0.0,
        }
    }

    pub fn increase_decay(&mut self) {
        self.state.decay_rate *= DECAY_RATE_STEP;
    }

    pub fn decrease_decay(&mut self) {
        self.state.decay_rate /= DECAY_RATE_STEP;
    }

    /// Restart from the initial orbit, keeping display toggles
    pub fn reset(&mut self) {
        self.state = SimulationState::new(&self.params, self.initial_decay_rate);
        self.phase = Phase::Running;
        self.trail.clear();
        self.velocity_history.clear();
        self.acceleration_history.clear();
        self.radius_history.clear();
    }

    /// Body position relative to the sun, in screen pixels
    pub fn body_offset(&self, display: &DisplayConfig) -> Vec2 {
        polar_to_cartesian(self.state.orbit_radius * display.scale(), self.state.angle)
    }

    pub fn record_trail(&mut self, display: &DisplayConfig) {
        let point = display.center() + self.body_offset(display);
        self.trail.push(point);
    }

    /// Position, velocity and acceleration vectors for drawing
    pub fn vectors(&self, display: &DisplayConfig) -> KinematicVectors {
        let position = self.body_offset(display);
        KinematicVectors {
            origin: display.center(),
            position,
            velocity: tangent_of(position).map(|t| t * self.velocity_magnitude()),
            acceleration: (-position)
                .try_normalize()
                .map(|d| d * self.acceleration_magnitude()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_magnitudes_at_initial_radius() {
        let params = OrbitParams::default();
        let r0 = params.initial_orbit_radius;
        assert_eq!(params.velocity_magnitude(r0), params.initial_velocity);
        assert_eq!(
            params.acceleration_magnitude(r0),
            params.initial_velocity * params.initial_velocity
        );
    }

    #[test]
    fn test_magnitudes_trend_with_radius() {
        let params = OrbitParams::default();
        let r0 = params.initial_orbit_radius;
        assert!(params.velocity_magnitude(r0 / 2.0) < params.initial_velocity);
        // Half the radius, four times the pull
        let a = params.acceleration_magnitude(r0 / 2.0);
        assert!((a - 4.0 * params.initial_velocity.powi(2)).abs() < 1e-6);
    }

    #[test]
    fn test_advance_first_step() {
        let params = OrbitParams::default();
        let mut state = SimulationState::new(&params, 0.05);
        let outcome = advance(&mut state, &params, 0.1);

        assert_eq!(outcome, StepOutcome::Continue);
        assert!((state.angle - params.initial_omega() * 0.1).abs() < 1e-9);
        // 300 - 0.05 * 0.25 * 0.1
        assert!((state.orbit_radius - 299.99875).abs() < 1e-4);
        assert!((state.elapsed_time - 0.1).abs() < 1e-7);
    }

    #[test]
    fn test_override_drives_angle() {
        let params = OrbitParams::default();
        let mut state = SimulationState::new(&params, 0.05);
        state.omega_override = Some(2.0);
        advance(&mut state, &params, 0.5);
        assert!((state.angle - 1.0).abs() < 1e-6);
        // Derived omega keeps tracking the radius underneath
        assert!((state.angular_velocity - params.initial_omega()).abs() < 1e-6);
    }

    #[test]
    fn test_angle_wrapped_under_fast_override() {
        let params = OrbitParams::default();
        let mut state = SimulationState::new(&params, 0.05);
        state.omega_override = Some(1000.0);
        for _ in 0..1000 {
            advance(&mut state, &params, 0.1);
            assert!((0.0..TAU).contains(&state.angle));
        }
    }

    #[test]
    fn test_radius_drop_over_history() {
        let mut scene = DecayScene::new(&OrbitSettings::default());
        assert_eq!(scene.radius_drop(), 0.0);
        for _ in 0..(MAX_HISTORY + 20) {
            scene.step(1.0 / 60.0);
        }
        assert_eq!(scene.radius_history.len(), MAX_HISTORY);
        let oldest = *scene.radius_history.first().unwrap();
        assert!(scene.radius_drop() > 0.0);
        assert!((scene.radius_drop() - (oldest - scene.state.orbit_radius)).abs() < 1e-6);
    }

    #[test]
    fn test_collision_terminates() {
        let params = OrbitParams::default();
        let mut state = SimulationState::new(&params, 0.05);
        state.orbit_radius = params.collision_radius() + 0.001;
        assert_eq!(advance(&mut state, &params, 1.0), StepOutcome::Collided);
    }

    #[test]
    fn test_scene_runs_until_collision() {
        let mut settings = OrbitSettings::default();
        settings.decay_rate = 50.0;
        let mut scene = DecayScene::new(&settings);

        let mut steps = 0;
        while scene.step(1.0 / 60.0) == StepOutcome::Continue {
            steps += 1;
            assert!(steps < 1_000_000, "orbit never decayed");
        }
        assert_eq!(scene.phase, Phase::Finished);
        assert!(scene.state.orbit_radius <= scene.params.collision_radius());
        assert!(scene.velocity_history.len() <= MAX_HISTORY);
    }

    #[test]
    fn test_decay_rate_up_down_restores() {
        let mut scene = DecayScene::new(&OrbitSettings::default());
        let before = scene.state.decay_rate;
        scene.increase_decay();
        assert!(scene.state.decay_rate > before);
        scene.decrease_decay();
        assert!((scene.state.decay_rate - before).abs() < 1e-7);
    }

    #[test]
    fn test_vectors_orientation() {
        let scene = DecayScene::new(&OrbitSettings::default());
        let display = DisplayConfig::default();
        let v = scene.vectors(&display);

        assert_eq!(v.position, Vec2::new(300.0, 0.0));
        let vel = v.velocity.unwrap();
        let acc = v.acceleration.unwrap();
        assert!(vel.dot(v.position).abs() < 1e-4);
        assert!((vel.length() - 0.5).abs() < 1e-6);
        assert!(acc.dot(v.position) < 0.0);
        assert!((acc.length() - 0.25).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_radius_never_increases(
            decay_rate in 0.0f32..5.0,
            dts in prop::collection::vec(0.0001f32..1.0, 1..200),
        ) {
            let params = OrbitParams::default();
            let mut state = SimulationState::new(&params, decay_rate);
            for dt in dts {
                let before = state.orbit_radius;
                let outcome = advance(&mut state, &params, dt);
                prop_assert!(state.orbit_radius <= before);
                if outcome == StepOutcome::Collided {
                    break;
                }
            }
        }
    }
}
