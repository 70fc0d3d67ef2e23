//! Uniform circular motion on the unit circle
//!
//! `r = (cos ωt, sin ωt)`, `v = ω(-sin ωt, cos ωt)`, `a = -ω² r`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ring::RingBuffer;
use super::scene::{KinematicVectors, Phase};
use crate::consts::CIRCULAR_OMEGA_STEP;
use crate::display::DisplayConfig;
use crate::settings::CircularSettings;

/// Drawn length of `v` relative to the circle radius
pub const VELOCITY_SCALE: f32 = 0.3;
/// Drawn length of `a` relative to the circle radius
pub const ACCELERATION_SCALE: f32 = 0.15;
/// Circle radius as a fraction of the short side of the window
const CIRCLE_FRACTION: f32 = 0.35;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularScene {
    pub omega: f32,
    pub initial_omega: f32,
    /// Accumulated phase ωt, kept continuous when ω changes
    pub phase_angle: f32,
    pub time: f32,
    pub phase: Phase,
    pub show_vectors: bool,
    pub show_trail: bool,
    pub trail: RingBuffer<Vec2>,
}

impl CircularScene {
    pub fn new(settings: &CircularSettings) -> Self {
        Self {
            omega: settings.omega,
            initial_omega: settings.omega,
            phase_angle: 0.0,
            time: 0.0,
            phase: Phase::Running,
            show_vectors: true,
            show_trail: true,
            trail: RingBuffer::new(settings.trail_length),
        }
    }

    pub fn step(&mut self, dt: f32) {
        self.time += dt;
        self.phase_angle = crate::wrap_angle(self.phase_angle + self.omega * dt);
    }

    /// Unit-circle position
    pub fn position(&self) -> Vec2 {
        let (sin, cos) = self.phase_angle.sin_cos();
        Vec2::new(cos, sin)
    }

    pub fn velocity(&self) -> Vec2 {
        let (sin, cos) = self.phase_angle.sin_cos();
        self.omega * Vec2::new(-sin, cos)
    }

    pub fn acceleration(&self) -> Vec2 {
        -self.omega * self.omega * self.position()
    }

    pub fn faster(&mut self) {
        self.omega *= CIRCULAR_OMEGA_STEP;
    }

    pub fn slower(&mut self) {
        self.omega /= CIRCULAR_OMEGA_STEP;
    }

    pub fn reset(&mut self) {
        self.omega = self.initial_omega;
        self.phase_angle = 0.0;
        self.time = 0.0;
        self.trail.clear();
    }

    /// Circle radius on screen
    pub fn draw_radius(&self, display: &DisplayConfig) -> f32 {
        display.width().min(display.height()) * CIRCLE_FRACTION
    }

    pub fn record_trail(&mut self, display: &DisplayConfig) {
        let point = display.center() + self.position() * self.draw_radius(display);
        self.trail.push(point);
    }

    /// Vectors in screen pixels, already scaled for legibility
    pub fn vectors(&self, display: &DisplayConfig) -> KinematicVectors {
        let radius = self.draw_radius(display);
        KinematicVectors {
            origin: display.center(),
            position: self.position() * radius,
            velocity: Some(self.velocity() * radius * VELOCITY_SCALE),
            acceleration: Some(self.acceleration() * radius * ACCELERATION_SCALE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitudes_match_omega() {
        let mut scene = CircularScene::new(&CircularSettings { omega: 2.0, trail_length: 10 });
        for _ in 0..37 {
            scene.step(0.01);
        }
        assert!((scene.velocity().length() - 2.0).abs() < 1e-5);
        assert!((scene.acceleration().length() - 4.0).abs() < 1e-4);
        let expected = -4.0 * scene.position();
        assert!((scene.acceleration() - expected).length() < 1e-5);
    }

    #[test]
    fn test_position_follows_omega_t() {
        let mut scene = CircularScene::new(&CircularSettings::default());
        scene.step(std::f32::consts::FRAC_PI_2);
        assert!(scene.position().x.abs() < 1e-5);
        assert!((scene.position().y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_reset() {
        let mut scene = CircularScene::new(&CircularSettings::default());
        scene.faster();
        scene.step(1.0);
        scene.record_trail(&DisplayConfig::default());
        scene.reset();
        assert_eq!(scene.omega, 1.0);
        assert_eq!(scene.time, 0.0);
        assert!(scene.trail.is_empty());
    }
}
