//! Earth rotation
//!
//! Tracks a point on the equator of a spinning Earth. The angle starts from
//! the current UTC time of day and advances at the sidereal rate times a
//! user-adjustable time scale.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ring::RingBuffer;
use super::scene::{KinematicVectors, Phase};
use crate::consts::{EARTH_DRAW_RADIUS, ROTATION_TIME_STEP, SIDEREAL_DAY_SECS, STAR_COUNT};
use crate::display::DisplayConfig;
use crate::settings::RotationSettings;
use crate::{polar_to_cartesian, wrap_angle};

/// Earth's angular velocity in rad/s
pub fn earth_omega() -> f32 {
    (std::f64::consts::TAU / SIDEREAL_DAY_SECS) as f32
}

/// Rotation angle for a UTC clock reading, in [0, 2π)
pub fn angle_from_clock(seconds_since_midnight: f64) -> f32 {
    let angle = seconds_since_midnight / SIDEREAL_DAY_SECS * std::f64::consts::TAU;
    wrap_angle(angle.rem_euclid(std::f64::consts::TAU) as f32)
}

/// Seconds since UTC midnight for a Unix timestamp
pub fn seconds_since_midnight(unix_secs: f64) -> f64 {
    unix_secs.rem_euclid(86_400.0)
}

/// `hh:mm:ss` for the rotation angle read as a 24h clock at Greenwich
pub fn earth_time(angle: f32) -> (u32, u32, u32) {
    let hours = wrap_angle(angle) as f64 / std::f64::consts::TAU * 24.0;
    let h = hours.floor();
    let minutes = (hours - h) * 60.0;
    let m = minutes.floor();
    let s = ((minutes - m) * 60.0).floor();
    (h as u32, m as u32, s as u32)
}

/// A background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Grey level, 0-1
    pub brightness: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationScene {
    /// Rotation angle in [0, 2π)
    pub angle: f32,
    pub time_scale: f32,
    pub initial_time_scale: f32,
    pub phase: Phase,
    pub show_vectors: bool,
    pub show_trail: bool,
    /// Screen positions of the tracked point
    pub trail: RingBuffer<Vec2>,
    pub star_seed: u64,
    /// Bumped every frame so the starfield twinkles deterministically
    pub frame: u64,
}

impl RotationScene {
    pub fn new(settings: &RotationSettings, clock_secs: f64) -> Self {
        Self {
            angle: angle_from_clock(seconds_since_midnight(clock_secs)),
            time_scale: settings.time_scale,
            initial_time_scale: settings.time_scale,
            phase: Phase::Running,
            show_vectors: true,
            show_trail: true,
            trail: RingBuffer::new(settings.trail_length),
            star_seed: settings.star_seed,
            frame: 0,
        }
    }

    /// Effective angular velocity (rad/s of wall-clock time)
    pub fn omega(&self) -> f32 {
        earth_omega() * self.time_scale
    }

    /// Replace the effective angular velocity by rescaling time
    pub fn set_omega(&mut self, omega: f32) {
        self.time_scale = omega / earth_omega();
    }

    pub fn step(&mut self, dt: f32) {
        self.angle = wrap_angle(self.angle + self.omega() * dt);
    }

    pub fn faster(&mut self) {
        self.time_scale *= ROTATION_TIME_STEP;
    }

    pub fn slower(&mut self) {
        self.time_scale /= ROTATION_TIME_STEP;
    }

    /// Back to real time at the default speed-up
    pub fn reset(&mut self, clock_secs: f64) {
        self.angle = angle_from_clock(seconds_since_midnight(clock_secs));
        self.time_scale = self.initial_time_scale;
        self.trail.clear();
    }

    /// Earth radius on screen
    pub fn draw_radius(&self, display: &DisplayConfig) -> f32 {
        EARTH_DRAW_RADIUS * display.scale()
    }

    /// Model-space magnitudes: `(ω, |v|, |a|)` for the drawn radius
    pub fn magnitudes(&self) -> (f32, f32, f32) {
        let omega = self.omega();
        let r = EARTH_DRAW_RADIUS;
        (omega, r * omega, r * omega * omega)
    }

    pub fn point_offset(&self, display: &DisplayConfig) -> Vec2 {
        polar_to_cartesian(self.draw_radius(display), self.angle)
    }

    pub fn record_trail(&mut self, display: &DisplayConfig) {
        let point = (display.center() + self.point_offset(display)).round();
        self.trail.push(point);
    }

    pub fn vectors(&self, display: &DisplayConfig) -> KinematicVectors {
        let position = self.point_offset(display);
        let omega = self.omega();
        let (sin, cos) = self.angle.sin_cos();
        let r = self.draw_radius(display);
        KinematicVectors {
            origin: display.center(),
            position,
            velocity: Some(Vec2::new(-r * omega * sin, r * omega * cos)),
            acceleration: Some(Vec2::new(-r * omega * omega * cos, -r * omega * omega * sin)),
        }
    }

    /// Starfield for the current frame
    pub fn stars(&self, display: &DisplayConfig) -> Vec<Star> {
        let mut rng = Pcg32::seed_from_u64(self.star_seed ^ self.frame);
        let (w, h) = (display.size.0.max(1), display.size.1.max(1));
        (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(0..w) as f32,
                    rng.random_range(0..h) as f32,
                ),
                brightness: rng.random_range(100..255) as f32 / 255.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_clock_angle() {
        assert_eq!(angle_from_clock(0.0), 0.0);
        let half = angle_from_clock(SIDEREAL_DAY_SECS / 2.0);
        assert!((half - std::f32::consts::PI).abs() < 1e-5);
        assert_eq!(seconds_since_midnight(86_400.0 * 3.0 + 42.0), 42.0);
    }

    #[test]
    fn test_earth_time() {
        assert_eq!(earth_time(0.0), (0, 0, 0));
        assert_eq!(earth_time(std::f32::consts::PI), (12, 0, 0));
        let (h, m, _) = earth_time(TAU * 0.25 + 0.0001);
        assert_eq!((h, m), (6, 0));
    }

    #[test]
    fn test_angle_stays_wrapped() {
        let mut scene = RotationScene::new(&RotationSettings::default(), 0.0);
        scene.time_scale = 5.0e6;
        for _ in 0..500 {
            scene.step(1.0 / 60.0);
            assert!(scene.angle >= 0.0 && scene.angle < TAU);
        }
    }

    #[test]
    fn test_reset_restores_time_scale() {
        let mut scene = RotationScene::new(&RotationSettings::default(), 0.0);
        scene.faster();
        scene.faster();
        assert!((scene.time_scale - 2250.0).abs() < 1e-2);
        scene.reset(SIDEREAL_DAY_SECS / 4.0);
        assert_eq!(scene.time_scale, 1000.0);
        assert!((scene.angle - TAU / 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_set_omega_rescales_time() {
        let mut scene = RotationScene::new(&RotationSettings::default(), 0.0);
        scene.set_omega(earth_omega() * 10.0);
        assert!((scene.time_scale - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_vectors_are_centripetal() {
        let scene = RotationScene::new(&RotationSettings::default(), 12_345.0);
        let display = DisplayConfig::default();
        let v = scene.vectors(&display);
        let vel = v.velocity.unwrap();
        let acc = v.acceleration.unwrap();
        assert!(vel.dot(v.position).abs() / (vel.length() * v.position.length()) < 1e-4);
        assert!(acc.normalize().dot(v.position.normalize()) < -0.999);
    }

    #[test]
    fn test_starfield_deterministic_per_frame() {
        let mut scene = RotationScene::new(&RotationSettings::default(), 0.0);
        let display = DisplayConfig::default();
        let a = scene.stars(&display);
        assert_eq!(a, scene.stars(&display));
        assert_eq!(a.len(), STAR_COUNT);
        assert!(a.iter().all(|s| s.pos.x < 1000.0 && s.pos.y < 800.0));
        scene.frame += 1;
        assert_ne!(a, scene.stars(&display));
    }
}
