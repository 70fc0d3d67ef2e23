//! Orbit Vectors - live kinematics visualizer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scenes, kinematics, step function)
//! - `display`: Window layout derived from size and fullscreen state
//! - `ui`: Numeric input field and HUD readouts
//! - `renderer`: Frame geometry and the wgpu pipeline that draws it
//! - `app`: winit host loop running the step at a fixed cadence
//! - `settings`: JSON configuration

pub mod app;
pub mod display;
pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use display::DisplayConfig;
pub use error::{AppError, GpuError, SettingsError};
pub use settings::{Scenario, Settings};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Target frame rate of the host loop
    pub const FRAME_RATE: f32 = 60.0;
    /// Fixed step handed to the simulation each frame
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE;

    /// Default windowed size
    pub const DEFAULT_WIDTH: u32 = 1000;
    pub const DEFAULT_HEIGHT: u32 = 800;
    /// Layout sizes are authored for an 800px short side
    pub const REFERENCE_EXTENT: f32 = 800.0;

    /// Orbital decay defaults
    pub const SUN_RADIUS: f32 = 30.0;
    pub const BODY_RADIUS: f32 = 10.0;
    pub const INITIAL_ORBIT_RADIUS: f32 = 300.0;
    pub const INITIAL_VELOCITY: f32 = 0.5;
    pub const DECAY_RATE: f32 = 0.05;
    /// Simulation units per wall-clock second (0.1 per frame at 60 Hz)
    pub const DECAY_TIME_SCALE: f32 = 6.0;
    /// UP/DOWN multiplier for the decay rate
    pub const DECAY_RATE_STEP: f32 = 1.2;
    pub const DECAY_TRAIL_LENGTH: usize = 500;
    pub const MAX_HISTORY: usize = 100;

    /// Earth rotation defaults
    pub const SIDEREAL_DAY_SECS: f64 = 23.934_469_6 * 60.0 * 60.0;
    pub const EARTH_DRAW_RADIUS: f32 = 250.0;
    pub const ROTATION_TIME_SCALE: f32 = 1000.0;
    pub const ROTATION_TIME_STEP: f32 = 1.5;
    pub const ROTATION_TRAIL_LENGTH: usize = 100;
    pub const STAR_COUNT: usize = 100;

    /// Uniform circular motion defaults
    pub const CIRCULAR_OMEGA: f32 = 1.0;
    pub const CIRCULAR_OMEGA_STEP: f32 = 1.2;
    pub const CIRCULAR_TRAIL_LENGTH: usize = 200;
}

/// Wrap an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit tangent (counter-clockwise in screen space) for a radial vector.
/// `None` when the radial vector is degenerate.
#[inline]
pub fn tangent_of(radial: Vec2) -> Option<Vec2> {
    radial.perp().try_normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-5);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_tangent_degenerate() {
        assert!(tangent_of(Vec2::ZERO).is_none());
        let t = tangent_of(Vec2::new(3.0, 0.0)).unwrap();
        assert!((t - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }
}
