//! Application settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Which scene the visualizer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Body spiralling into the sun
    #[default]
    Decay,
    /// Point on the equator of a rotating Earth
    Rotation,
    /// Particle in uniform circular motion
    Circular,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Decay => "decay",
            Scenario::Rotation => "rotation",
            Scenario::Circular => "circular",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "decay" | "orbit" | "orbital-decay" => Some(Scenario::Decay),
            "rotation" | "earth" => Some(Scenario::Rotation),
            "circular" | "circle" => Some(Scenario::Circular),
            _ => None,
        }
    }

    /// Window caption for this scene
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Decay => "Earth Orbital Decay Simulation",
            Scenario::Rotation => "Earth Rotation Simulation",
            Scenario::Circular => "Uniform Circular Motion",
        }
    }
}

/// Orbital decay parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub sun_radius: f32,
    pub body_radius: f32,
    pub initial_orbit_radius: f32,
    pub initial_velocity: f32,
    pub decay_rate: f32,
    /// Simulation units per second of wall-clock time
    pub time_scale: f32,
    pub trail_length: usize,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            sun_radius: SUN_RADIUS,
            body_radius: BODY_RADIUS,
            initial_orbit_radius: INITIAL_ORBIT_RADIUS,
            initial_velocity: INITIAL_VELOCITY,
            decay_rate: DECAY_RATE,
            time_scale: DECAY_TIME_SCALE,
            trail_length: DECAY_TRAIL_LENGTH,
        }
    }
}

/// Earth rotation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationSettings {
    pub time_scale: f32,
    pub trail_length: usize,
    /// Seed for the starfield RNG
    pub star_seed: u64,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            time_scale: ROTATION_TIME_SCALE,
            trail_length: ROTATION_TRAIL_LENGTH,
            star_seed: 0x5EED_57A2,
        }
    }
}

/// Uniform circular motion parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularSettings {
    pub omega: f32,
    pub trail_length: usize,
}

impl Default for CircularSettings {
    fn default() -> Self {
        Self {
            omega: CIRCULAR_OMEGA,
            trail_length: CIRCULAR_TRAIL_LENGTH,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scene shown at start-up
    pub scenario: Scenario,

    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub start_fullscreen: bool,

    // === Scenes ===
    pub orbit: OrbitSettings,
    pub rotation: RotationSettings,
    pub circular: CircularSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scenario: Scenario::Decay,

            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
            start_fullscreen: false,

            orbit: OrbitSettings::default(),
            rotation: RotationSettings::default(),
            circular: CircularSettings::default(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}); using default settings", e, path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_from_str() {
        assert_eq!(Scenario::from_str("Decay"), Some(Scenario::Decay));
        assert_eq!(Scenario::from_str("earth"), Some(Scenario::Rotation));
        assert_eq!(Scenario::from_str("circle"), Some(Scenario::Circular));
        assert_eq!(Scenario::from_str("pendulum"), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "scenario": "rotation", "orbit": { "decay_rate": 0.1 } }"#)
                .unwrap();
        assert_eq!(settings.scenario, Scenario::Rotation);
        assert_eq!(settings.orbit.decay_rate, 0.1);
        assert_eq!(settings.orbit.sun_radius, SUN_RADIUS);
        assert_eq!(settings.window_width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_unknown_scenario_rejected() {
        let result = serde_json::from_str::<Settings>(r#"{ "scenario": "pendulum" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "orbit_vectors_settings_{}.json",
            std::process::id()
        ));
        let mut settings = Settings::default();
        settings.scenario = Scenario::Circular;
        settings.circular.omega = 2.5;
        settings.save(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("/nonexistent/orbit_vectors.json");
        assert!(matches!(
            Settings::load_from(path),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(Settings::load(Some(path)), Settings::default());
    }
}
