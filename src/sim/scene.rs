//! The active scene and what all scenes share

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circular::CircularScene;
use super::controls::Control;
use super::decay::{DecayScene, StepOutcome};
use super::ring::RingBuffer;
use super::rotation::RotationScene;
use crate::display::DisplayConfig;
use crate::settings::{Scenario, Settings};

/// Run state of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Paused,
    /// Terminal: the decay run ended in a collision
    Finished,
}

impl Phase {
    fn toggled(self) -> Self {
        match self {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Finished => Phase::Finished,
        }
    }
}

/// Position, velocity and acceleration of the tracked body, in screen pixels.
///
/// `position` is drawn from `origin`; the other two from the body. A vector
/// whose direction could not be computed is `None` and is not drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicVectors {
    pub origin: Vec2,
    pub position: Vec2,
    pub velocity: Option<Vec2>,
    pub acceleration: Option<Vec2>,
}

impl KinematicVectors {
    /// Absolute screen position of the body
    pub fn body(&self) -> Vec2 {
        self.origin + self.position
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scene {
    Decay(DecayScene),
    Rotation(RotationScene),
    Circular(CircularScene),
}

impl Scene {
    pub fn new(scenario: Scenario, settings: &Settings, clock_secs: f64) -> Self {
        match scenario {
            Scenario::Decay => Scene::Decay(DecayScene::new(&settings.orbit)),
            Scenario::Rotation => Scene::Rotation(RotationScene::new(&settings.rotation, clock_secs)),
            Scenario::Circular => Scene::Circular(CircularScene::new(&settings.circular)),
        }
    }

    pub fn scenario(&self) -> Scenario {
        match self {
            Scene::Decay(_) => Scenario::Decay,
            Scene::Rotation(_) => Scenario::Rotation,
            Scene::Circular(_) => Scenario::Circular,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Scene::Decay(s) => s.phase,
            Scene::Rotation(s) => s.phase,
            Scene::Circular(s) => s.phase,
        }
    }

    fn phase_mut(&mut self) -> &mut Phase {
        match self {
            Scene::Decay(s) => &mut s.phase,
            Scene::Rotation(s) => &mut s.phase,
            Scene::Circular(s) => &mut s.phase,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase() == Phase::Paused
    }

    /// Apply a scene-level control. Display and quit controls are handled by
    /// the caller and ignored here.
    pub fn apply(&mut self, control: Control, clock_secs: f64) {
        match control {
            Control::TogglePause => {
                let phase = self.phase_mut();
                *phase = phase.toggled();
                log::debug!("Phase now {:?}", phase);
            }
            Control::Increase => match self {
                Scene::Decay(s) => s.increase_decay(),
                Scene::Rotation(s) => s.faster(),
                Scene::Circular(s) => s.faster(),
            },
            Control::Decrease => match self {
                Scene::Decay(s) => s.decrease_decay(),
                Scene::Rotation(s) => s.slower(),
                Scene::Circular(s) => s.slower(),
            },
            Control::ToggleVectors => match self {
                Scene::Decay(s) => s.show_vector_field = !s.show_vector_field,
                Scene::Rotation(s) => s.show_vectors = !s.show_vectors,
                Scene::Circular(s) => s.show_vectors = !s.show_vectors,
            },
            Control::ToggleTrail => match self {
                Scene::Decay(s) => s.show_trail = !s.show_trail,
                Scene::Rotation(s) => s.show_trail = !s.show_trail,
                Scene::Circular(s) => s.show_trail = !s.show_trail,
            },
            Control::Reset => {
                log::info!("Resetting {} scene", self.scenario().as_str());
                match self {
                    Scene::Decay(s) => s.reset(),
                    Scene::Rotation(s) => s.reset(clock_secs),
                    Scene::Circular(s) => s.reset(),
                }
            }
            Control::ToggleFullscreen | Control::ExitFullscreen | Control::Quit => {}
        }
    }

    /// Advance by `dt` wall-clock seconds when running
    pub fn step(&mut self, dt: f32) -> StepOutcome {
        if let Scene::Rotation(s) = self {
            // Stars twinkle even while paused
            s.frame = s.frame.wrapping_add(1);
        }
        if self.phase() != Phase::Running {
            return StepOutcome::Continue;
        }
        match self {
            Scene::Decay(s) => s.step(dt),
            Scene::Rotation(s) => {
                s.step(dt);
                StepOutcome::Continue
            }
            Scene::Circular(s) => {
                s.step(dt);
                StepOutcome::Continue
            }
        }
    }

    pub fn trail(&self) -> &RingBuffer<Vec2> {
        match self {
            Scene::Decay(s) => &s.trail,
            Scene::Rotation(s) => &s.trail,
            Scene::Circular(s) => &s.trail,
        }
    }

    pub fn show_trail(&self) -> bool {
        match self {
            Scene::Decay(s) => s.show_trail,
            Scene::Rotation(s) => s.show_trail,
            Scene::Circular(s) => s.show_trail,
        }
    }

    /// Append the current body position. Skipped while the trail is hidden,
    /// so re-enabling it starts a fresh path.
    pub fn record_trail(&mut self, display: &DisplayConfig) {
        if !self.show_trail() {
            return;
        }
        match self {
            Scene::Decay(s) => s.record_trail(display),
            Scene::Rotation(s) => s.record_trail(display),
            Scene::Circular(s) => s.record_trail(display),
        }
    }

    pub fn clear_trail(&mut self) {
        match self {
            Scene::Decay(s) => s.trail.clear(),
            Scene::Rotation(s) => s.trail.clear(),
            Scene::Circular(s) => s.trail.clear(),
        }
    }

    pub fn vectors(&self, display: &DisplayConfig) -> KinematicVectors {
        match self {
            Scene::Decay(s) => s.vectors(display),
            Scene::Rotation(s) => s.vectors(display),
            Scene::Circular(s) => s.vectors(display),
        }
    }

    /// Angular velocity currently driving the body
    pub fn omega(&self) -> f32 {
        match self {
            Scene::Decay(s) => s.state.effective_omega(),
            Scene::Rotation(s) => s.omega(),
            Scene::Circular(s) => s.omega,
        }
    }

    /// Install a user-entered angular velocity
    pub fn set_omega(&mut self, omega: f32) {
        match self {
            Scene::Decay(s) => s.state.omega_override = Some(omega),
            Scene::Rotation(s) => s.set_omega(omega),
            Scene::Circular(s) => s.omega = omega,
        }
        log::info!("Angular velocity set to {} rad/s", omega);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenes() -> Vec<Scene> {
        let settings = Settings::default();
        [Scenario::Decay, Scenario::Rotation, Scenario::Circular]
            .into_iter()
            .map(|s| Scene::new(s, &settings, 1000.0))
            .collect()
    }

    #[test]
    fn test_pause_freezes_every_scene() {
        for mut scene in scenes() {
            scene.apply(Control::TogglePause, 0.0);
            assert!(scene.is_paused());
            let display = DisplayConfig::default();
            let before = scene.vectors(&display);
            scene.step(0.5);
            assert_eq!(scene.vectors(&display), before);
            scene.apply(Control::TogglePause, 0.0);
            assert_eq!(scene.phase(), Phase::Running);
        }
    }

    #[test]
    fn test_set_omega_round_trips() {
        for mut scene in scenes() {
            scene.set_omega(0.75);
            assert!((scene.omega() - 0.75).abs() < 1e-4, "{:?}", scene.scenario());
        }
    }

    #[test]
    fn test_hidden_trail_not_recorded() {
        for mut scene in scenes() {
            let display = DisplayConfig::default();
            scene.record_trail(&display);
            assert_eq!(scene.trail().len(), 1);
            scene.apply(Control::ToggleTrail, 0.0);
            scene.record_trail(&display);
            assert_eq!(scene.trail().len(), 1);
        }
    }

    #[test]
    fn test_finished_cannot_unpause() {
        assert_eq!(Phase::Finished.toggled(), Phase::Finished);
    }
}
