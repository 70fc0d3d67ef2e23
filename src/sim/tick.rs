//! Fixed timestep simulation tick
//!
//! One call consumes the input events gathered since the last frame, then
//! advances the active scene. Nothing here touches the window or the GPU, so
//! whole runs can be replayed in tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::controls::{Control, Key, control_for};
use super::decay::StepOutcome;
use super::scene::Scene;
use crate::display::{DisplayConfig, DisplayEvent};
use crate::settings::Settings;
use crate::ui::omega_input::{Commit, OmegaInput};

/// A discrete input event, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// Printable character typed on the keyboard
    Text(char),
    /// Primary mouse button pressed at a screen position
    Click(Vec2),
    Resized { width: u32, height: u32 },
    /// Window closed
    Quit,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
    /// Wall-clock UTC seconds since the Unix epoch (used by resets)
    pub clock_secs: f64,
}

/// Everything the host loop owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub scene: Scene,
    pub display: DisplayConfig,
    #[serde(skip)]
    pub omega_input: OmegaInput,
    /// Cleared on quit or when the run ends
    pub running: bool,
    pub frame: u64,
}

impl Simulation {
    pub fn new(settings: &Settings, display: DisplayConfig, clock_secs: f64) -> Self {
        Self {
            scene: Scene::new(settings.scenario, settings, clock_secs),
            display,
            omega_input: OmegaInput::default(),
            running: true,
            frame: 0,
        }
    }

    fn reconfigure(&mut self, event: DisplayEvent) {
        let next = self.display.reconfigure(event);
        if next != self.display {
            log::info!(
                "Display now {}x{} ({})",
                next.size.0,
                next.size.1,
                if next.fullscreen { "fullscreen" } else { "windowed" }
            );
            self.display = next;
            // Trail points are in screen space of the old layout
            self.scene.clear_trail();
        }
    }

    fn handle_event(&mut self, event: &InputEvent, clock_secs: f64) {
        match *event {
            InputEvent::Quit => self.running = false,
            InputEvent::Resized { width, height } => {
                self.reconfigure(DisplayEvent::Resized { width, height })
            }
            InputEvent::Click(pos) => {
                if self.omega_input.rect(&self.display).contains(pos) {
                    if !self.omega_input.focused {
                        self.omega_input.focus();
                    }
                } else if self.omega_input.focused {
                    self.omega_input.cancel();
                }
            }
            InputEvent::Text(c) => {
                if self.omega_input.focused {
                    self.omega_input.insert(c);
                }
            }
            InputEvent::Key(key) if self.omega_input.focused => match key {
                Key::Enter => {
                    if let Commit::Accepted(omega) = self.omega_input.commit() {
                        self.scene.set_omega(omega);
                    }
                }
                Key::Escape => self.omega_input.cancel(),
                Key::Backspace => self.omega_input.backspace(),
                _ => {}
            },
            InputEvent::Key(key) => match control_for(key) {
                Some(Control::Quit) => {
                    log::info!("Quit requested");
                    self.running = false;
                }
                Some(Control::ToggleFullscreen) => self.reconfigure(DisplayEvent::ToggleFullscreen),
                Some(Control::ExitFullscreen) => self.reconfigure(DisplayEvent::ExitFullscreen),
                Some(Control::Reset) => {
                    self.omega_input.clear();
                    self.scene.apply(Control::Reset, clock_secs);
                }
                Some(control) => self.scene.apply(control, clock_secs),
                None => {}
            },
        }
    }
}

/// Advance the simulation by one fixed timestep
pub fn tick(sim: &mut Simulation, input: &TickInput, dt: f32) {
    if !sim.running {
        return;
    }

    for event in &input.events {
        sim.handle_event(event, input.clock_secs);
        if !sim.running {
            return;
        }
    }

    sim.frame += 1;
    let was_running = sim.scene.phase() == super::scene::Phase::Running;

    if sim.scene.step(dt) == StepOutcome::Collided {
        sim.running = false;
        return;
    }

    if was_running {
        sim.scene.record_trail(&sim.display);
    }
}

/// Value form of [`tick`]: `(state, input, dt) -> state`
pub fn step(mut sim: Simulation, input: &TickInput, dt: f32) -> Simulation {
    tick(&mut sim, input, dt);
    sim
}
