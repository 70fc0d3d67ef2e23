//! Deterministic simulation module
//!
//! All kinematics and control logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod circular;
pub mod controls;
pub mod decay;
pub mod ring;
pub mod rotation;
pub mod scene;
pub mod tick;

pub use circular::CircularScene;
pub use controls::{Control, Key, control_for};
pub use decay::{DecayScene, OrbitParams, SimulationState, StepOutcome, advance};
pub use ring::RingBuffer;
pub use rotation::RotationScene;
pub use scene::{KinematicVectors, Phase, Scene};
pub use tick::{InputEvent, Simulation, TickInput, step, tick};
