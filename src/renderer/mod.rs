//! WebGPU rendering module
//!
//! Scenes are tessellated into flat-coloured triangles on the CPU and drawn
//! with a single pipeline.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, build_frame};
pub use pipeline::RenderState;
pub use vertex::Vertex;
