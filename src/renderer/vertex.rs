//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in screen pixels with an RGBA colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Scene colours
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = rgb(0, 0, 0);
    pub const WHITE: [f32; 4] = rgb(255, 255, 255);
    /// Velocity vectors and series
    pub const RED: [f32; 4] = rgb(255, 80, 80);
    /// Acceleration vectors and series
    pub const GREEN: [f32; 4] = rgb(80, 255, 80);
    pub const BLUE: [f32; 4] = rgb(100, 100, 255);
    pub const YELLOW: [f32; 4] = rgb(255, 255, 0);
    pub const REFERENCE_ORBIT: [f32; 4] = rgb(50, 50, 50);
    pub const PLOT_BACKGROUND: [f32; 4] = rgb(30, 30, 30);
    pub const PLOT_BORDER: [f32; 4] = rgb(80, 80, 80);
    /// Readout highlight once |v| has dropped
    pub const VELOCITY_ALERT: [f32; 4] = rgb(255, 100, 100);
    /// Readout highlight once |a| has grown
    pub const ACCELERATION_ALERT: [f32; 4] = rgb(100, 255, 100);
    pub const INPUT_IDLE: [f32; 4] = rgb(120, 120, 140);
    pub const INPUT_FOCUSED: [f32; 4] = rgb(255, 255, 0);

    /// Grey of the given brightness
    pub fn grey(level: f32) -> [f32; 4] {
        [level, level, level, 1.0]
    }
}
