//! On-screen widgets and text readouts
//!
//! Text is produced as positioned [`Label`]s; turning them into glyphs is the
//! host's business.

pub mod hud;
pub mod omega_input;

pub use hud::hud_labels;
pub use omega_input::{Commit, OmegaInput};

use glam::Vec2;

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// Horizontal alignment of a label relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A line of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
    pub align: Align,
    pub color: [f32; 4],
    /// Font size in pixels
    pub size: f32,
}
