//! Window layout
//!
//! `DisplayConfig` is a plain value. Resize and fullscreen events produce a
//! new config through [`DisplayConfig::reconfigure`]; all layout sizes are
//! derived from it on demand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WIDTH, REFERENCE_EXTENT};

/// Events that change the window layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// The OS resized the window
    Resized { width: u32, height: u32 },
    /// Flip between windowed and fullscreen
    ToggleFullscreen,
    /// Leave fullscreen (no-op when windowed)
    ExitFullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Size used when windowed
    pub windowed_size: (u32, u32),
    /// Size of the monitor, used when fullscreen
    pub monitor_size: (u32, u32),
    /// Current drawable size
    pub size: (u32, u32),
    pub fullscreen: bool,
}

impl DisplayConfig {
    pub fn new(windowed_size: (u32, u32), monitor_size: (u32, u32), fullscreen: bool) -> Self {
        let size = if fullscreen { monitor_size } else { windowed_size };
        Self {
            windowed_size,
            monitor_size,
            size,
            fullscreen,
        }
    }

    /// Apply a layout event, returning the new config
    pub fn reconfigure(self, event: DisplayEvent) -> Self {
        match event {
            DisplayEvent::Resized { width, height } => {
                if width == 0 || height == 0 {
                    return self;
                }
                if self.fullscreen {
                    // Surface of the monitor we actually went fullscreen on
                    return Self {
                        monitor_size: (width, height),
                        size: (width, height),
                        ..self
                    };
                }
                Self {
                    windowed_size: (width, height),
                    size: (width, height),
                    ..self
                }
            }
            DisplayEvent::ToggleFullscreen => {
                let fullscreen = !self.fullscreen;
                Self {
                    size: if fullscreen {
                        self.monitor_size
                    } else {
                        self.windowed_size
                    },
                    fullscreen,
                    ..self
                }
            }
            DisplayEvent::ExitFullscreen if self.fullscreen => {
                self.reconfigure(DisplayEvent::ToggleFullscreen)
            }
            DisplayEvent::ExitFullscreen => self,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.0 as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.1 as f32
    }

    /// Centre of the drawable area (integer pixel, like the sun is drawn)
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.size.0 / 2) as f32, (self.size.1 / 2) as f32)
    }

    /// Scale applied to every authored layout size
    pub fn scale(&self) -> f32 {
        self.width().min(self.height()) / REFERENCE_EXTENT
    }

    /// Width relative to the default window width
    pub fn width_ratio(&self) -> f32 {
        self.width() / DEFAULT_WIDTH as f32
    }

    /// Font size in pixels for HUD labels
    pub fn font_size(&self) -> f32 {
        (20.0 * self.width_ratio()).floor().max(12.0)
    }

    /// Arrowhead length in pixels
    pub fn arrow_size(&self) -> f32 {
        12.0 * self.width_ratio()
    }

    /// Line thickness scaled with the display, never below `min`
    pub fn thickness(&self, base: f32, min: f32) -> f32 {
        (base * self.scale()).floor().max(min)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(
            (crate::consts::DEFAULT_WIDTH, crate::consts::DEFAULT_HEIGHT),
            (1920, 1080),
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_updates_scale() {
        let display = DisplayConfig::default();
        assert!((display.scale() - 1.0).abs() < 1e-6);

        let resized = display.reconfigure(DisplayEvent::Resized {
            width: 1600,
            height: 1600,
        });
        assert_eq!(resized.size, (1600, 1600));
        assert!((resized.scale() - 2.0).abs() < 1e-6);
        assert_eq!(resized.center(), Vec2::new(800.0, 800.0));
    }

    #[test]
    fn test_fullscreen_resize_keeps_windowed_size() {
        let display = DisplayConfig::default().reconfigure(DisplayEvent::ToggleFullscreen);
        assert!(display.fullscreen);
        assert_eq!(display.size, (1920, 1080));

        // Surface smaller than the reported monitor (menu bar, other screen)
        let after = display.reconfigure(DisplayEvent::Resized {
            width: 1920,
            height: 1050,
        });
        assert!(after.fullscreen);
        assert_eq!(after.size, (1920, 1050));
        assert_eq!(after.monitor_size, (1920, 1050));
        assert_eq!(after.windowed_size, (1000, 800));
        assert_eq!(after.center(), Vec2::new(960.0, 525.0));

        let back = after.reconfigure(DisplayEvent::ExitFullscreen);
        assert_eq!(back.size, (1000, 800));
    }

    #[test]
    fn test_zero_resize_ignored() {
        let display = DisplayConfig::default();
        let after = display.reconfigure(DisplayEvent::Resized {
            width: 0,
            height: 0,
        });
        assert_eq!(after, display);
    }

    #[test]
    fn test_fullscreen_round_trip_restores_window() {
        let display = DisplayConfig::default().reconfigure(DisplayEvent::Resized {
            width: 1200,
            height: 900,
        });
        let full = display.reconfigure(DisplayEvent::ToggleFullscreen);
        let back = full.reconfigure(DisplayEvent::ExitFullscreen);
        assert!(!back.fullscreen);
        assert_eq!(back.size, (1200, 900));
        // ESC while windowed does nothing
        assert_eq!(back.reconfigure(DisplayEvent::ExitFullscreen), back);
    }

    #[test]
    fn test_font_size_floor() {
        let small = DisplayConfig::new((300, 300), (1920, 1080), false);
        assert_eq!(small.font_size(), 12.0);
        assert_eq!(DisplayConfig::default().font_size(), 20.0);
    }
}
