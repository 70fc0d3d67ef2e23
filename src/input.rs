//! Window input translation
//!
//! Collects winit window events into the platform-independent
//! [`InputEvent`]s the step function consumes.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::{InputEvent, Key};

/// Map a physical key onto a visualizer key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Space => Some(Key::Space),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::KeyV => Some(Key::V),
        KeyCode::KeyT => Some(Key::T),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::KeyF => Some(Key::F),
        KeyCode::KeyQ => Some(Key::Q),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

/// Events gathered between two ticks
#[derive(Debug, Default)]
pub struct InputCollector {
    cursor: Vec2,
    pending: Vec<InputEvent>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a window event. Returns `true` if it produced input.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let before = self.pending.len();
        match event {
            WindowEvent::CloseRequested => self.pending.push(InputEvent::Quit),
            WindowEvent::Resized(size) => self.pending.push(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.pending.push(InputEvent::Click(self.cursor)),
            WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() => {
                if let PhysicalKey::Code(code) = event.physical_key
                    && let Some(key) = map_key(code)
                {
                    self.pending.push(InputEvent::Key(key));
                }
                if let Some(text) = &event.text {
                    self.pending.extend(
                        text.chars()
                            .filter(|c| !c.is_control())
                            .map(InputEvent::Text),
                    );
                }
            }
            _ => {}
        }
        self.pending.len() > before
    }

    /// Drain everything collected so far, in arrival order
    pub fn take(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(Key::Up));
        assert_eq!(map_key(KeyCode::NumpadEnter), Some(Key::Enter));
        assert_eq!(map_key(KeyCode::KeyV), Some(Key::V));
        assert_eq!(map_key(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_collects_in_order() {
        let mut input = InputCollector::new();
        assert!(input.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(640, 480))));
        assert!(input.handle_window_event(&WindowEvent::CloseRequested));
        assert!(!input.handle_window_event(&WindowEvent::Focused(true)));

        assert_eq!(
            input.take(),
            vec![
                InputEvent::Resized {
                    width: 640,
                    height: 480
                },
                InputEvent::Quit
            ]
        );
        assert!(input.take().is_empty());
    }
}
