//! Keyboard controls
//!
//! Keys are platform independent here; the host maps its own key codes onto
//! [`Key`] so the step function can be driven without a window.

/// Keys the visualizer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Up,
    Down,
    V,
    T,
    R,
    F,
    Q,
    Escape,
    Enter,
    Backspace,
}

/// Parameter mutation requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TogglePause,
    /// Raise the scene's rate parameter (decay rate, time scale or ω)
    Increase,
    /// Lower the scene's rate parameter
    Decrease,
    /// Vector overlay (the vector field in the decay scene)
    ToggleVectors,
    ToggleTrail,
    Reset,
    ToggleFullscreen,
    ExitFullscreen,
    Quit,
}

/// Control bound to a key when no text field has focus
pub fn control_for(key: Key) -> Option<Control> {
    match key {
        Key::Space => Some(Control::TogglePause),
        Key::Up => Some(Control::Increase),
        Key::Down => Some(Control::Decrease),
        Key::V => Some(Control::ToggleVectors),
        Key::T => Some(Control::ToggleTrail),
        Key::R => Some(Control::Reset),
        Key::F => Some(Control::ToggleFullscreen),
        Key::Escape => Some(Control::ExitFullscreen),
        Key::Q => Some(Control::Quit),
        Key::Enter | Key::Backspace => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(control_for(Key::Space), Some(Control::TogglePause));
        assert_eq!(control_for(Key::F), Some(Control::ToggleFullscreen));
        assert_eq!(control_for(Key::Enter), None);
    }
}
