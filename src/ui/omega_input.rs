//! Numeric angular-velocity field
//!
//! Click to focus, type, ENTER to commit. A draft that does not parse as a
//! finite number is thrown away and the field shows the last accepted value
//! again.

use super::Rect;
use crate::display::DisplayConfig;

/// Longest draft the field accepts
const MAX_DRAFT_LEN: usize = 16;

/// Outcome of pressing ENTER
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Commit {
    Accepted(f32),
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OmegaInput {
    pub focused: bool,
    draft: String,
    /// Last accepted value
    value: Option<f32>,
}

impl OmegaInput {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn value(&self) -> Option<f32> {
        self.value
    }

    /// Screen rectangle of the field
    pub fn rect(&self, display: &DisplayConfig) -> Rect {
        let s = display.scale();
        Rect::new(20.0 * s, 80.0 * s, 220.0 * s, 32.0 * s)
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.revert();
    }

    /// Lose focus, discarding the draft
    pub fn cancel(&mut self) {
        self.focused = false;
        self.revert();
    }

    /// Forget the accepted value (scene reset)
    pub fn clear(&mut self) {
        self.value = None;
        self.cancel();
    }

    pub fn insert(&mut self, c: char) {
        if c.is_control() || c.is_whitespace() || self.draft.chars().count() >= MAX_DRAFT_LEN {
            return;
        }
        self.draft.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Parse the draft. Either way the field loses focus.
    pub fn commit(&mut self) -> Commit {
        self.focused = false;
        match self.draft.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => {
                self.value = Some(v);
                self.revert();
                Commit::Accepted(v)
            }
            _ => {
                log::warn!("Ignoring angular velocity {:?}: not a number", self.draft);
                self.revert();
                Commit::Rejected
            }
        }
    }

    fn revert(&mut self) {
        self.draft = self.value.map(|v| v.to_string()).unwrap_or_default();
    }
}
