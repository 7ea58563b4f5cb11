// SPDX-License-Identifier: MPL-2.0
//! Ticking state of the spinner shown inside loading alerts.

use std::f32::consts::TAU;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Rotation state of a single spinner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    /// Current rotation angle in radians, kept within `[0, TAU)`.
    rotation: f32,
}

/// Messages for the spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Animate the spinner by one step.
    Tick,
}

impl State {
    /// Fresh spinner at rest.
    #[must_use]
    pub fn init() -> Self {
        Self::default()
    }

    /// Returns the spinner after applying `msg`.
    #[must_use]
    pub fn advance(mut self, msg: Message) -> Self {
        match msg {
            Message::Tick => {
                self.rotation += SPINNER_SPEED;
                if self.rotation >= TAU {
                    self.rotation -= TAU;
                }
            }
        }
        self
    }

    /// Get the current rotation angle in radians.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}
