// SPDX-License-Identifier: MPL-2.0
//! Constant-speed tweens driving the animated properties of an alert.
//!
//! A [`Tween`] moves a single numeric property from one value to another at a
//! fixed speed (units per second). It is advanced by [`Frame`]s carrying the
//! time elapsed since the previous frame and can optionally report a single
//! [`Completion`] once it reaches its target.

use crate::config::{
    HEIGHT_SPEED, HEIGHT_VISIBLE, OPACITY_SPEED, OPACITY_VISIBLE, PADDING_SPEED, PADDING_VISIBLE,
};
use std::time::Duration;

/// Animated property of an alert. Each alert owns one tween per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Opacity,
    Height,
    Padding,
}

impl Channel {
    /// All channels, in the order they are stored and advanced.
    pub const ALL: [Channel; 3] = [Channel::Opacity, Channel::Height, Channel::Padding];

    /// Value of this property when the alert is fully shown.
    #[must_use]
    pub fn visible_value(self) -> f32 {
        match self {
            Channel::Opacity => OPACITY_VISIBLE,
            Channel::Height => HEIGHT_VISIBLE,
            Channel::Padding => PADDING_VISIBLE,
        }
    }

    /// Speed of this property in units per second.
    #[must_use]
    pub fn speed(self) -> f32 {
        match self {
            Channel::Opacity => OPACITY_SPEED,
            Channel::Height => HEIGHT_SPEED,
            Channel::Padding => PADDING_SPEED,
        }
    }

    /// Whether reaching the end of an exit tween on this channel acknowledges
    /// the removal of its alert. Opacity finishes silently.
    #[must_use]
    pub fn acknowledges_exit(self) -> bool {
        matches!(self, Channel::Height | Channel::Padding)
    }

    /// Entry tween: from hidden to fully shown.
    #[must_use]
    pub fn enter(self) -> Tween {
        Tween::start(0.0, self.visible_value(), self.speed(), false)
    }

    /// Exit tween starting from wherever `current` left the property.
    #[must_use]
    pub fn exit(self, current: &Tween) -> Tween {
        Tween::start(
            current.current_value(),
            0.0,
            self.speed(),
            self.acknowledges_exit(),
        )
    }
}

/// One animation step: the time elapsed since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub elapsed: Duration,
}

impl Frame {
    #[must_use]
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

/// Signal emitted once by a tween started with `on_complete` when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion;

/// A numeric property travelling toward a target at constant speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    speed: f32,
    value: f32,
    settled: bool,
    on_complete: bool,
}

impl Tween {
    /// Starts a tween at `from` heading to `to` at `speed` units per second.
    ///
    /// When `on_complete` is set, the frame that brings the tween to its target
    /// returns a [`Completion`]. A tween whose endpoints coincide settles on its
    /// first frame.
    #[must_use]
    pub fn start(from: f32, to: f32, speed: f32, on_complete: bool) -> Self {
        Self {
            from,
            to,
            speed: speed.abs(),
            value: from,
            settled: false,
            on_complete,
        }
    }

    /// Advances the tween by one frame.
    pub fn advance(&mut self, frame: Frame) -> Option<Completion> {
        if self.settled {
            return None;
        }

        let step = self.speed * frame.elapsed.as_secs_f32();
        let remaining = self.to - self.value;

        if remaining.abs() <= step {
            self.value = self.to;
            self.settled = true;
            return self.on_complete.then_some(Completion);
        }

        self.value += step.copysign(remaining);
        None
    }

    /// Current value of the animated property.
    #[must_use]
    pub fn current_value(&self) -> f32 {
        self.value
    }

    /// Value the tween started from.
    #[must_use]
    pub fn origin(&self) -> f32 {
        self.from
    }

    /// Value the tween is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the tween has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}
