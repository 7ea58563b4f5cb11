// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle management.
//!
//! The `Manager` drives every alert through `Entering → Visible → Exiting`
//! until it is purged from the store. All transitions happen inside
//! [`Manager::handle_message`]; follow-up work such as exit acknowledgements is
//! returned as [`Effect`]s for the host to feed back through its own queue.
//!
//! Timer and animation callbacks may arrive after the alert they refer to has
//! been purged. Such messages are dropped silently.

use super::model::{Alert, AlertKey, AlertKind, Countdown};
use super::projection::{self, AlertView};
use super::store::AlertStore;
use crate::animation::{Channel, Frame};
use crate::config::{Config, TickInterval, EXIT_ACKS_REQUIRED, SPINNER_INTERVAL};
use crate::spinner;
use iced::{time, window, Subscription};
use std::time::{Duration, Instant};

/// Messages for alert state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a new alert.
    AddAlert(Alert),
    /// Dismiss an alert, animating it out when animations are enabled.
    RemoveAlert(AlertKey),
    /// Remove every alert except loading ones.
    ClearAll,
    /// Remove every alert.
    ForceClearAll,
    /// Countdown step.
    Tick,
    /// Host animation frame; fanned out to every live tween.
    Animate(Instant),
    /// Advance one channel of one alert.
    AnimationFrame {
        channel: Channel,
        key: AlertKey,
        frame: Frame,
    },
    /// Spinner timer pulse; fanned out to every loading alert.
    SpinnerPulse,
    /// Advance the spinner of one loading alert.
    SpinnerTick(AlertKey, spinner::Message),
    /// An exit tween finished.
    Hide(AlertKey),
}

/// Follow-up produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A new alert was stored under this key.
    Added(AlertKey),
    /// An exit tween completed; deliver [`Message::Hide`] for this key.
    Hide(AlertKey),
    /// The alert left the store.
    Purged(AlertKey),
}

impl Effect {
    /// The controller message this effect must be delivered as, if any.
    #[must_use]
    pub fn into_message(self) -> Option<Message> {
        match self {
            Effect::Hide(key) => Some(Message::Hide(key)),
            Effect::Added(_) | Effect::Purged(_) => None,
        }
    }
}

/// Lifecycle phase of a live alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entry tweens are still running.
    Entering,
    /// Fully shown, counting down or waiting for dismissal.
    Visible,
    /// Exit tweens are running; purged once acknowledged.
    Exiting,
}

/// Owns the alert store and applies lifecycle transitions to it.
#[derive(Debug, Clone)]
pub struct Manager {
    store: AlertStore,
    tick_interval: TickInterval,
    last_frame: Option<Instant>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(true, TickInterval::default())
    }
}

impl Manager {
    /// Creates a new empty alert manager.
    #[must_use]
    pub fn new(animations_enabled: bool, tick_interval: TickInterval) -> Self {
        Self {
            store: AlertStore::new(animations_enabled),
            tick_interval,
            last_frame: None,
        }
    }

    /// Creates a manager using the animation and tick settings of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.animations_enabled(), config.tick_interval())
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &AlertStore {
        &self.store
    }

    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.tick_interval
    }

    /// Returns whether there are any alerts.
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.store.is_empty()
    }

    /// Handles an alert message.
    pub fn handle_message(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::AddAlert(alert) => vec![Effect::Added(self.add(alert))],
            Message::RemoveAlert(key) => self.remove(key),
            Message::ClearAll => self.clear_all(),
            Message::ForceClearAll => self.force_clear_all(),
            Message::Tick => self.tick(),
            Message::Animate(now) => self.animate(now),
            Message::AnimationFrame {
                channel,
                key,
                frame,
            } => self.animation_frame(channel, key, frame),
            Message::SpinnerPulse => {
                self.spinner_pulse();
                Vec::new()
            }
            Message::SpinnerTick(key, msg) => {
                self.spinner_tick(key, msg);
                Vec::new()
            }
            Message::Hide(key) => self.hide(key),
        }
    }

    /// Stores a new alert and starts its entry tweens.
    ///
    /// A [`Countdown::KindDefault`] is converted to ticks at this manager's
    /// tick interval.
    pub fn add(&mut self, alert: Alert) -> AlertKey {
        let alert = alert.resolved(self.tick_interval);
        let alert = if alert.ticks_until_remove() == Countdown::Ticks(0) {
            alert.with_countdown(Countdown::Ticks(1))
        } else {
            alert
        };

        let key = self.store.insert(alert);
        if self.store.animations_enabled() {
            for channel in Channel::ALL {
                self.store.update_animation(channel, key, channel.enter());
            }
            self.store.update_spinner(key, spinner::State::init());
        }

        log::debug!("Alert {key} added");
        key
    }

    /// Dismisses an alert.
    ///
    /// With animations the countdown is set to one tick so the next tick starts
    /// the regular exit sequence; without them the alert is purged at once.
    pub fn remove(&mut self, key: AlertKey) -> Vec<Effect> {
        if !self.store.animations_enabled() {
            return self.purge(key).into_iter().collect();
        }

        if self.store.is_exiting(key) {
            return Vec::new();
        }

        match self.store.get_mut(key) {
            Some(alert) => alert.set_countdown(Countdown::Ticks(1)),
            None => log::trace!("Ignoring removal of unknown alert {key}"),
        }
        Vec::new()
    }

    /// Purges every alert except loading ones.
    pub fn clear_all(&mut self) -> Vec<Effect> {
        let removed = self
            .store
            .retain(|alert| alert.kind() == AlertKind::Loading);
        self.reset_frame_clock();
        log::debug!("Cleared {} alerts", removed.len());
        removed.into_iter().map(Effect::Purged).collect()
    }

    /// Purges every alert, loading ones included.
    pub fn force_clear_all(&mut self) -> Vec<Effect> {
        let removed: Vec<AlertKey> = self.store.keys().collect();
        self.store.clear();
        self.last_frame = None;
        log::debug!("Force-cleared {} alerts", removed.len());
        removed.into_iter().map(Effect::Purged).collect()
    }

    /// Processes one countdown step.
    pub fn tick(&mut self) -> Vec<Effect> {
        let keys: Vec<AlertKey> = self.store.keys().collect();
        let expired: Vec<AlertKey> = keys
            .into_iter()
            .filter(|key| self.store.get_mut(*key).is_some_and(|alert| alert.tick()))
            .collect();

        let mut effects = Vec::new();
        for key in expired {
            if self.store.animations_enabled() {
                self.begin_exit(key);
            } else {
                effects.extend(self.purge(key));
            }
        }
        effects
    }

    /// Advances every live tween by the time elapsed since the previous frame.
    pub fn animate(&mut self, now: Instant) -> Vec<Effect> {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);
        let frame = Frame::new(elapsed);

        let mut effects = Vec::new();
        for channel in Channel::ALL {
            let keys: Vec<AlertKey> = self.store.animations(channel).keys().copied().collect();
            for key in keys {
                effects.extend(self.animation_frame(channel, key, frame));
            }
        }

        self.reset_frame_clock();
        effects
    }

    /// Advances one tween. A completed exit tween yields [`Effect::Hide`].
    pub fn animation_frame(&mut self, channel: Channel, key: AlertKey, frame: Frame) -> Vec<Effect> {
        let Some(tween) = self.store.animation_mut(channel, key) else {
            log::trace!("Dropping {channel:?} frame for purged alert {key}");
            return Vec::new();
        };

        match tween.advance(frame) {
            Some(_) => vec![Effect::Hide(key)],
            None => Vec::new(),
        }
    }

    fn spinner_pulse(&mut self) {
        let loading: Vec<AlertKey> = self
            .store
            .iter()
            .filter(|(_, alert)| alert.kind() == AlertKind::Loading)
            .map(|(key, _)| key)
            .collect();

        for key in loading {
            self.spinner_tick(key, spinner::Message::Tick);
        }
    }

    /// Advances the spinner of a loading alert. Other kinds keep their
    /// spinner at rest.
    pub fn spinner_tick(&mut self, key: AlertKey, msg: spinner::Message) {
        let is_loading = self
            .store
            .get(key)
            .is_some_and(|alert| alert.kind() == AlertKind::Loading);
        let Some(state) = self.store.spinner(key).copied().filter(|_| is_loading) else {
            log::trace!("Dropping spinner tick for alert {key}");
            return;
        };
        self.store.update_spinner(key, state.advance(msg));
    }

    /// Records an exit acknowledgement; the second one purges the alert.
    pub fn hide(&mut self, key: AlertKey) -> Vec<Effect> {
        match self.store.acknowledge_exit(key) {
            Some(count) if count >= EXIT_ACKS_REQUIRED => self.purge(key).into_iter().collect(),
            Some(_) => Vec::new(),
            None => {
                log::trace!("Ignoring hide for alert {key} that is not leaving");
                Vec::new()
            }
        }
    }

    /// Returns the lifecycle phase of `key`, or `None` once it is purged.
    #[must_use]
    pub fn phase(&self, key: AlertKey) -> Option<Phase> {
        if !self.store.contains(key) {
            return None;
        }
        if self.store.is_exiting(key) {
            return Some(Phase::Exiting);
        }

        let entering = Channel::ALL.iter().any(|channel| {
            self.store
                .animation(*channel, key)
                .is_some_and(|tween| !tween.is_settled())
        });
        Some(if entering {
            Phase::Entering
        } else {
            Phase::Visible
        })
    }

    /// Renderable descriptors, newest first.
    #[must_use]
    pub fn view(&self) -> Vec<AlertView> {
        projection::project(&self.store)
    }

    /// Whether the countdown timer must run: any alert is stored.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        !self.store.is_empty()
    }

    /// Whether animation frames are needed: some tween is still moving.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.store.is_animating()
    }

    /// Whether the spinner timer must run: a loading alert carries spinner
    /// state, which only happens with animations enabled.
    #[must_use]
    pub fn needs_spinner_timer(&self) -> bool {
        self.store.iter().any(|(key, alert)| {
            alert.kind() == AlertKind::Loading && self.store.spinner(key).is_some()
        })
    }

    /// Timers and frame pulses the manager needs right now.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.needs_ticks() {
            return Subscription::none();
        }

        let tick = time::every(self.tick_interval.as_duration()).map(|_| Message::Tick);

        let frames = if self.needs_frames() {
            window::frames().map(Message::Animate)
        } else {
            Subscription::none()
        };

        let spinners = if self.needs_spinner_timer() {
            time::every(SPINNER_INTERVAL).map(|_| Message::SpinnerPulse)
        } else {
            Subscription::none()
        };

        Subscription::batch([tick, frames, spinners])
    }

    fn begin_exit(&mut self, key: AlertKey) {
        if !self.store.begin_exit(key) {
            return;
        }
        for channel in Channel::ALL {
            if let Some(exit) = self.store.animation(channel, key).map(|t| channel.exit(t)) {
                self.store.update_animation(channel, key, exit);
            }
        }
        log::debug!("Alert {key} exiting");
    }

    fn purge(&mut self, key: AlertKey) -> Option<Effect> {
        self.store.remove(key)?;
        self.reset_frame_clock();
        log::debug!("Alert {key} purged");
        Some(Effect::Purged(key))
    }

    /// Forgets the previous frame time once nothing moves, so the next
    /// animation does not start with a jump.
    fn reset_frame_clock(&mut self) {
        if !self.store.is_animating() {
            self.last_frame = None;
        }
    }
}
