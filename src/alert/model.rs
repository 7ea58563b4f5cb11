// SPDX-License-Identifier: MPL-2.0
//! Core alert data structures.
//!
//! This module defines the `Alert` struct, the `AlertKind` enum and the
//! countdown that drives auto-dismissal.

use crate::config::{TickInterval, LONG_LIFETIME, SHORT_LIFETIME};
use crate::error::{Error, Result};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Identifier of an alert inside one store. Keys grow monotonically and are
/// never handed out twice by the same store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertKey(u64);

impl AlertKey {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw key value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of alert; determines styling and default lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertKind {
    /// Informational message (blue, 3s).
    #[default]
    Info,
    /// Operation completed successfully (green, 3s).
    Success,
    /// Warning that doesn't block operation (orange, 5s).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
    /// Long-running operation with a spinner (manual dismiss, survives `ClearAll`).
    Loading,
}

impl AlertKind {
    pub const ALL: [AlertKind; 5] = [
        AlertKind::Info,
        AlertKind::Success,
        AlertKind::Warning,
        AlertKind::Error,
        AlertKind::Loading,
    ];

    /// Returns the primary color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            AlertKind::Info => palette::INFO_500,
            AlertKind::Success => palette::SUCCESS_500,
            AlertKind::Warning => palette::WARNING_500,
            AlertKind::Error => palette::ERROR_500,
            AlertKind::Loading => palette::PRIMARY_500,
        }
    }

    /// Returns the style class name the host renders this kind with.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            AlertKind::Info => "alert-info",
            AlertKind::Success => "alert-success",
            AlertKind::Warning => "alert-warning",
            AlertKind::Error => "alert-error",
            AlertKind::Loading => "alert-loading",
        }
    }

    /// Returns the auto-dismiss delay for this kind.
    /// Returns `None` for kinds that must be dismissed manually.
    #[must_use]
    pub fn default_lifetime(self) -> Option<Duration> {
        match self {
            AlertKind::Info | AlertKind::Success => Some(SHORT_LIFETIME),
            AlertKind::Warning => Some(LONG_LIFETIME),
            AlertKind::Error | AlertKind::Loading => None,
        }
    }

    /// Default countdown for this kind at the given tick resolution.
    #[must_use]
    pub fn default_countdown(self, interval: TickInterval) -> Countdown {
        self.default_lifetime()
            .map_or(Countdown::Never, |lifetime| {
                Countdown::Ticks(interval.ticks_for(lifetime))
            })
    }
}

/// Remaining lifetime of an alert, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The kind's default lifetime, converted to ticks by the manager the
    /// alert is added to. Never present in a manager's store.
    KindDefault,
    /// Never removed automatically.
    Never,
    /// Removed once this many more ticks have elapsed.
    Ticks(u32),
}

impl Countdown {
    /// Builds a countdown from a signed tick count where any negative value
    /// means "never".
    #[must_use]
    pub fn from_raw(ticks: i64) -> Self {
        if ticks < 0 {
            Countdown::Never
        } else {
            Countdown::Ticks(u32::try_from(ticks).unwrap_or(u32::MAX))
        }
    }

    /// Replaces [`Countdown::KindDefault`] with the lifetime of `kind` at the
    /// given tick resolution.
    #[must_use]
    pub fn resolve(self, kind: AlertKind, interval: TickInterval) -> Self {
        match self {
            Countdown::KindDefault => kind.default_countdown(interval),
            other => other,
        }
    }

    /// Parses a user-supplied duration in seconds.
    ///
    /// An empty input means the alert stays until dismissed. Anything that is
    /// not a finite, non-negative number is rejected so that invalid values
    /// never reach the store.
    pub fn parse_seconds(input: &str, interval: TickInterval) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Countdown::Never);
        }

        let seconds: f64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidDuration(trimmed.to_string()))?;

        if !seconds.is_finite() {
            return Err(Error::InvalidDuration(trimmed.to_string()));
        }

        let invalid = || Error::InvalidDuration(trimmed.to_string());
        let lifetime = Duration::try_from_secs_f64(seconds).map_err(|_| invalid())?;
        let ticks = interval.checked_ticks_for(lifetime).ok_or_else(invalid)?;

        Ok(Countdown::Ticks(ticks))
    }

    /// Whether the countdown has run out.
    #[must_use]
    pub fn is_expired(self) -> bool {
        self == Countdown::Ticks(0)
    }
}

/// An alert to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    kind: AlertKind,
    message: String,
    ticks_until_remove: Countdown,
    show_icon: bool,
}

impl Alert {
    /// Creates a new alert with the kind's default lifetime, resolved against
    /// the tick interval of the manager it is added to.
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            ticks_until_remove: Countdown::KindDefault,
            show_icon: true,
        }
    }

    /// Creates an info alert.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, message)
    }

    /// Creates a success alert.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, message)
    }

    /// Creates a warning alert.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, message)
    }

    /// Creates an error alert.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, message)
    }

    /// Creates a loading alert.
    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Loading, message)
    }

    /// Sets how many ticks the alert stays before it starts leaving.
    #[must_use]
    pub fn with_countdown(mut self, countdown: Countdown) -> Self {
        self.ticks_until_remove = countdown;
        self
    }

    /// Sets whether a dismiss affordance is rendered.
    #[must_use]
    pub fn with_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    #[must_use]
    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn ticks_until_remove(&self) -> Countdown {
        self.ticks_until_remove
    }

    #[must_use]
    pub fn show_icon(&self) -> bool {
        self.show_icon
    }

    /// Converts a kind-default countdown into ticks at `interval`.
    #[must_use]
    pub(crate) fn resolved(mut self, interval: TickInterval) -> Self {
        self.ticks_until_remove = self.ticks_until_remove.resolve(self.kind, interval);
        self
    }

    pub(crate) fn set_countdown(&mut self, countdown: Countdown) {
        self.ticks_until_remove = countdown;
    }

    /// Decrements a running countdown. Returns `true` when this tick brought it
    /// to zero.
    pub(crate) fn tick(&mut self) -> bool {
        match self.ticks_until_remove {
            Countdown::Ticks(n) if n > 0 => {
                self.ticks_until_remove = Countdown::Ticks(n - 1);
                n == 1
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in AlertKind::ALL.iter().enumerate() {
            for b in &AlertKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a:?} and {b:?} share a color");
            }
        }
    }

    #[test]
    fn class_names_follow_kind() {
        assert_eq!(AlertKind::Info.class_name(), "alert-info");
        assert_eq!(AlertKind::Loading.class_name(), "alert-loading");
    }

    #[test]
    fn error_and_loading_have_no_lifetime() {
        assert!(AlertKind::Error.default_lifetime().is_none());
        assert!(AlertKind::Loading.default_lifetime().is_none());
        assert_eq!(
            AlertKind::Error.default_countdown(TickInterval::default()),
            Countdown::Never
        );
    }

    #[test]
    fn default_countdown_uses_tick_interval() {
        let countdown = AlertKind::Success.default_countdown(TickInterval::new(100));
        assert_eq!(countdown, Countdown::Ticks(30));
    }

    #[test]
    fn negative_raw_countdown_means_never() {
        assert_eq!(Countdown::from_raw(-1), Countdown::Never);
        assert_eq!(Countdown::from_raw(2), Countdown::Ticks(2));
    }

    #[test]
    fn kind_default_resolves_at_given_interval() {
        let slow = TickInterval::new(1000);
        assert_eq!(
            Countdown::KindDefault.resolve(AlertKind::Info, slow),
            Countdown::Ticks(3)
        );
        assert_eq!(
            Countdown::KindDefault.resolve(AlertKind::Error, slow),
            Countdown::Never
        );
        assert_eq!(
            Countdown::Ticks(7).resolve(AlertKind::Info, slow),
            Countdown::Ticks(7)
        );
    }

    #[test]
    fn parse_seconds_rejects_overflowing_durations() {
        let interval = TickInterval::new(10);
        assert!(matches!(
            Countdown::parse_seconds("1e12", interval),
            Err(Error::InvalidDuration(input)) if input == "1e12"
        ));
    }

    #[test]
    fn parse_seconds_accepts_numbers() {
        let interval = TickInterval::new(100);
        assert_eq!(
            Countdown::parse_seconds(" 2.5 ", interval),
            Ok(Countdown::Ticks(25))
        );
        assert_eq!(Countdown::parse_seconds("", interval), Ok(Countdown::Never));
    }

    #[test]
    fn parse_seconds_rejects_garbage() {
        let interval = TickInterval::default();
        assert!(matches!(
            Countdown::parse_seconds("soon", interval),
            Err(Error::InvalidDuration(_))
        ));
        assert!(Countdown::parse_seconds("-3", interval).is_err());
        assert!(Countdown::parse_seconds("inf", interval).is_err());
        assert!(Countdown::parse_seconds("NaN", interval).is_err());
    }

    #[test]
    fn tick_reports_reaching_zero_once() {
        let mut alert = Alert::error("x").with_countdown(Countdown::Ticks(2));
        assert!(!alert.tick());
        assert!(alert.tick());
        assert!(alert.ticks_until_remove().is_expired());
        assert!(!alert.tick());
        assert_eq!(alert.ticks_until_remove(), Countdown::Ticks(0));
    }

    #[test]
    fn never_countdown_is_not_ticked() {
        let mut alert = Alert::loading("busy").resolved(TickInterval::default());
        assert!(!alert.tick());
        assert_eq!(alert.ticks_until_remove(), Countdown::Never);
    }

    #[test]
    fn builder_pattern_works() {
        let alert = Alert::warning("careful")
            .with_icon(false)
            .with_countdown(Countdown::Ticks(7));
        assert_eq!(alert.kind(), AlertKind::Warning);
        assert_eq!(alert.message(), "careful");
        assert!(!alert.show_icon());
        assert_eq!(alert.ticks_until_remove(), Countdown::Ticks(7));
    }
}
