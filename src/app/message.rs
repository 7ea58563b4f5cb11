// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::alert::{AlertKind, AlertMessage};

/// Top-level messages consumed by `App::update`. Alert messages are forwarded
/// to the alert manager; the others come from the demo controls.
#[derive(Debug, Clone)]
pub enum Message {
    Alerts(AlertMessage),
    /// Add an alert of this kind using the countdown typed in the input.
    Add(AlertKind),
    /// The countdown input changed.
    DurationChanged(String),
    /// Toggle the dismiss button on newly added alerts.
    ShowIconToggled(bool),
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Disable entry/exit animations regardless of the saved config.
    pub no_animations: bool,
    /// Override the countdown tick interval (milliseconds).
    pub tick_ms: Option<u64>,
    /// Locale of the demo texts, overriding config and system settings.
    pub lang: Option<String>,
}
