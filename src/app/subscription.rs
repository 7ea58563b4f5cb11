// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::alert::Manager;
use iced::Subscription;

/// Timers needed by the alert manager, mapped into app messages.
///
/// Empty while there are no alerts, so an idle window does no timer work.
pub fn create_alert_subscription(alerts: &Manager) -> Subscription<Message> {
    alerts.subscription().map(Message::Alerts)
}
