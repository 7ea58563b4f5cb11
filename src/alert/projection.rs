// SPDX-License-Identifier: MPL-2.0
//! Projection of the alert store into renderable descriptors.

use super::model::{AlertKey, AlertKind};
use super::store::AlertStore;
use crate::animation::Channel;
use crate::spinner;

/// Current values of the animated properties of one alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedStyle {
    pub opacity: f32,
    pub height: f32,
    pub padding: f32,
}

/// Everything the host needs to draw one alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertView {
    pub key: AlertKey,
    pub kind: AlertKind,
    pub class_name: &'static str,
    pub message: String,
    /// `None` when animations are disabled: draw at full size.
    pub style: Option<AnimatedStyle>,
    /// Spinner to draw; only set for loading alerts.
    pub spinner: Option<spinner::State>,
    /// Whether to draw a dismiss button.
    pub show_icon: bool,
}

/// Maps the store to descriptors, newest alert first.
#[must_use]
pub fn project(store: &AlertStore) -> Vec<AlertView> {
    store
        .keys_newest_first()
        .filter_map(|key| describe(store, key))
        .collect()
}

fn describe(store: &AlertStore, key: AlertKey) -> Option<AlertView> {
    let alert = store.get(key)?;

    let style = if store.animations_enabled() {
        let value = |channel| {
            store
                .animation(channel, key)
                .map_or(0.0, |tween| tween.current_value())
        };
        Some(AnimatedStyle {
            opacity: value(Channel::Opacity),
            height: value(Channel::Height),
            padding: value(Channel::Padding),
        })
    } else {
        None
    };

    // Without animations a loading alert shows a resting spinner.
    let spinner = (alert.kind() == AlertKind::Loading)
        .then(|| store.spinner(key).copied().unwrap_or_default());

    Some(AlertView {
        key,
        kind: alert.kind(),
        class_name: alert.kind().class_name(),
        message: alert.message().to_string(),
        style,
        spinner,
        show_icon: alert.show_icon(),
    })
}
