// SPDX-License-Identifier: MPL-2.0
//! Storage for live alerts and their per-key animation state.
//!
//! Every map is keyed by [`AlertKey`]. A key is either present in all the maps
//! that apply to it or in none: [`AlertStore::remove`] drops it everywhere at
//! once, and animation or spinner state can only be written for keys that
//! still hold an alert.

use super::model::{Alert, AlertKey};
use crate::animation::{Channel, Tween};
use crate::spinner;
use std::collections::BTreeMap;

/// Live alerts keyed by insertion order.
#[derive(Debug, Clone)]
pub struct AlertStore {
    alerts: BTreeMap<AlertKey, Alert>,
    next_key: u64,
    animations_enabled: bool,
    opacity: BTreeMap<AlertKey, Tween>,
    height: BTreeMap<AlertKey, Tween>,
    padding: BTreeMap<AlertKey, Tween>,
    /// Exit acknowledgements; an entry exists only while its alert is leaving.
    remove_acks: BTreeMap<AlertKey, u8>,
    spinners: BTreeMap<AlertKey, spinner::State>,
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AlertStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(animations_enabled: bool) -> Self {
        Self {
            alerts: BTreeMap::new(),
            next_key: 0,
            animations_enabled,
            opacity: BTreeMap::new(),
            height: BTreeMap::new(),
            padding: BTreeMap::new(),
            remove_acks: BTreeMap::new(),
            spinners: BTreeMap::new(),
        }
    }

    /// Whether alerts in this store carry animation state.
    #[must_use]
    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    /// Stores `alert` under a fresh key and returns it.
    pub fn insert(&mut self, alert: Alert) -> AlertKey {
        let key = AlertKey::new(self.next_key);
        self.next_key += 1;
        self.alerts.insert(key, alert);
        key
    }

    #[must_use]
    pub fn get(&self, key: AlertKey) -> Option<&Alert> {
        self.alerts.get(&key)
    }

    pub(crate) fn get_mut(&mut self, key: AlertKey) -> Option<&mut Alert> {
        self.alerts.get_mut(&key)
    }

    #[must_use]
    pub fn contains(&self, key: AlertKey) -> bool {
        self.alerts.contains_key(&key)
    }

    /// Removes `key` from every map. Returns the alert if it was present.
    pub fn remove(&mut self, key: AlertKey) -> Option<Alert> {
        for channel in Channel::ALL {
            self.channel_mut(channel).remove(&key);
        }
        self.remove_acks.remove(&key);
        self.spinners.remove(&key);
        self.alerts.remove(&key)
    }

    /// Removes every alert for which `keep` returns `false`, returning the
    /// removed keys in insertion order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Alert) -> bool) -> Vec<AlertKey> {
        let doomed: Vec<AlertKey> = self
            .alerts
            .iter()
            .filter(|(_, alert)| !keep(alert))
            .map(|(key, _)| *key)
            .collect();

        for key in &doomed {
            self.remove(*key);
        }
        doomed
    }

    /// Drops every alert. The key counter and animation setting are kept, so
    /// keys handed out afterwards are still fresh.
    pub fn clear(&mut self) {
        self.alerts.clear();
        self.opacity.clear();
        self.height.clear();
        self.padding.clear();
        self.remove_acks.clear();
        self.spinners.clear();
    }

    /// Replaces the tween of `channel` for `key`.
    ///
    /// Ignored (returns `false`) when animations are disabled or the key no
    /// longer holds an alert.
    pub fn update_animation(&mut self, channel: Channel, key: AlertKey, tween: Tween) -> bool {
        if !self.animations_enabled || !self.alerts.contains_key(&key) {
            return false;
        }
        self.channel_mut(channel).insert(key, tween);
        true
    }

    #[must_use]
    pub fn animation(&self, channel: Channel, key: AlertKey) -> Option<&Tween> {
        self.channel(channel).get(&key)
    }

    pub(crate) fn animation_mut(&mut self, channel: Channel, key: AlertKey) -> Option<&mut Tween> {
        self.channel_mut(channel).get_mut(&key)
    }

    /// All tweens of one channel.
    #[must_use]
    pub fn animations(&self, channel: Channel) -> &BTreeMap<AlertKey, Tween> {
        self.channel(channel)
    }

    /// Whether any tween is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        Channel::ALL
            .iter()
            .any(|channel| self.channel(*channel).values().any(|t| !t.is_settled()))
    }

    #[must_use]
    pub fn spinner(&self, key: AlertKey) -> Option<&spinner::State> {
        self.spinners.get(&key)
    }

    /// Replaces the spinner state for `key`, under the same rules as
    /// [`AlertStore::update_animation`].
    pub fn update_spinner(&mut self, key: AlertKey, state: spinner::State) -> bool {
        if !self.animations_enabled || !self.alerts.contains_key(&key) {
            return false;
        }
        self.spinners.insert(key, state);
        true
    }

    /// Opens the exit window for `key`. Returns `false` if the key is absent
    /// or already leaving.
    pub(crate) fn begin_exit(&mut self, key: AlertKey) -> bool {
        if !self.alerts.contains_key(&key) || self.remove_acks.contains_key(&key) {
            return false;
        }
        self.remove_acks.insert(key, 0);
        true
    }

    /// Records one exit acknowledgement and returns the new count, or `None`
    /// if the key is not leaving.
    pub(crate) fn acknowledge_exit(&mut self, key: AlertKey) -> Option<u8> {
        let count = self.remove_acks.get_mut(&key)?;
        *count = count.saturating_add(1);
        Some(*count)
    }

    /// Exit acknowledgements received so far for a leaving alert.
    #[must_use]
    pub fn remove_ack_count(&self, key: AlertKey) -> Option<u8> {
        self.remove_acks.get(&key).copied()
    }

    #[must_use]
    pub fn is_exiting(&self, key: AlertKey) -> bool {
        self.remove_acks.contains_key(&key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = AlertKey> + '_ {
        self.alerts.keys().copied()
    }

    /// Keys newest first, the order alerts are displayed in.
    pub fn keys_newest_first(&self) -> impl Iterator<Item = AlertKey> + '_ {
        self.keys().rev()
    }

    /// Alerts in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (AlertKey, &Alert)> + '_ {
        self.alerts.iter().map(|(key, alert)| (*key, alert))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// The key the next inserted alert will receive.
    #[must_use]
    pub fn next_key(&self) -> AlertKey {
        AlertKey::new(self.next_key)
    }

    /// Checks the cross-map invariants: with animations enabled every alert
    /// has one tween per channel and a spinner, without them those maps are
    /// empty; ack counters only exist for live alerts.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let same_keys = |map_keys: Vec<&AlertKey>| -> bool {
            if self.animations_enabled {
                map_keys.len() == self.alerts.len()
                    && map_keys.iter().all(|key| self.alerts.contains_key(key))
            } else {
                map_keys.is_empty()
            }
        };

        Channel::ALL
            .iter()
            .all(|channel| same_keys(self.channel(*channel).keys().collect()))
            && same_keys(self.spinners.keys().collect())
            && self
                .remove_acks
                .keys()
                .all(|key| self.alerts.contains_key(key))
    }

    fn channel(&self, channel: Channel) -> &BTreeMap<AlertKey, Tween> {
        match channel {
            Channel::Opacity => &self.opacity,
            Channel::Height => &self.height,
            Channel::Padding => &self.padding,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut BTreeMap<AlertKey, Tween> {
        match channel {
            Channel::Opacity => &mut self.opacity,
            Channel::Height => &mut self.height,
            Channel::Padding => &mut self.padding,
        }
    }
}
