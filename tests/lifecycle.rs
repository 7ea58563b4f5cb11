// SPDX-License-Identifier: MPL-2.0
use iced_alerts::alert::{
    Alert, AlertKey, AlertKind, AlertMessage, Countdown, Effect, Manager, Phase,
};
use iced_alerts::animation::{Channel, Frame};
use iced_alerts::config::TickInterval;
use std::collections::VecDeque;
use std::time::Duration;

fn manager(animations: bool) -> Manager {
    Manager::new(animations, TickInterval::default())
}

fn error_alert(ticks: u32) -> Alert {
    Alert::error("x")
        .with_countdown(Countdown::Ticks(ticks))
        .with_icon(true)
}

/// Delivers `message` and every follow-up it posts, in queue order, the way
/// a host event loop would.
fn deliver(manager: &mut Manager, message: AlertMessage) -> Vec<Effect> {
    let mut queue = VecDeque::from([message]);
    let mut seen = Vec::new();
    while let Some(next) = queue.pop_front() {
        for effect in manager.handle_message(next) {
            seen.push(effect);
            queue.extend(effect.into_message());
        }
    }
    seen
}

fn frame(ms: u64) -> Frame {
    Frame::new(Duration::from_millis(ms))
}

#[test]
fn scenario_a_disabled_animations_purge_on_expiry() {
    let mut manager = manager(false);
    manager.handle_message(AlertMessage::AddAlert(error_alert(2)));

    let store = manager.store();
    assert_eq!(store.len(), 1);
    let (key, alert) = store.iter().next().unwrap();
    assert_eq!(alert.ticks_until_remove(), Countdown::Ticks(2));
    assert!(store.animations(Channel::Opacity).is_empty());
    assert!(store.animations(Channel::Height).is_empty());
    assert!(store.animations(Channel::Padding).is_empty());

    assert!(manager.handle_message(AlertMessage::Tick).is_empty());
    assert_eq!(
        manager.handle_message(AlertMessage::Tick),
        vec![Effect::Purged(key)]
    );
    assert!(manager.store().is_empty());
    assert!(manager.phase(key).is_none());
}

#[test]
fn scenario_b_animated_exit_needs_two_hides() {
    let mut manager = manager(true);
    manager.handle_message(AlertMessage::AddAlert(error_alert(2)));
    let key = manager.store().keys().next().unwrap();

    manager.handle_message(AlertMessage::Tick);
    manager.handle_message(AlertMessage::Tick);
    assert_eq!(manager.phase(key), Some(Phase::Exiting));

    assert!(manager.handle_message(AlertMessage::Hide(key)).is_empty());
    assert!(manager.store().contains(key));

    assert_eq!(
        manager.handle_message(AlertMessage::Hide(key)),
        vec![Effect::Purged(key)]
    );
    assert!(!manager.store().contains(key));
    for channel in Channel::ALL {
        assert!(manager.store().animation(channel, key).is_none());
    }
    assert!(manager.store().spinner(key).is_none());
    assert!(manager.store().remove_ack_count(key).is_none());
}

#[test]
fn scenario_c_remove_sets_countdown_to_one() {
    let mut manager = manager(true);
    manager.handle_message(AlertMessage::AddAlert(error_alert(500)));
    let key = manager.store().keys().next().unwrap();

    manager.handle_message(AlertMessage::RemoveAlert(key));
    assert_eq!(
        manager.store().get(key).unwrap().ticks_until_remove(),
        Countdown::Ticks(1)
    );

    manager.handle_message(AlertMessage::Tick);
    assert_eq!(manager.phase(key), Some(Phase::Exiting));
}

#[test]
fn remove_without_animations_purges_immediately() {
    let mut manager = manager(false);
    let key = manager.add(error_alert(500));

    assert_eq!(
        manager.handle_message(AlertMessage::RemoveAlert(key)),
        vec![Effect::Purged(key)]
    );
    assert!(manager.store().is_empty());
}

#[test]
fn exit_frames_drive_purge_through_posted_hides() {
    let mut manager = manager(true);
    let key = manager.add(error_alert(1));

    deliver(&mut manager, AlertMessage::Tick);
    assert_eq!(manager.phase(key), Some(Phase::Exiting));

    let mut purged = false;
    for channel in Channel::ALL {
        let effects = deliver(
            &mut manager,
            AlertMessage::AnimationFrame {
                channel,
                key,
                frame: frame(1_000),
            },
        );
        purged |= effects.contains(&Effect::Purged(key));
    }

    assert!(purged);
    assert!(manager.store().is_empty());
    assert!(manager.store().is_consistent());
}

#[test]
fn first_exit_acknowledgement_keeps_alert() {
    let mut manager = manager(true);
    let key = manager.add(error_alert(1));
    deliver(&mut manager, AlertMessage::Tick);

    deliver(
        &mut manager,
        AlertMessage::AnimationFrame {
            channel: Channel::Height,
            key,
            frame: frame(1_000),
        },
    );
    assert_eq!(manager.store().remove_ack_count(key), Some(1));
    assert!(manager.store().contains(key));
}

#[test]
fn keys_strictly_increase_and_are_never_reused() {
    let mut manager = manager(true);
    let mut last: Option<AlertKey> = None;

    for round in 0..5 {
        for kind in AlertKind::ALL {
            let key = manager.add(Alert::new(kind, format!("{round}")));
            if let Some(previous) = last {
                assert!(key > previous);
            }
            last = Some(key);
        }
        match round % 3 {
            0 => {
                manager.handle_message(AlertMessage::ClearAll);
            }
            1 => {
                manager.handle_message(AlertMessage::ForceClearAll);
            }
            _ => {
                let key = manager.store().keys().next().unwrap();
                manager.handle_message(AlertMessage::RemoveAlert(key));
            }
        }
    }
}

#[test]
fn force_clear_all_empties_store_and_keeps_setting() {
    for animations in [true, false] {
        let mut manager = manager(animations);
        for kind in AlertKind::ALL {
            manager.add(Alert::new(kind, "x"));
        }
        deliver(&mut manager, AlertMessage::Tick);

        manager.handle_message(AlertMessage::ForceClearAll);
        assert!(manager.store().is_empty());
        assert_eq!(manager.store().animations_enabled(), animations);
        assert!(manager.store().is_consistent());
    }
}

#[test]
fn clear_all_leaves_loading_alerts_untouched() {
    let mut manager = manager(true);
    manager.add(Alert::info("a"));
    let loading = manager.add(Alert::loading("b"));
    manager.add(Alert::warning("c"));
    manager.handle_message(AlertMessage::SpinnerPulse);
    manager.animation_frame(Channel::Height, loading, frame(100));

    let alert_before = manager.store().get(loading).cloned();
    let spinner_before = manager.store().spinner(loading).copied();
    let height_before = manager.store().animation(Channel::Height, loading).cloned();

    manager.handle_message(AlertMessage::ClearAll);

    assert_eq!(manager.store().len(), 1);
    assert_eq!(manager.store().get(loading).cloned(), alert_before);
    assert_eq!(manager.store().spinner(loading).copied(), spinner_before);
    assert_eq!(
        manager.store().animation(Channel::Height, loading).cloned(),
        height_before
    );
}

#[test]
fn third_hide_after_purge_is_a_noop() {
    let mut manager = manager(true);
    let key = manager.add(error_alert(1));
    manager.tick();
    manager.hide(key);
    manager.hide(key);

    assert!(manager.handle_message(AlertMessage::Hide(key)).is_empty());
    assert!(manager.store().is_empty());
    assert!(manager.store().remove_ack_count(key).is_none());
    assert!(manager.store().is_consistent());
}

#[test]
fn stale_messages_after_purge_change_nothing() {
    let mut manager = manager(true);
    let key = manager.add(Alert::loading("busy"));
    manager.handle_message(AlertMessage::ForceClearAll);

    let stale = [
        AlertMessage::AnimationFrame {
            channel: Channel::Opacity,
            key,
            frame: frame(16),
        },
        AlertMessage::SpinnerTick(key, iced_alerts::spinner::Message::Tick),
        AlertMessage::Hide(key),
        AlertMessage::RemoveAlert(key),
    ];
    for message in stale {
        assert!(manager.handle_message(message).is_empty());
    }
    assert!(manager.store().is_empty());
    assert!(manager.store().is_consistent());
}

#[test]
fn channel_maps_share_keys_through_a_busy_session() {
    let mut manager = manager(true);
    let start = std::time::Instant::now();

    for step in 0u64..60 {
        if step % 4 == 0 {
            let kind = AlertKind::ALL[(step as usize / 4) % AlertKind::ALL.len()];
            manager.add(Alert::new(kind, "busy").with_countdown(Countdown::Ticks(3)));
        }
        if step % 7 == 0 {
            let oldest = manager.store().keys().next();
            if let Some(key) = oldest {
                deliver(&mut manager, AlertMessage::RemoveAlert(key));
            }
        }
        deliver(&mut manager, AlertMessage::Tick);
        deliver(
            &mut manager,
            AlertMessage::Animate(start + Duration::from_millis(step * 50)),
        );
        deliver(&mut manager, AlertMessage::SpinnerPulse);

        let store = manager.store();
        let opacity: Vec<_> = store.animations(Channel::Opacity).keys().collect();
        let height: Vec<_> = store.animations(Channel::Height).keys().collect();
        let padding: Vec<_> = store.animations(Channel::Padding).keys().collect();
        assert_eq!(opacity, height);
        assert_eq!(height, padding);
        assert!(store.is_consistent());
    }
}

#[test]
fn alert_lifetime_follows_tick_count_end_to_end() {
    let mut manager = manager(true);
    let key = manager.add(Alert::success("saved").with_countdown(Countdown::Ticks(3)));
    let start = std::time::Instant::now();

    deliver(&mut manager, AlertMessage::Animate(start));
    deliver(
        &mut manager,
        AlertMessage::Animate(start + Duration::from_millis(500)),
    );
    assert_eq!(manager.phase(key), Some(Phase::Visible));

    for _ in 0..3 {
        deliver(&mut manager, AlertMessage::Tick);
    }
    assert_eq!(manager.phase(key), Some(Phase::Exiting));

    deliver(
        &mut manager,
        AlertMessage::Animate(start + Duration::from_millis(600)),
    );
    let effects = deliver(
        &mut manager,
        AlertMessage::Animate(start + Duration::from_millis(1_200)),
    );
    assert!(effects.contains(&Effect::Purged(key)));
    assert!(manager.phase(key).is_none());
}
