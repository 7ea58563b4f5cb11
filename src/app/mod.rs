// SPDX-License-Identifier: MPL-2.0
//! Demo host application for the alert widget.
//!
//! The `App` embeds an alert `Manager`, exposes one button per alert kind, a
//! countdown input, and the clear commands. Effects returned by the manager
//! are fed back through the Iced task queue so that exit acknowledgements are
//! processed as separate update steps.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::alert::{Alert, AlertKind, AlertMessage, AlertView, Countdown, Effect, Manager};
use crate::config::{self, Config, TickInterval};
use crate::i18n::fluent::I18n;
use crate::ui::alert_view;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, text_input, toggler, Column, Container, Row, Stack, Text};
use fluent_bundle::FluentValue;
use iced::{window, Element, Length, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    alerts: Manager,
    /// Descriptors of the current alerts, refreshed after every update.
    views: Vec<AlertView>,
    duration_input: String,
    show_icon: bool,
    i18n: I18n,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let config = config::load().unwrap_or_else(|err| {
        log::warn!("Using default settings: {err}");
        Config::default()
    });

    let boot = move || (App::new(&config, &flags), Task::none());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state from the saved config and command-line flags.
    #[must_use]
    pub fn new(config: &Config, flags: &Flags) -> Self {
        let animations = config.animations_enabled() && !flags.no_animations;
        let tick_interval = flags
            .tick_ms
            .map_or_else(|| config.tick_interval(), TickInterval::new);

        log::info!(
            "Starting alert demo (animations: {animations}, tick: {} ms)",
            tick_interval.value()
        );

        Self {
            alerts: Manager::new(animations, tick_interval),
            views: Vec::new(),
            duration_input: String::new(),
            show_icon: config.show_icon(),
            i18n: I18n::new(flags.lang.clone(), config),
        }
    }

    #[must_use]
    pub fn alerts(&self) -> &Manager {
        &self.alerts
    }

    fn title(&self) -> String {
        match self.alerts.store().len() {
            0 => self.i18n.tr("window-title"),
            n => self
                .i18n
                .tr_with_args("window-title-count", &[("count", FluentValue::from(n))]),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_alert_subscription(&self.alerts)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Alerts(alert_message) => self.forward(alert_message),
            Message::Add(kind) => self.add(kind),
            Message::DurationChanged(value) => {
                self.duration_input = value;
                Task::none()
            }
            Message::ShowIconToggled(show_icon) => {
                self.show_icon = show_icon;
                Task::none()
            }
        };

        self.views = self.alerts.view();
        task
    }

    /// Applies an alert message and queues the follow-up messages it posts.
    fn forward(&mut self, message: AlertMessage) -> Task<Message> {
        let effects = self.alerts.handle_message(message);
        Task::batch(
            effects
                .into_iter()
                .filter_map(Effect::into_message)
                .map(|follow_up| Task::done(Message::Alerts(follow_up))),
        )
    }

    /// Adds an alert of `kind`. An unparsable countdown is reported as an
    /// error alert instead.
    fn add(&mut self, kind: AlertKind) -> Task<Message> {
        let interval = self.alerts.tick_interval();
        let message = self.i18n.tr(sample_message_key(kind));

        let alert = if self.duration_input.trim().is_empty() {
            Alert::new(kind, message)
        } else {
            match Countdown::parse_seconds(&self.duration_input, interval) {
                Ok(countdown) => Alert::new(kind, message).with_countdown(countdown),
                Err(err) => {
                    log::warn!("Rejected countdown input: {err}");
                    Alert::error(self.i18n.error_message(&err))
                        .with_countdown(AlertKind::Warning.default_countdown(interval))
                }
            }
        };

        self.forward(AlertMessage::AddAlert(alert.with_icon(self.show_icon)))
    }

    fn view(&self) -> Element<'_, Message> {
        let add_buttons = AlertKind::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, kind| {
                row.push(
                    button(text(self.i18n.tr(kind_label_key(*kind))))
                        .on_press(Message::Add(*kind)),
                )
            },
        );

        let placeholder = self.i18n.tr("countdown-placeholder");
        let countdown = text_input(&placeholder, &self.duration_input)
            .on_input(Message::DurationChanged)
            .width(Length::Fixed(260.0));

        let clear_buttons = Row::new()
            .spacing(spacing::XS)
            .push(
                button(text(self.i18n.tr("button-clear")))
                    .on_press(Message::Alerts(AlertMessage::ClearAll)),
            )
            .push(
                button(text(self.i18n.tr("button-force-clear")))
                    .on_press(Message::Alerts(AlertMessage::ForceClearAll)),
            );

        let controls = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(add_buttons)
            .push(countdown)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(iced::Alignment::Center)
                    .push(Text::new(self.i18n.tr("toggle-dismiss-button")).size(typography::BODY))
                    .push(toggler(self.show_icon).on_toggle(Message::ShowIconToggled)),
            )
            .push(clear_buttons);

        Stack::new()
            .push(
                Container::new(controls)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(alert_view::view_overlay(&self.views).map(Message::Alerts))
            .into()
    }
}

fn kind_label_key(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "kind-info",
        AlertKind::Success => "kind-success",
        AlertKind::Warning => "kind-warning",
        AlertKind::Error => "kind-error",
        AlertKind::Loading => "kind-loading",
    }
}

fn sample_message_key(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "sample-info",
        AlertKind::Success => "sample-success",
        AlertKind::Warning => "sample-warning",
        AlertKind::Error => "sample-error",
        AlertKind::Loading => "sample-loading",
    }
}
