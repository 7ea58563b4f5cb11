// SPDX-License-Identifier: MPL-2.0
//! Rendering of alert descriptors into Iced elements.
//!
//! Alerts are drawn as cards with a kind-colored accent border. Their opacity,
//! height and padding follow the animated style of the descriptor, and a
//! dismiss button sends [`Message::RemoveAlert`] when the alert shows one.

use crate::alert::{AlertKind, AlertMessage as Message, AlertView, AnimatedStyle};
use crate::config::{HEIGHT_VISIBLE, OPACITY_VISIBLE, PADDING_VISIBLE};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Style of an alert that is not animated.
pub const FULLY_VISIBLE: AnimatedStyle = AnimatedStyle {
    opacity: OPACITY_VISIBLE,
    height: HEIGHT_VISIBLE,
    padding: PADDING_VISIBLE,
};

/// Renders a single alert.
pub fn view(alert: &AlertView) -> Element<'_, Message> {
    let style = alert.style.unwrap_or(FULLY_VISIBLE);
    let alpha = style.opacity.clamp(0.0, 1.0);
    let accent = faded(alert.kind.color(), alpha);

    let leading: Element<'_, Message> = match alert.spinner {
        Some(state) => AnimatedSpinner::new(alert.kind.color(), state)
            .with_alpha(alpha)
            .into_element(),
        None => Text::new(kind_glyph(alert.kind))
            .size(typography::GLYPH)
            .color(accent)
            .into(),
    };

    let message = Text::new(alert.message.as_str())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, alpha)),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(leading).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if alert.show_icon {
        let dismiss = button(Text::new("×").size(typography::GLYPH))
            .on_press(Message::RemoveAlert(alert.key))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        content = content.push(dismiss);
    }

    Container::new(content)
        .width(Length::Fixed(sizing::ALERT_WIDTH))
        .height(Length::Fixed(style.height.max(0.0)))
        .padding(style.padding.max(0.0))
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(move |theme: &Theme| alert_container_style(theme, accent, alpha))
        .into()
}

/// Renders every alert, newest at the top, in the top-right corner.
pub fn view_overlay(alerts: &[AlertView]) -> Element<'_, Message> {
    if alerts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(alerts.iter().map(view))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}

/// Glyph shown in front of the message for non-loading alerts.
fn kind_glyph(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "ℹ",
        AlertKind::Success => "✔",
        AlertKind::Warning => "⚠",
        AlertKind::Error => "✖",
        AlertKind::Loading => "…",
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the alert card.
fn alert_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = faded(theme.extended_palette().background.base.color, alpha);

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let highlight = |a: f32| {
        Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    let (background, text_color, border) = match status {
        button::Status::Active => (None, base.text, iced::Border::default()),
        button::Status::Hovered => (highlight(opacity::OVERLAY_SUBTLE), base.text, rounded),
        button::Status::Pressed => (highlight(opacity::OVERLAY_MEDIUM), base.text, rounded),
        button::Status::Disabled => (
            None,
            faded(base.text, opacity::OVERLAY_MEDIUM),
            iced::Border::default(),
        ),
    };

    button::Style {
        background,
        text_color,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}
