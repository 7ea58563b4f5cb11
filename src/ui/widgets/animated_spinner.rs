// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner drawn inside loading alerts.

use crate::spinner;
use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, path, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

/// Half-circle arc rotating around a faint track.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner showing the given spinner state.
    #[must_use]
    pub fn new(color: Color, state: spinner::State) -> Self {
        Self {
            cache: Cache::default(),
            rotation: state.rotation(),
            color,
            size: sizing::ICON_MD,
        }
    }

    /// Scales the spinner colors by `alpha` so it fades with its alert.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color.a *= alpha.clamp(0.0, 1.0);
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Start and end angles of the visible arc; the arc starts at the top.
    fn arc_angles(&self) -> (f32, f32) {
        let start = self.rotation - FRAC_PI_2;
        (start, start + PI)
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - sizing::SPINNER_STROKE;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(sizing::SPINNER_STROKE)
                        .with_color(Color {
                            a: self.color.a * opacity::SPINNER_TRACK,
                            ..self.color
                        }),
                );

                let (start, end) = self.arc_angles();
                let arc = Path::new(|builder| {
                    builder.arc(path::Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(end),
                    });
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(sizing::SPINNER_STROKE)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
