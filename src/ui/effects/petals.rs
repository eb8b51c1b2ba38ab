//! Falling petals, hearts and sparkles drawn behind the page
//!
//! The particle list is generated once; this program only evaluates each
//! particle's pose for the current elapsed time and paints its glyph.

use std::time::Duration;

use iced::widget::canvas::{Frame, Geometry, Program, Text};
use iced::widget::{Canvas, text};
use iced::{Color, Element, Fill, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::features::decoration::Particle;

/// Canvas program for a particle field at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct PetalField<'a> {
    particles: &'a [Particle],
    elapsed: Duration,
}

impl<'a> PetalField<'a> {
    pub fn new(particles: &'a [Particle], elapsed: Duration) -> Self {
        Self { particles, elapsed }
    }
}

impl<Message> Program<Message> for PetalField<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in self.particles {
            let Some(pose) = particle.pose(self.elapsed) else {
                continue;
            };
            if pose.opacity <= 0.0 {
                continue;
            }

            let center = Point::new(pose.x * bounds.width, pose.y * bounds.height);

            frame.with_save(|frame| {
                frame.translate(iced::Vector::new(center.x, center.y));
                frame.rotate(Radians(pose.rotation));
                frame.fill_text(Text {
                    content: particle.glyph.to_string(),
                    position: Point::ORIGIN,
                    color: Color {
                        a: pose.opacity,
                        ..Color::BLACK
                    },
                    size: iced::Pixels(pose.size),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    align_y: iced::alignment::Vertical::Center,
                    shaping: text::Shaping::Advanced,
                    ..Text::default()
                });
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size, non-interactive particle layer
pub fn view<'a, Message: 'a>(particles: &'a [Particle], elapsed: Duration) -> Element<'a, Message> {
    Canvas::new(PetalField::new(particles, elapsed))
        .width(Fill)
        .height(Fill)
        .into()
}
