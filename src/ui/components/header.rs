//! Page header: title, subtitle and the music controls

use std::time::Duration;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::TrackController;
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::utils::format_position;

/// Build the header
///
/// `position` is the elapsed time of the active source, when known.
/// `pulse` (0.0 to 1.0) animates the now-playing badge.
pub fn view(
    controller: &TrackController,
    position: Option<Duration>,
    pulse: f32,
    locale: Locale,
) -> Element<'_, Message> {
    let title = text(locale.get(Key::AppTitle))
        .size(40)
        .color(theme::PINK_600)
        .align_x(iced::alignment::Horizontal::Center)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let subtitle = text(locale.get(Key::AppSubtitle))
        .size(16)
        .color(theme::PINK_500)
        .align_x(iced::alignment::Horizontal::Center);

    let pick_button = button(text(locale.get(Key::PickSong)).font(iced::Font {
        weight: iced::font::Weight::Semibold,
        ..Default::default()
    }))
    .padding([10, 24])
    .style(theme::primary_button)
    .on_press(Message::OpenSongPicker);

    let mut controls = row![pick_button].spacing(16).align_y(Alignment::Center);

    // The toggle only exists once a track is active
    if controller.selected().is_some() {
        let (label, style): (_, fn(&iced::Theme, button::Status) -> button::Style) =
            if controller.wants_playback() {
                (locale.get(Key::PauseSong), theme::secondary_button)
            } else {
                (locale.get(Key::ResumeSong), theme::primary_button)
            };
        controls = controls.push(
            button(text(label).font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            }))
            .padding([10, 24])
            .style(style)
            .on_press(Message::TogglePlayback),
        );
    }

    let mut content = column![
        title,
        Space::new().height(8),
        subtitle,
        Space::new().height(24),
        controls,
    ]
    .width(Fill)
    .align_x(Alignment::Center);

    if let Some(track) = controller.selected() {
        let elapsed = format_position(position.unwrap_or_default());
        let badge = container(
            text(format!(
                "{} {} · {}",
                locale.get(Key::NowPlaying),
                track.name,
                elapsed
            ))
            .size(14),
        )
        .padding([6, 16])
        .style(move |theme| theme::now_playing(theme, pulse));

        content = content.push(Space::new().height(16)).push(badge);
    }

    container(content)
        .width(Fill)
        .max_width(896)
        .padding([40, 16])
        .into()
}
