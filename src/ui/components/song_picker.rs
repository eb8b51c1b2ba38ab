//! Song picker modal

use iced::mouse::Interaction;
use iced::widget::{Column, Space, button, column, container, mouse_area, opaque, scrollable, text};
use iced::{Alignment, Element, Fill, Size};

use crate::app::Message;
use crate::features::TrackController;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

const PANEL_WIDTH: f32 = 448.0;

/// Build the picker overlay listing every track
pub fn view(controller: &TrackController, window: Size, locale: Locale) -> Element<'_, Message> {
    let selected = controller.selected().map(|track| track.name.as_str());

    let title = text(locale.get(Key::PickSongTitle))
        .size(24)
        .color(theme::PINK_700)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let tracks = controller
        .tracks()
        .iter()
        .enumerate()
        .fold(Column::new().spacing(8), |list, (index, track)| {
            let active = selected == Some(track.name.as_str());
            list.push(
                button(text(&track.name).size(16))
                    .width(Fill)
                    .padding([12, 16])
                    .style(move |theme, status| theme::track_button(theme, status, active))
                    .on_press(Message::SelectTrack(index)),
            )
        });

    let close_button = button(
        text(locale.get(Key::Close))
            .width(Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
    )
    .width(Fill)
    .padding([12, 16])
    .style(theme::primary_button)
    .on_press(Message::CloseSongPicker);

    let panel_width = (window.width - 32.0).clamp(1.0, PANEL_WIDTH);
    let max_height = (window.height * 0.85).max(200.0);

    let panel = container(
        column![
            title,
            Space::new().height(16),
            scrollable(tracks).height(iced::Length::Shrink).style(theme::scrollbar),
            Space::new().height(24),
            close_button,
        ]
        .align_x(Alignment::Center),
    )
    .width(panel_width)
    .max_height(max_height)
    .padding(24)
    .style(theme::dialog);

    let panel = opaque(mouse_area(panel).interaction(Interaction::Idle));

    let backdrop = container(panel)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::backdrop);

    opaque(
        mouse_area(backdrop)
            .interaction(Interaction::Idle)
            .on_press(Message::CloseSongPicker),
    )
}
