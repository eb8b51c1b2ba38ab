//! Responsive grid of gallery cards

use iced::widget::{Row, Space, column, container, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::gallery::{Card, CardMessage, Gallery, ImageState};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::theme;
use crate::ui::widgets::{CardImage, image_card};

/// Widest the grid gets, matching a 7xl page
pub const MAX_GRID_WIDTH: f32 = 1280.0;

/// Column count for a window width: 2 up to 6 columns
pub fn column_count(width: f32) -> usize {
    match width {
        w if w >= 1280.0 => 6,
        w if w >= 1024.0 => 5,
        w if w >= 768.0 => 4,
        w if w >= 640.0 => 3,
        _ => 2,
    }
}

/// Gap between cards for a window width
pub fn gap(width: f32) -> f32 {
    match width {
        w if w >= 768.0 => 24.0,
        w if w >= 640.0 => 16.0,
        _ => 12.0,
    }
}

/// Horizontal page padding for a window width
pub fn side_padding(width: f32) -> f32 {
    if width >= 640.0 { 16.0 } else { 8.0 }
}

/// Card indices laid out in rows of `columns`
///
/// An empty result means the placeholder is shown instead of a grid.
pub fn grid_rows(card_count: usize, columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    (0..card_count)
        .collect::<Vec<_>>()
        .chunks(columns)
        .map(<[usize]>::to_vec)
        .collect()
}

/// Build the gallery grid for a window of `window_width`
pub fn view<'a>(
    gallery: &'a Gallery,
    hover: &HoverAnimations<usize>,
    window_width: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let columns = column_count(window_width);
    let rows_of_indices = grid_rows(gallery.len(), columns);

    if rows_of_indices.is_empty() {
        return container(
            text(locale.get(Key::GalleryEmpty))
                .size(20)
                .color(theme::PINK_500),
        )
        .width(Fill)
        .padding(48)
        .center_x(Fill)
        .into();
    }

    let spacing = gap(window_width);
    let grid_width = (window_width - side_padding(window_width) * 2.0).clamp(1.0, MAX_GRID_WIDTH);
    let cell_width = ((grid_width - spacing * (columns - 1) as f32) / columns as f32).max(1.0);

    let mut rows = column![].spacing(spacing);
    for indices in rows_of_indices {
        let mut row = Row::new().spacing(spacing);
        for &index in &indices {
            if let Some(card) = gallery.cards().get(index) {
                row = row.push(card_view(index, card, hover, cell_width, locale));
            }
        }
        // Keep a short last row aligned to the grid
        for _ in indices.len()..columns {
            row = row.push(Space::new().width(cell_width));
        }
        rows = rows.push(row);
    }

    container(rows)
        .width(Fill)
        .align_x(Alignment::Center)
        .into()
}

fn card_view<'a>(
    index: usize,
    card: &'a Card,
    hover: &HoverAnimations<usize>,
    cell_width: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let picture = match &card.image {
        ImageState::Loaded(handle) => CardImage::Ready(handle),
        ImageState::Loading => CardImage::Missing(locale.get(Key::ImageLoading)),
        ImageState::Failed => CardImage::Missing(&card.entry.alt),
    };

    image_card(
        &card.entry.alt,
        picture,
        cell_width,
        hover.progress(&index),
        Message::Card(index, CardMessage::Open),
        Message::Card(index, CardMessage::Hovered(true)),
        Message::Card(index, CardMessage::Hovered(false)),
    )
}
