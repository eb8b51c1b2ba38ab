//! Gallery image card widget
//!
//! A 9:16 cover-cropped image over a single-line caption. The card grows
//! slightly and its shadow deepens as `hover_progress` goes from 0 to 1.
//!
//! # Design
//!
//! This is a reusable widget that uses generic Message types.
//! It does not depend on application-specific types.

use iced::widget::{column, container, image, mouse_area, text};
use iced::{Alignment, ContentFit, Element, Fill, Padding};

use crate::ui::theme;

/// Height over width of the image area
const ASPECT: f32 = 16.0 / 9.0;

/// How much the card grows at full hover (scale 1.05)
const HOVER_GROWTH: f32 = 0.05;

const CAPTION_SIZE: f32 = 14.0;
const CAPTION_PADDING: f32 = 16.0;
const IMAGE_RADIUS: f32 = 12.0;

/// What to show in the image area
#[derive(Debug, Clone, Copy)]
pub enum CardImage<'a> {
    Ready(&'a image::Handle),
    /// No image; the text stands in for it
    Missing(&'a str),
}

/// Create an image card element
///
/// # Arguments
/// * `caption` - Text under the image, truncated to one line
/// * `picture` - Image handle or stand-in text
/// * `cell_width` - Width of the grid cell the card lives in
/// * `hover_progress` - Hover animation progress (0.0 to 1.0)
/// * `on_open` - Message to send when the card is clicked
/// * `on_hover` / `on_unhover` - Hover tracking messages
pub fn view<'a, Message: Clone + 'a>(
    caption: &'a str,
    picture: CardImage<'a>,
    cell_width: f32,
    hover_progress: f32,
    on_open: Message,
    on_hover: Message,
    on_unhover: Message,
) -> Element<'a, Message> {
    // Resting size leaves room to grow into the cell
    let inset = cell_width * HOVER_GROWTH / 2.0 * (1.0 - hover_progress);
    let width = (cell_width - inset * 2.0).max(1.0);
    let image_height = width * ASPECT;

    let picture: Element<'a, Message> = match picture {
        CardImage::Ready(handle) => image(handle.clone())
            .width(width)
            .height(image_height)
            .content_fit(ContentFit::Cover)
            .border_radius(iced::border::top(IMAGE_RADIUS))
            .into(),
        CardImage::Missing(label) => container(
            text(label)
                .size(CAPTION_SIZE)
                .align_x(iced::alignment::Horizontal::Center)
                .color(theme::PINK_400),
        )
        .width(width)
        .height(image_height)
        .padding(CAPTION_PADDING)
        .center_x(width)
        .center_y(image_height)
        .style(theme::image_placeholder)
        .into(),
    };

    let caption_chars = chars_that_fit(width - CAPTION_PADDING * 2.0, CAPTION_SIZE);
    let caption_color = if hover_progress > 0.5 {
        theme::PINK_500
    } else {
        theme::PINK_700
    };
    let caption = container(
        text(truncate_text(caption, caption_chars))
            .size(CAPTION_SIZE)
            .color(caption_color)
            .font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            }),
    )
    .padding(CAPTION_PADDING)
    .width(Fill);

    let card = container(column![picture, caption])
        .width(width)
        .style(move |theme| theme::card(theme, hover_progress));

    let cell = container(card)
        .padding(Padding::new(inset))
        .width(cell_width)
        .align_x(Alignment::Center);

    mouse_area(cell)
        .on_press(on_open)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

/// Rough number of characters that fit on one line
fn chars_that_fit(width: f32, size: f32) -> usize {
    ((width / (size * 0.55)).floor() as usize).max(4)
}

/// Truncate to `max_chars` characters with an ellipsis
fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated.trim_end())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Calya lucu sekali", 8), "Calya l…");
        // Counted in chars, not bytes
        assert_eq!(truncate_text("💞💞💞", 3), "💞💞💞");
        assert_eq!(truncate_text("💞💞💞💞", 3), "💞💞…");
    }

    #[test]
    fn test_chars_that_fit_has_floor() {
        assert_eq!(chars_that_fit(0.0, 14.0), 4);
        assert!(chars_that_fit(300.0, 14.0) > chars_that_fit(150.0, 14.0));
    }
}
