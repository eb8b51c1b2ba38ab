//! Enlarged view of a single gallery card
//!
//! Clicking the dimmed backdrop or the close button closes it. Clicks on
//! the panel itself are swallowed so they never reach the backdrop.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, image, mouse_area, opaque, text};
use iced::{Alignment, ContentFit, Element, Fill, Size};

use crate::app::Message;
use crate::features::gallery::{Card, CardMessage, ImageState};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Widest the panel gets (3xl)
const MAX_PANEL_WIDTH: f32 = 768.0;
const PANEL_PADDING: f32 = 16.0;

/// Build the lightbox overlay for the card at `index`
pub fn view<'a>(index: usize, card: &'a Card, window: Size, locale: Locale) -> Element<'a, Message> {
    let close = Message::Card(index, CardMessage::Close);

    let panel_width = (window.width - 32.0).clamp(1.0, MAX_PANEL_WIDTH);
    let inner_width = (panel_width - PANEL_PADDING * 2.0).max(1.0);
    // Leave room for caption and button under the image
    let max_image_height = (window.height * 0.8 - 64.0).max(120.0);

    let picture: Element<'a, Message> = match &card.image {
        ImageState::Loaded(handle) => image(handle.clone())
            .width(inner_width)
            .height(max_image_height)
            .content_fit(ContentFit::Contain)
            .border_radius(6.0)
            .into(),
        ImageState::Loading | ImageState::Failed => container(
            text(match card.image {
                ImageState::Loading => locale.get(Key::ImageLoading),
                _ => card.entry.alt.as_str(),
            })
            .color(theme::PINK_400),
        )
        .width(inner_width)
        .height(max_image_height.min(inner_width))
        .center_x(inner_width)
        .center_y(max_image_height.min(inner_width))
        .style(theme::image_placeholder)
        .into(),
    };

    let caption = text(&card.entry.alt)
        .color(theme::TEXT_DARK)
        .align_x(iced::alignment::Horizontal::Center)
        .width(Fill)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
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
    .padding([8, 16])
    .style(theme::primary_button)
    .on_press(close.clone());

    let panel = container(
        column![
            picture,
            Space::new().height(12),
            caption,
            Space::new().height(12),
            close_button,
        ]
        .align_x(Alignment::Center),
    )
    .width(panel_width)
    .padding(PANEL_PADDING)
    .style(theme::dialog);

    // Swallow clicks on the panel
    let panel = opaque(mouse_area(panel).interaction(Interaction::Idle));

    let backdrop = container(panel)
        .width(Fill)
        .height(Fill)
        .padding(16)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::backdrop);

    opaque(
        mouse_area(backdrop)
            .interaction(Interaction::Idle)
            .on_press(close),
    )
}
