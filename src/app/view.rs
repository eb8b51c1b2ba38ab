//! Application view rendering

use iced::widget::{Space, column, container, scrollable, stack, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::i18n::Key;
use crate::ui::components::{gallery_grid, header, lightbox, song_picker};
use crate::ui::effects::petals;
use crate::ui::theme;

impl App {
    /// Build the main window
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let controller = &self.library.controller;
        let window = self.ui.window_size;

        let position = self
            .core
            .audio_handle()
            .and_then(|handle| handle.position_for(controller.generation()));
        let pulse = self.ui.now_playing_pulse.value(self.ui.elapsed());

        let page = column![
            header::view(controller, position, pulse, locale),
            container(gallery_grid::view(
                &self.library.gallery,
                &self.ui.card_hover,
                window.width,
                locale,
            ))
            .width(Fill)
            .max_width(gallery_grid::MAX_GRID_WIDTH)
            .padding([0.0, gallery_grid::side_padding(window.width)]),
            Space::new().height(48),
            self.footer(),
        ]
        .width(Fill)
        .align_x(Alignment::Center);

        let content = scrollable(page)
            .width(Fill)
            .height(Fill)
            .style(theme::scrollbar);

        let mut layers = stack![
            petals::view(&self.ui.particles, self.ui.elapsed()),
            content,
        ]
        .width(Fill)
        .height(Fill);

        // Open lightboxes in card order, so the last one is on top
        for (index, card) in self.library.gallery.cards().iter().enumerate() {
            if card.is_open() {
                layers = layers.push(lightbox::view(index, card, window, locale));
            }
        }

        if controller.is_picker_open() {
            layers = layers.push(song_picker::view(controller, window, locale));
        }

        container(layers)
            .width(Fill)
            .height(Fill)
            .style(theme::page)
            .into()
    }

    fn footer(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let year = chrono::Local::now().format("%Y");

        container(
            column![
                text(format!("© {} {}", year, locale.get(Key::FooterTitle))).size(14),
                text(locale.get(Key::FooterCredit))
                    .size(12)
                    .color(theme::TEXT_MUTED),
            ]
            .spacing(4)
            .align_x(Alignment::Center),
        )
        .width(Fill)
        .padding(24)
        .center_x(Fill)
        .style(theme::footer)
        .into()
    }
}
