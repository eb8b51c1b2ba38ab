//! Gallery card handlers

use iced::Task;
use iced::widget::image;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{CardMessage, ImageState};

impl App {
    pub fn handle_gallery(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Card(index, card_message) => {
                match card_message {
                    CardMessage::Hovered(true) => self.ui.card_hover.set_hovered(Some(*index)),
                    CardMessage::Hovered(false) => self.ui.card_hover.leave(index),
                    CardMessage::Open | CardMessage::Close => {
                        tracing::debug!("{:?} card {}", card_message, index);
                        self.library.gallery.apply(*index, *card_message);
                    }
                }
                Some(Task::none())
            }

            Message::ImageLoaded(index, result) => {
                let state = match result {
                    Ok(asset) => ImageState::Loaded(image::Handle::from_bytes(asset.to_vec())),
                    Err(e) => {
                        tracing::warn!("Image {} failed to load: {}", index, e);
                        ImageState::Failed
                    }
                };
                self.library.gallery.set_image(*index, state);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Start downloading every card's image
    pub(crate) fn load_gallery_images(&self) -> Task<Message> {
        let max_bytes = self.core.config.network.max_image_bytes;
        Task::batch(
            self.library
                .gallery
                .cards()
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    Task::perform(
                        crate::app::helpers::load_image(
                            self.core.http.clone(),
                            self.core.assets.clone(),
                            card.entry.src.clone(),
                            max_bytes,
                        ),
                        move |result| Message::ImageLoaded(index, result),
                    )
                }),
        )
    }
}
