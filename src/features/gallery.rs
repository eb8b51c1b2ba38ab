//! Gallery cards
//!
//! Each card owns its lightbox flag. Opening or closing one card never
//! touches another card's state.

use iced::widget::image;

use super::catalog::ImageEntry;

/// Remote image load state for a card
#[derive(Debug, Clone, Default)]
pub enum ImageState {
    #[default]
    Loading,
    Loaded(image::Handle),
    /// Download or decode failed, the caption stands in for the image
    Failed,
}

/// Messages addressed to a single card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMessage {
    Open,
    Close,
    Hovered(bool),
}

/// One gallery image plus its enlarged-view toggle
#[derive(Debug, Clone)]
pub struct Card {
    pub entry: ImageEntry,
    pub image: ImageState,
    is_open: bool,
}

impl Card {
    pub fn new(entry: ImageEntry) -> Self {
        Self {
            entry,
            image: ImageState::Loading,
            is_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Ordered collection of cards
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    cards: Vec<Card>,
}

impl Gallery {
    pub fn new(entries: Vec<ImageEntry>) -> Self {
        Self {
            cards: entries.into_iter().map(Card::new).collect(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Apply a card message; hover is handled by the UI layer
    pub fn apply(&mut self, index: usize, message: CardMessage) {
        let Some(card) = self.cards.get_mut(index) else {
            tracing::warn!("Message {:?} for unknown card {}", message, index);
            return;
        };
        match message {
            CardMessage::Open => card.open(),
            CardMessage::Close => card.close(),
            CardMessage::Hovered(_) => {}
        }
    }

    /// Store the outcome of an image download
    pub fn set_image(&mut self, index: usize, state: ImageState) {
        if let Some(card) = self.cards.get_mut(index) {
            card.image = state;
        }
    }

    /// Index of the last open card, which is drawn on top
    pub fn topmost_open(&self) -> Option<usize> {
        self.cards.iter().rposition(Card::is_open)
    }

    /// Close the topmost open lightbox; returns whether one was open
    pub fn close_topmost(&mut self) -> bool {
        match self.topmost_open() {
            Some(index) => {
                self.cards[index].close();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::default_images;

    fn open_indices(gallery: &Gallery) -> Vec<usize> {
        gallery
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_open())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_opening_a_card_opens_only_that_card() {
        let count = default_images().len();
        for target in 0..count {
            let mut gallery = Gallery::new(default_images());
            gallery.apply(target, CardMessage::Open);
            assert_eq!(open_indices(&gallery), vec![target]);
        }
    }

    #[test]
    fn test_closing_one_card_leaves_others_open() {
        let mut gallery = Gallery::new(default_images());
        gallery.apply(1, CardMessage::Open);
        gallery.apply(4, CardMessage::Open);
        gallery.apply(1, CardMessage::Close);
        assert_eq!(open_indices(&gallery), vec![4]);
    }

    #[test]
    fn test_hover_does_not_open() {
        let mut gallery = Gallery::new(default_images());
        gallery.apply(0, CardMessage::Hovered(true));
        assert!(open_indices(&gallery).is_empty());
    }

    #[test]
    fn test_empty_gallery_has_no_cards() {
        let gallery = Gallery::new(Vec::new());
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
        assert_eq!(gallery.topmost_open(), None);
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut gallery = Gallery::new(default_images());
        gallery.apply(999, CardMessage::Open);
        assert!(open_indices(&gallery).is_empty());
    }

    #[test]
    fn test_close_topmost() {
        let mut gallery = Gallery::new(default_images());
        gallery.apply(2, CardMessage::Open);
        gallery.apply(5, CardMessage::Open);
        assert!(gallery.close_topmost());
        assert_eq!(open_indices(&gallery), vec![2]);
        assert!(gallery.close_topmost());
        assert!(!gallery.close_topmost());
    }

    #[test]
    fn test_failed_image_only_marks_its_card() {
        let mut gallery = Gallery::new(default_images());
        gallery.set_image(0, ImageState::Failed);
        assert!(matches!(gallery.cards()[0].image, ImageState::Failed));
        assert!(matches!(gallery.cards()[1].image, ImageState::Loading));
    }
}
