//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Header
    m.insert(Key::AppTitle, "Calyaa's Photo Gallery");
    m.insert(
        Key::AppSubtitle,
        "Made by Maul Developer to keep Calyaa's cutest photos❤️",
    );

    // Song picker
    m.insert(Key::PickSong, "Pick a Song 🎶");
    m.insert(Key::PickSongTitle, "Pick a Song");
    m.insert(Key::PauseSong, "Pause ⏸️");
    m.insert(Key::ResumeSong, "Resume ▶️");
    m.insert(Key::NowPlaying, "Now Playing:");

    // Gallery
    m.insert(Key::GalleryEmpty, "Calyaa's Gallery");
    m.insert(Key::ImageLoading, "Loading...");

    // Dialogs
    m.insert(Key::Close, "Close");

    // Footer
    m.insert(Key::FooterTitle, "Calyaa's Photo Gallery 💞");
    m.insert(Key::FooterCredit, "Made by Maul Developer");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
