//! Indonesian translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Header
    m.insert(Key::AppTitle, "Galeri Foto Calyaa");
    m.insert(
        Key::AppSubtitle,
        "Website ini Dibuat Oleh Maul Developer Bertujuan untuk Menyimpan Poto Lucu Calyaaa❤️",
    );

    // Song picker
    m.insert(Key::PickSong, "Pilih Lagu 🎶");
    m.insert(Key::PickSongTitle, "Pilih Lagu");
    m.insert(Key::PauseSong, "Jeda Lagu ⏸️");
    m.insert(Key::ResumeSong, "Lanjutkan ▶️");
    m.insert(Key::NowPlaying, "Sedang Memutar:");

    // Gallery
    m.insert(Key::GalleryEmpty, "Galeri Calyaa");
    m.insert(Key::ImageLoading, "Memuat...");

    // Dialogs
    m.insert(Key::Close, "Tutup");

    // Footer
    m.insert(Key::FooterTitle, "Galeri Foto Calyaa 💞");
    m.insert(Key::FooterCredit, "Di Buat Oleh Maul Developer");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
