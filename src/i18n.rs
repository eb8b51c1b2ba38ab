//! Internationalization (i18n) support
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - id.rs: Indonesian translations (default)
//! - en.rs: English translations

mod en;
mod id;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Indonesian,
    English,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }

    /// Parse a language code, falling back to the default
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Indonesian, Language::English]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Header
    AppTitle,
    AppSubtitle,

    // Song picker
    PickSong,
    PickSongTitle,
    PauseSong,
    ResumeSong,
    NowPlaying,

    // Gallery
    GalleryEmpty,
    ImageLoading,

    // Dialogs
    Close,

    // Footer
    FooterTitle,
    FooterCredit,
}

impl Key {
    #[cfg(test)]
    pub fn all() -> &'static [Key] {
        &[
            Key::AppTitle,
            Key::AppSubtitle,
            Key::PickSong,
            Key::PickSongTitle,
            Key::PauseSong,
            Key::ResumeSong,
            Key::NowPlaying,
            Key::GalleryEmpty,
            Key::ImageLoading,
            Key::Close,
            Key::FooterTitle,
            Key::FooterCredit,
        ]
    }
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Indonesian => id::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_translated() {
        for lang in Language::all() {
            for key in Key::all() {
                assert_ne!(t(*lang, *key), "???", "{:?} missing {:?}", lang, key);
            }
        }
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code(" ID "), Language::Indonesian);
        assert_eq!(Language::from_code("fr"), Language::Indonesian);
    }

    #[test]
    fn test_toggle_labels_differ() {
        let locale = Locale::default();
        assert_eq!(locale.get(Key::PauseSong), "Jeda Lagu ⏸️");
        assert_eq!(locale.get(Key::ResumeSong), "Lanjutkan ▶️");
    }
}
