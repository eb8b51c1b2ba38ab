//! Built-in gallery and soundtrack catalog
//!
//! The photos and tracks are fixed at startup. A configuration file may
//! replace either list, but nothing mutates them afterwards.

use serde::Deserialize;

/// One photo shown in the gallery grid
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageEntry {
    pub id: u32,
    /// Remote image URL
    pub src: String,
    /// Caption, also shown when the image cannot be displayed
    pub alt: String,
}

impl ImageEntry {
    pub fn new(id: u32, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id,
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// A named audio asset selectable for background playback
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub name: String,
    /// Remote audio URL
    pub url: String,
}

impl Track {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

const DEFAULT_IMAGES: &[(u32, &str, &str)] = &[
    (1, "https://files.catbox.moe/fve4et.jpg", "Lucu dan Cantik 💞"),
    (2, "https://files.catbox.moe/n4q2sp.jpg", "Sangat Cantik 💞"),
    (3, "https://files.catbox.moe/uv0wrt.jpg", "Senyuman Manis 💞"),
    (4, "https://files.catbox.moe/w2dgq0.jpg", "Sangat Cantik dan Manis 💞"),
    (5, "https://files.catbox.moe/b5f6eo.jpg", "Kesukaan Maul 💞"),
    (6, "https://files.catbox.moe/vpv1nm.jpg", "Sangat Lucu 💞"),
    (8, "https://files.catbox.moe/d61okg.jpg", "Calyaa dan Kakak 💞"),
    (9, "https://files.catbox.moe/oa8jtd.jpg", "Khusus Untuk Maul 💞"),
    (10, "https://files.catbox.moe/9dcf3i.jpg", "Sangat Imyutt dan Cantik 💞"),
    (11, "https://files.catbox.moe/zyhi4a.jpg", "Lucu dan Sangat Cantik 💞"),
    (12, "https://files.catbox.moe/htuv3w.jpg", "Cantik dan Mempesona 💞"),
    (13, "https://files.catbox.moe/qis9m5.jpg", "Sangat Cantik dan Iucu 💞"),
];

const DEFAULT_TRACKS: &[(&str, &str)] = &[
    ("Indahnya Calya", "https://files.catbox.moe/t65dkj.mpeg"),
    (
        "Harmonis Cinta Maul & Calya",
        "https://files.catbox.moe/b7579u.mpeg",
    ),
    ("Monolog", "https://files.catbox.moe/whuw9a.mpeg"),
    ("Wildflower", "https://files.catbox.moe/2jeqz0.mpeg"),
    ("Dj Romantik", "https://files.catbox.moe/9wjgva.mpeg"),
];

/// Built-in photo list
pub fn default_images() -> Vec<ImageEntry> {
    DEFAULT_IMAGES
        .iter()
        .map(|&(id, src, alt)| ImageEntry::new(id, src, alt))
        .collect()
}

/// Built-in soundtrack list
pub fn default_tracks() -> Vec<Track> {
    DEFAULT_TRACKS
        .iter()
        .map(|&(name, url)| Track::new(name, url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_images_have_unique_ids() {
        let images = default_images();
        assert_eq!(images.len(), 12);
        let ids: HashSet<u32> = images.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), images.len());
        assert!(!ids.contains(&7));
    }

    #[test]
    fn test_default_tracks_are_named_and_remote() {
        let tracks = default_tracks();
        assert_eq!(tracks.len(), 5);
        assert!(tracks.iter().any(|t| t.name == "Monolog"));
        assert!(tracks.iter().all(|t| t.url.starts_with("https://")));
    }
}
