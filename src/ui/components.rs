//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic and are the only
//! layer that imports from `crate::app`.

pub mod gallery_grid;
pub mod header;
pub mod lightbox;
pub mod song_picker;
