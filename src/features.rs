//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod catalog;
pub mod config;
pub mod decoration;
pub mod gallery;
pub mod keybindings;
pub mod playback;

pub use config::Config;
pub use gallery::{CardMessage, Gallery, ImageState};
pub use keybindings::{Action, KeyBindings};
pub use playback::{PlaybackRequest, TrackController};
