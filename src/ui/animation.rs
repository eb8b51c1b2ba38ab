//! Animation helpers built on `iced_anim`
//!
//! - `HoverAnimations`: eased hover progress for gallery cards
//! - `Pulse`: the now-playing glow

mod hover;

pub use hover::{HoverAnimations, Pulse};
