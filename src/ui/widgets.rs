//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import from `crate::app`; they take generic Message
//! types and plain data.

pub mod image_card;

pub use image_card::CardImage;
pub use image_card::view as image_card;
