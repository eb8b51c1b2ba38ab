//! UI module for the gallery
//! Light pink aesthetic with a falling-petal backdrop
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Gallery, lightbox, picker and header
//! - **Effects** (`effects`): Canvas layers behind the content
//! - **Animation** (`animation`): Hover and pulse state

pub mod animation;
pub mod components;
pub mod effects;
pub mod theme;
pub mod widgets;
