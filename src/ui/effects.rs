//! Canvas effects drawn beneath the page content

pub mod petals;
