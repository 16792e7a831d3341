//! Terminal storefront for the FakeStore REST API: categories, a product
//! grid, and a detail overlay.

pub mod catalog;
pub mod config;
pub mod images;
pub mod logging;
pub mod ui;
