pub mod app;
pub mod catalog;
pub mod detail;
pub mod events;
pub mod footer;
pub mod grid;
pub mod header;
pub mod image_view;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notice;
pub mod picker;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use runtime::run;
