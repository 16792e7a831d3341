//! Catalog screen state: category picker, heading, and the product area.

mod intent;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, Listing, ViewState};
