use crate::catalog::{FetchTicket, Product};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A category request went out.
    CategoriesRequested { ticket: FetchTicket },
    /// Server category labels, without the sentinel.
    CategoriesLoaded {
        ticket: FetchTicket,
        categories: Vec<String>,
    },
    /// A product request went out; it supersedes any earlier one.
    ProductsRequested { ticket: FetchTicket },
    ProductsLoaded {
        ticket: FetchTicket,
        products: Vec<Product>,
    },
    /// Either request kind failed. `message` is already user-facing.
    RequestFailed { ticket: FetchTicket, message: String },
    /// Picker moved to `index`.
    CategorySelected { index: usize },
    /// Move the card highlight by `delta` positions, clamped to the list.
    MoveCursor { delta: isize },
    /// Drop the error banner and show the listing behind it.
    DismissError,
}

impl Intent for CatalogIntent {}
