//! Store API access: product records, the HTTP client, and the background
//! worker that runs requests off the UI thread.

pub mod client;
pub mod error;
pub mod model;
pub mod request;
pub mod worker;

pub use client::{CatalogApi, StoreClient};
pub use error::{CatalogError, Resource};
pub use model::{format_price, CategoryFilter, CategoryList, Product, ALL_PRODUCTS};
pub use request::{FetchCommand, FetchOutcome, FetchTicket, TicketCounter};
pub use worker::{CatalogWorker, FetchSender};
