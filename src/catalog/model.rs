//! Catalog records as returned by the store API.

use serde::{Deserialize, Serialize};

/// Label of the synthetic "no filter" category shown first in the picker.
pub const ALL_PRODUCTS: &str = "All Products";

/// Section heading shown while the unfiltered list is selected.
pub const FEATURED_HEADING: &str = "Exclusive Offer";

/// Currency prefix used for every rendered price.
pub const CURRENCY_PREFIX: &str = "$";

/// A catalog item. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// URL of the product picture.
    pub image: String,
}

impl Product {
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Formats a price with the currency prefix and two decimals (`19.5` -> `$19.50`).
pub fn format_price(price: f64) -> String {
    format!("{}{:.2}", CURRENCY_PREFIX, price)
}

/// Which remote listing a product request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_PRODUCTS,
            Self::Named(name) => name,
        }
    }
}

/// Category labels as displayed: the sentinel first, then the server's list
/// in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryList {
    labels: Vec<String>,
}

impl CategoryList {
    pub fn from_server(server: Vec<String>) -> Self {
        let mut labels = Vec::with_capacity(server.len() + 1);
        labels.push(ALL_PRODUCTS.to_string());
        labels.extend(server);
        Self { labels }
    }

    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }

}

/// Maps a picker index onto the request it should issue.
pub fn filter_for(labels: &[String], index: usize) -> Option<CategoryFilter> {
    if index == 0 {
        return Some(CategoryFilter::All);
    }
    labels
        .get(index)
        .map(|label| CategoryFilter::Named(label.clone()))
}

/// Heading text for the given picker index.
pub fn heading_for(labels: &[String], index: usize) -> String {
    match labels.get(index) {
        Some(label) if index > 0 => capitalize_first(label),
        _ => FEATURED_HEADING.to_string(),
    }
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
