use crate::catalog::model::FEATURED_HEADING;
use crate::catalog::{FetchTicket, Product};
use crate::ui::mvi::UiState;

/// What the grid shows once no request is outstanding.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Listing {
    /// Nothing has loaded yet.
    #[default]
    Blank,
    Empty,
    Content(Vec<Product>),
}

impl Listing {
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Content(products) => products,
            Self::Blank | Self::Empty => &[],
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn into_view(self) -> ViewState {
        match self {
            Self::Blank => ViewState::Blank,
            Self::Empty => ViewState::Empty,
            Self::Content(products) => ViewState::Content(products),
        }
    }
}

/// The product area of the screen.
///
/// `Loading` and `Error` keep the listing that was on screen when the
/// request went out, so a failed request leaves the list untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Blank,
    Loading { behind: Listing },
    Empty,
    Content(Vec<Product>),
    Error { message: String, behind: Listing },
}

impl ViewState {
    /// Products currently drawn in the grid.
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Content(products) => products,
            Self::Loading { behind } | Self::Error { behind, .. } => behind.products(),
            Self::Blank | Self::Empty => &[],
        }
    }

    /// True while the "no products" message is the settled display.
    pub fn is_empty_state(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Loading { behind } | Self::Error { behind, .. } => behind.is_empty_state(),
            Self::Blank | Self::Content(_) => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Strips any in-flight or error decoration.
    pub fn into_listing(self) -> Listing {
        match self {
            Self::Blank => Listing::Blank,
            Self::Empty => Listing::Empty,
            Self::Content(products) => Listing::Content(products),
            Self::Loading { behind } | Self::Error { behind, .. } => behind,
        }
    }

    pub(super) fn settle(listing: Listing) -> Self {
        listing.into_view()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Picker labels, sentinel first. Empty until categories arrive.
    pub categories: Vec<String>,
    pub selected: usize,
    pub heading: String,
    pub view: ViewState,
    pub pending_categories: Option<FetchTicket>,
    pub pending_products: Option<FetchTicket>,
    /// Index of the highlighted product card.
    pub cursor: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            selected: 0,
            heading: FEATURED_HEADING.to_string(),
            view: ViewState::default(),
            pending_categories: None,
            pending_products: None,
            cursor: 0,
        }
    }
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn products(&self) -> &[Product] {
        self.view.products()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products().get(self.cursor)
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.categories.get(self.selected).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("p{id}"),
            price: 1.0,
            description: String::new(),
            category: "c".into(),
            image: String::new(),
        }
    }

    #[test]
    fn default_is_blank_with_featured_heading() {
        let state = CatalogState::default();
        assert_eq!(state.view, ViewState::Blank);
        assert_eq!(state.heading, "Exclusive Offer");
        assert!(state.products().is_empty());
        assert!(!state.view.is_empty_state());
    }

    #[test]
    fn loading_exposes_the_listing_behind_it() {
        let view = ViewState::Loading {
            behind: Listing::Content(vec![product(1)]),
        };
        assert!(view.is_loading());
        assert_eq!(view.products().len(), 1);
        assert!(!view.is_empty_state());
    }

    #[test]
    fn error_keeps_empty_flag_of_listing_behind() {
        let view = ViewState::Error {
            message: "boom".into(),
            behind: Listing::Empty,
        };
        assert!(view.is_empty_state());
        assert_eq!(view.error_message(), Some("boom"));
        assert_eq!(view.into_listing(), Listing::Empty);
    }
}
