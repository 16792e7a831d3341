//! Reducer for the catalog screen.
//!
//! Responses are matched against the ticket of the most recent request of
//! their kind. Anything else is stale and leaves the state untouched, so
//! the last-issued request wins regardless of arrival order.

use crate::catalog::model::heading_for;
use crate::catalog::CategoryList;
use crate::ui::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::{CatalogState, ViewState};

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::CategoriesRequested { ticket } => {
                state.pending_categories = Some(ticket);
                state.view = start_loading(state.view);
                state
            }

            CatalogIntent::CategoriesLoaded { ticket, categories } => {
                if state.pending_categories != Some(ticket) {
                    return state;
                }
                state.pending_categories = None;
                state.categories = CategoryList::from_server(categories).into_labels();
                state.selected = 0;
                state.heading = heading_for(&state.categories, 0);
                state
            }

            CatalogIntent::ProductsRequested { ticket } => {
                state.pending_products = Some(ticket);
                state.view = start_loading(state.view);
                state
            }

            CatalogIntent::ProductsLoaded { ticket, products } => {
                if state.pending_products != Some(ticket) {
                    return state;
                }
                state.pending_products = None;
                state.cursor = 0;
                state.view = if products.is_empty() {
                    ViewState::Empty
                } else {
                    ViewState::Content(products)
                };
                state
            }

            CatalogIntent::RequestFailed { ticket, message } => {
                if state.pending_products == Some(ticket) {
                    state.pending_products = None;
                } else if state.pending_categories == Some(ticket) {
                    state.pending_categories = None;
                } else {
                    return state;
                }
                state.view = ViewState::Error {
                    message,
                    behind: state.view.into_listing(),
                };
                state
            }

            CatalogIntent::CategorySelected { index } => {
                if index >= state.categories.len() {
                    return state;
                }
                state.selected = index;
                state.heading = heading_for(&state.categories, index);
                state
            }

            CatalogIntent::MoveCursor { delta } => {
                let len = state.products().len();
                if len == 0 {
                    state.cursor = 0;
                    return state;
                }
                let target = state.cursor as isize + delta;
                state.cursor = target.clamp(0, len as isize - 1) as usize;
                state
            }

            CatalogIntent::DismissError => {
                if matches!(state.view, ViewState::Error { .. }) {
                    state.view = ViewState::settle(state.view.into_listing());
                }
                state
            }
        }
    }
}

fn start_loading(view: ViewState) -> ViewState {
    ViewState::Loading {
        behind: view.into_listing(),
    }
}
