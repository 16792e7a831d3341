use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailDialogState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailDialogState;
    type Intent = DetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { product } => DetailDialogState::Visible { product },
            DetailIntent::Close | DetailIntent::AddToCart => DetailDialogState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn product() -> Product {
        Product {
            id: 3,
            title: "Mens Cotton Jacket".into(),
            price: 55.99,
            description: "great outerwear jackets".into(),
            category: "men's clothing".into(),
            image: "https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg".into(),
        }
    }

    #[test]
    fn open_shows_product() {
        let state = DetailReducer::reduce(
            DetailDialogState::Hidden,
            DetailIntent::Open { product: product() },
        );
        assert_eq!(state.product(), Some(&product()));
    }

    #[test]
    fn open_replaces_visible_product() {
        let mut other = product();
        other.id = 4;
        let state = DetailReducer::reduce(
            DetailDialogState::Visible { product: product() },
            DetailIntent::Open {
                product: other.clone(),
            },
        );
        assert_eq!(state.product(), Some(&other));
    }

    #[test]
    fn both_dismissal_paths_hide() {
        for intent in [DetailIntent::Close, DetailIntent::AddToCart] {
            let state =
                DetailReducer::reduce(DetailDialogState::Visible { product: product() }, intent);
            assert!(!state.is_visible());
        }
    }
}
