use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Open { product: Product },
    /// Close button or Escape.
    Close,
    /// Add button. The caller posts the cart notice; the dialog just closes.
    AddToCart,
}

impl Intent for DetailIntent {}
