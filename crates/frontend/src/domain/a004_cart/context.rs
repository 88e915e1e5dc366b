use contracts::domain::a003_product::aggregate::ProductId;
use leptos::prelude::*;

use super::model::{Cart, CartChange, CartLineItem, CartProduct};

/// Reactive cart shared by the storefront, provided once by the root component
#[derive(Clone, Copy)]
pub struct CartContext {
    state: RwSignal<Cart>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(Cart::default()),
        }
    }

    pub fn add_item(&self, product: CartProduct, delta: i64) -> CartChange {
        let id = product.id;
        let mut change = CartChange::Ignored;
        self.state.update(|cart| change = cart.add_item(product, delta));
        log::info!("cart: product {} {:?}", id, change);
        change
    }

    pub fn remove_item(&self, id: ProductId) {
        let mut removed = false;
        self.state.update(|cart| removed = cart.remove_item(id));
        if removed {
            log::info!("cart: product {} removed", id);
        }
    }

    pub fn clear(&self) {
        self.state.update(Cart::clear);
    }

    pub fn items(&self) -> Vec<CartLineItem> {
        self.state.with(|cart| cart.items().to_vec())
    }

    pub fn line(&self, id: ProductId) -> Option<CartLineItem> {
        self.state.with(|cart| cart.line(id).cloned())
    }

    pub fn total_quantity(&self) -> u32 {
        self.state.with(Cart::total_quantity)
    }

    pub fn total(&self) -> f64 {
        self.state.with(Cart::total)
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found in component tree")
}
