//! Shopping cart kept in page memory.
//!
//! A line never holds a quantity below 1: any change that would get there
//! removes the line instead.

use contracts::domain::a003_product::aggregate::{Product, ProductId};

/// What the cart needs to know about a product to hold it
#[derive(Clone, Debug, PartialEq)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub img: Option<String>,
    pub price: f64,
}

impl From<&Product> for CartProduct {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            img: p.img.clone(),
            price: p.price,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub img: Option<String>,
    pub quantity: u32,
    pub price: f64,
}

impl CartLineItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    pub fn product(&self) -> CartProduct {
        CartProduct {
            id: self.product_id,
            name: self.name.clone(),
            img: self.img.clone(),
            price: self.price,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartChange {
    Inserted { quantity: u32 },
    Updated { quantity: u32 },
    Removed,
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Merges by product id: the existing quantity moves by `delta`, or a new
    /// line starts at `delta`.
    pub fn add_item(&mut self, product: CartProduct, delta: i64) -> CartChange {
        match self.items.iter().position(|i| i.product_id == product.id) {
            Some(index) => {
                let next = i64::from(self.items[index].quantity).saturating_add(delta);
                if next < 1 {
                    self.items.remove(index);
                    CartChange::Removed
                } else {
                    let quantity = u32::try_from(next).unwrap_or(u32::MAX);
                    self.items[index].quantity = quantity;
                    CartChange::Updated { quantity }
                }
            }
            None if delta >= 1 => {
                let quantity = u32::try_from(delta).unwrap_or(u32::MAX);
                self.items.push(CartLineItem {
                    product_id: product.id,
                    name: product.name,
                    img: product.img,
                    quantity,
                    price: product.price,
                });
                CartChange::Inserted { quantity }
            }
            None => CartChange::Ignored,
        }
    }

    /// Sets an existing line to `quantity`; 0 removes it. Unknown ids are ignored.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> CartChange {
        let Some(index) = self.items.iter().position(|i| i.product_id == id) else {
            return CartChange::Ignored;
        };
        if quantity == 0 {
            self.items.remove(index);
            CartChange::Removed
        } else {
            self.items[index].quantity = quantity;
            CartChange::Updated { quantity }
        }
    }

    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == id)
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line(id).map(|i| i.quantity).unwrap_or(0)
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64) -> CartProduct {
        CartProduct {
            id,
            name: format!("product {}", id),
            img: None,
            price,
        }
    }

    #[test]
    fn test_add_merges_by_id() {
        let mut cart = Cart::default();
        assert_eq!(cart.add_item(product(1, 2.0), 1), CartChange::Inserted { quantity: 1 });
        assert_eq!(cart.add_item(product(1, 2.0), 2), CartChange::Updated { quantity: 3 });
        assert_eq!(cart.add_item(product(2, 5.0), 1), CartChange::Inserted { quantity: 1 });
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.total(), 11.0);
    }

    #[test]
    fn test_quantity_follows_delta_or_removes() {
        for start in 1..=4_i64 {
            for delta in -5..=5_i64 {
                let mut cart = Cart::default();
                cart.add_item(product(7, 1.5), start);
                let change = cart.add_item(product(7, 1.5), delta);

                if start + delta < 1 {
                    assert_eq!(change, CartChange::Removed);
                    assert!(cart.line(7).is_none());
                } else {
                    assert_eq!(cart.quantity_of(7), (start + delta) as u32);
                }
            }
        }
    }

    #[test]
    fn test_non_positive_delta_never_inserts() {
        let mut cart = Cart::default();
        assert_eq!(cart.add_item(product(1, 2.0), 0), CartChange::Ignored);
        assert_eq!(cart.add_item(product(1, 2.0), -3), CartChange::Ignored);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_tracks_quantity() {
        let mut cart = Cart::default();
        cart.add_item(product(3, 2.5), 2);
        assert_eq!(cart.line(3).map(CartLineItem::subtotal), Some(5.0));
        cart.add_item(product(3, 2.5), 1);
        assert_eq!(cart.line(3).map(CartLineItem::subtotal), Some(7.5));
    }

    #[test]
    fn test_remove_is_independent_of_quantity() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 1.0), 10);
        cart.add_item(product(2, 1.0), 1);
        assert!(cart.remove_item(1));
        assert!(!cart.remove_item(1));
        assert_eq!(cart.items().iter().map(|i| i.product_id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::default();
        cart.add_item(product(1, 4.0), 1);
        assert_eq!(cart.set_quantity(1, 5), CartChange::Updated { quantity: 5 });
        assert_eq!(cart.total(), 20.0);
        assert_eq!(cart.set_quantity(2, 3), CartChange::Ignored);
        assert_eq!(cart.set_quantity(1, 0), CartChange::Removed);
        assert!(cart.is_empty());
    }
}
