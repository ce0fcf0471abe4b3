use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::{Price, ProductId};

/// A (product, quantity) pairing held in the active shopping session.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub image: Option<String>,
    pub quantity: u32,
}

/// The active session's shopping cart.
///
/// Invariant: at most one item per product id; quantities are always >= 1.
/// Operations never fail and enforce no stock limits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `product`: merges into the existing line when the
    /// product is already in the cart, otherwise appends a new line with
    /// quantity 1.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity: 1,
        });
    }

    /// Sets the quantity of a line. Zero removes the line instead of
    /// keeping a zero-quantity entry; an absent product id is a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.quantity = quantity;
        }
    }

    /// Removes the matching line if present. Idempotent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total_cost(&self) -> Price {
        self.items
            .iter()
            .map(|item| item.unit_price.times(item.quantity))
            .sum()
    }
}
