use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product unique identifier
    pub product_id: u32,
    /// Product name
    pub name: String,
    /// Unit price in whole naira
    pub unit_price: i64,
    /// Unit price formatted for display
    pub display_price: String,
    /// Image reference
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Units in the cart
    pub quantity: u32,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.value(),
            name: item.name.clone(),
            unit_price: item.unit_price.amount(),
            display_price: item.unit_price.to_string(),
            image: item.image.clone(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart lines in insertion order
    pub items: Vec<CartItemResponse>,
    /// Sum of all quantities
    pub total_items: u32,
    /// Total cost in whole naira
    pub total_cost: i64,
    /// Total cost formatted for display
    pub display_total: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total_cost = cart.total_cost();
        Self {
            items: cart.items().iter().map(|item| item.into()).collect(),
            total_items: cart.total_item_count(),
            total_cost: total_cost.amount(),
            display_total: total_cost.to_string(),
        }
    }
}

/// Request to add one unit of a product to the cart.
#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product unique identifier
    pub product_id: u32,
}

/// Request to set the quantity of a cart line. Zero removes the line.
#[derive(Debug, Clone, Object)]
pub struct UpdateCartQuantityRequest {
    /// New quantity; 0 removes the item
    pub quantity: u32,
}
