use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::order::model::Order;

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Order unique identifier
    pub id: u32,
    /// Buying user identifier
    pub user_id: u32,
    /// Ordered product name
    pub product: String,
    /// Order status ("Pending" or "Delivered")
    pub status: String,
    /// Amount in whole naira
    pub amount: i64,
    /// Amount formatted for display
    pub display_amount: String,
    /// Date the order was placed
    pub date: NaiveDate,
    /// Destination country
    pub country: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.value(),
            user_id: order.user_id.value(),
            product: order.product,
            status: order.status.to_string(),
            amount: order.amount.amount(),
            display_amount: order.amount.to_string(),
            date: order.placed_on,
            country: order.country,
        }
    }
}
