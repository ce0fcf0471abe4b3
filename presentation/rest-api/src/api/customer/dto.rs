use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::account::model::CustomerAccount;
use business::domain::dashboard::model::{
    CustomerOrderLine, StatEntry, StatValue, WishlistEntry,
};

/// A dashboard stat tile. Counts and money amounts are both rendered to
/// their display form here, at the presentation boundary.
#[derive(Debug, Clone, Object)]
pub struct StatResponse {
    pub label: String,
    pub value: String,
}

impl From<StatEntry> for StatResponse {
    fn from(entry: StatEntry) -> Self {
        let value = match entry.value {
            StatValue::Count(count) => count.to_string(),
            StatValue::Amount(amount) => amount.to_string(),
        };
        Self {
            label: entry.label,
            value,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CustomerOrderResponse {
    pub id: u32,
    pub product: String,
    #[oai(skip_serializing_if_is_none)]
    pub product_image: Option<String>,
    pub status: String,
    pub amount: i64,
    pub display_amount: String,
    pub date: NaiveDate,
}

impl From<CustomerOrderLine> for CustomerOrderResponse {
    fn from(line: CustomerOrderLine) -> Self {
        Self {
            id: line.id.value(),
            product: line.product,
            product_image: line.product_image,
            status: line.status.to_string(),
            amount: line.amount.amount(),
            display_amount: line.amount.to_string(),
            date: line.placed_on,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistEntryResponse {
    pub product_id: u32,
    pub name: String,
    pub price: i64,
    pub display_price: String,
}

impl From<WishlistEntry> for WishlistEntryResponse {
    fn from(entry: WishlistEntry) -> Self {
        Self {
            product_id: entry.product_id.value(),
            name: entry.name,
            price: entry.price.amount(),
            display_price: entry.price.to_string(),
        }
    }
}

/// Partial profile update; absent fields keep their current value.
#[derive(Debug, Clone, Object)]
pub struct UpdateCustomerProfileRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub student_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub campus_role: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub city: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub country: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CustomerProfileResponse {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub student_id: String,
    pub campus_role: String,
    pub city: String,
    pub country: String,
    #[oai(skip_serializing_if_is_none)]
    pub avatar: Option<String>,
}

impl From<CustomerAccount> for CustomerProfileResponse {
    fn from(customer: CustomerAccount) -> Self {
        Self {
            id: customer.id.value(),
            email: customer.email,
            name: customer.name,
            phone: customer.phone,
            student_id: customer.student_id,
            campus_role: customer.campus_role,
            city: customer.city,
            country: customer.country,
            avatar: customer.avatar,
        }
    }
}
