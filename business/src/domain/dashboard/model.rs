use chrono::NaiveDate;

use crate::domain::order::model::OrderStatus;
use crate::domain::shared::value_objects::{OrderId, Price, ProductId};

/// A dashboard stat is either a plain count or a money amount; the mock
/// dataset mixes both under one label/value shape.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Count(u32),
    Amount(Price),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatEntry {
    pub label: String,
    pub value: StatValue,
}

/// An order as shown on the customer dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerOrderLine {
    pub id: OrderId,
    pub product: String,
    pub product_image: Option<String>,
    pub status: OrderStatus,
    pub amount: Price,
    pub placed_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
}

/// Seeded per-customer dashboard data: stats, order history, wishlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerOverview {
    pub stats: Vec<StatEntry>,
    pub orders: Vec<CustomerOrderLine>,
    pub wishlist: Vec<WishlistEntry>,
}

/// A product as shown on the vendor dashboard, with stock on hand.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorProductLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub stock: u32,
}

/// An incoming order as shown on the vendor dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorOrderLine {
    pub id: OrderId,
    pub customer: String,
    pub product: String,
    pub status: OrderStatus,
    pub amount: Price,
    pub placed_on: NaiveDate,
}

/// Seeded per-vendor dashboard data: stats, listed products, incoming orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorOverview {
    pub stats: Vec<StatEntry>,
    pub products: Vec<VendorProductLine>,
    pub orders: Vec<VendorOrderLine>,
}
