use chrono::NaiveDate;

use crate::domain::shared::value_objects::{OrderId, Price, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// A placed order. The mock dataset keys orders by the buying user and the
/// destination country.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product: String,
    pub status: OrderStatus,
    pub amount: Price,
    pub placed_on: NaiveDate,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_round_trip_status_through_display() {
        for status in [OrderStatus::Pending, OrderStatus::Delivered] {
            assert_eq!(OrderStatus::from_str(&status.to_string()), Ok(status));
        }
    }

    #[test]
    fn should_reject_unknown_status() {
        assert!(OrderStatus::from_str("Shipped").is_err());
    }
}
