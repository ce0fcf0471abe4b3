use crate::domain::shared::value_objects::Price;

/// A delivery method offered for a destination country.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryOption {
    pub method: String,
    pub cost: Price,
    pub eta: String,
}
