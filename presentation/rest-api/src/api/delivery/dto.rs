use poem_openapi::Object;

use business::domain::delivery::model::DeliveryOption;

#[derive(Debug, Clone, Object)]
pub struct DeliveryOptionResponse {
    /// Delivery method name
    pub method: String,
    /// Cost in whole naira; 0 for free options
    pub cost: i64,
    /// Cost formatted for display
    pub display_cost: String,
    /// Estimated delivery time
    pub eta: String,
}

impl From<DeliveryOption> for DeliveryOptionResponse {
    fn from(option: DeliveryOption) -> Self {
        Self {
            method: option.method,
            cost: option.cost.amount(),
            display_cost: option.cost.to_string(),
            eta: option.eta,
        }
    }
}
