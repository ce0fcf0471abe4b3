use regex::Regex;
use serde::{Deserialize, Serialize};

/// Monetary amount in whole naira.
///
/// The canonical representation is the raw integer amount; decorated
/// display strings ("₦3,500") exist only at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(i64);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceParseError {
    #[error("price.no_digits")]
    NoDigits,
    #[error("price.out_of_range")]
    OutOfRange,
}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Parses a display string by stripping the currency symbol and
    /// thousands separators ("₦1,000" -> 1000).
    ///
    /// A string without any digit is rejected rather than silently
    /// producing a bogus amount.
    pub fn parse(text: &str) -> Result<Self, PriceParseError> {
        let digits: String = Regex::new(r"[0-9]")
            .ok()
            .map(|re| re.find_iter(text).map(|m| m.as_str()).collect())
            .unwrap_or_default();

        if digits.is_empty() {
            return Err(PriceParseError::NoDigits);
        }

        let amount = digits
            .parse::<i64>()
            .map_err(|_| PriceParseError::OutOfRange)?;
        Ok(Self(amount))
    }

    /// Price of `quantity` units at this unit price.
    pub const fn times(&self, quantity: u32) -> Price {
        Price(self.0 * quantity as i64)
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, std::ops::Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "₦{}", group_thousands(self.0))
    }
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of a catalog vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorId(u32);

impl VendorId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VendorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of a registered account (customer or vendor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(u32);

impl UserId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(u32);

impl OrderId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
