use crate::domain::shared::value_objects::UserId;

/// A registered student or staff shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAccount {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub student_id: String,
    pub campus_role: String,
    pub city: String,
    pub country: String,
    pub avatar: Option<String>,
}

/// A registered marketplace seller.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorAccount {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub business_name: String,
    pub business_type: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub logo: Option<String>,
}

/// Tagged account variants. Customers and vendors carry different profile
/// fields; the tag replaces the one-bag-of-optionals record the storefront
/// otherwise tends to accumulate.
#[derive(Debug, Clone, PartialEq)]
pub enum Account {
    Customer(CustomerAccount),
    Vendor(VendorAccount),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Customer,
    Vendor,
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Customer => write!(f, "customer"),
            AccountKind::Vendor => write!(f, "vendor"),
        }
    }
}

impl std::str::FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(AccountKind::Customer),
            "vendor" => Ok(AccountKind::Vendor),
            _ => Err(format!("Invalid account kind: {}", s)),
        }
    }
}

impl Account {
    pub fn id(&self) -> UserId {
        match self {
            Account::Customer(customer) => customer.id,
            Account::Vendor(vendor) => vendor.id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Account::Customer(customer) => &customer.email,
            Account::Vendor(vendor) => &vendor.email,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Account::Customer(customer) => &customer.password,
            Account::Vendor(vendor) => &vendor.password,
        }
    }

    /// Customer name or vendor business name, whichever applies.
    pub fn display_name(&self) -> &str {
        match self {
            Account::Customer(customer) => &customer.name,
            Account::Vendor(vendor) => &vendor.business_name,
        }
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            Account::Customer(_) => AccountKind::Customer,
            Account::Vendor(_) => AccountKind::Vendor,
        }
    }
}
