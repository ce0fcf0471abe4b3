use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::account::model::Account;
use business::domain::session::model::Session;

/// Request to sign in with the mock credential check.
#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a signed-in account. The password never leaves the
/// domain layer; customer- and vendor-only fields are omitted when they
/// do not apply.
#[derive(Debug, Clone, Object)]
pub struct AccountResponse {
    /// Account unique identifier
    pub id: u32,
    /// "customer" or "vendor"
    pub kind: String,
    /// Customer name or vendor business name
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    /// Student registration number (customers only)
    #[oai(skip_serializing_if_is_none)]
    pub student_id: Option<String>,
    /// Campus role such as "Student" (customers only)
    #[oai(skip_serializing_if_is_none)]
    pub campus_role: Option<String>,
    /// Avatar reference (customers only)
    #[oai(skip_serializing_if_is_none)]
    pub avatar: Option<String>,
    /// Business name (vendors only)
    #[oai(skip_serializing_if_is_none)]
    pub business_name: Option<String>,
    /// Business type (vendors only)
    #[oai(skip_serializing_if_is_none)]
    pub business_type: Option<String>,
    /// Logo reference (vendors only)
    #[oai(skip_serializing_if_is_none)]
    pub logo: Option<String>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let kind = account.kind().to_string();
        match account {
            Account::Customer(customer) => Self {
                id: customer.id.value(),
                kind,
                name: customer.name,
                email: customer.email,
                phone: customer.phone,
                city: customer.city,
                country: customer.country,
                student_id: Some(customer.student_id),
                campus_role: Some(customer.campus_role),
                avatar: customer.avatar,
                business_name: None,
                business_type: None,
                logo: None,
            },
            Account::Vendor(vendor) => Self {
                id: vendor.id.value(),
                kind,
                name: vendor.business_name.clone(),
                email: vendor.email,
                phone: vendor.phone,
                city: vendor.city,
                country: vendor.country,
                student_id: None,
                campus_role: None,
                avatar: None,
                business_name: Some(vendor.business_name),
                business_type: Some(vendor.business_type),
                logo: vendor.logo,
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AccountResponse,
}

/// The active session, if any.
#[derive(Debug, Clone, Object)]
pub struct CurrentSessionResponse {
    pub authenticated: bool,
    #[oai(skip_serializing_if_is_none)]
    pub user: Option<AccountResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub started_at: Option<DateTime<Utc>>,
}

impl From<Option<Session>> for CurrentSessionResponse {
    fn from(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self {
                authenticated: true,
                user: Some(session.account.into()),
                started_at: Some(session.started_at),
            },
            None => Self {
                authenticated: false,
                user: None,
                started_at: None,
            },
        }
    }
}
