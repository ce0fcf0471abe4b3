use chrono::{DateTime, Utc};

use crate::domain::account::model::{Account, AccountKind};

/// The active storefront session: the signed-in account plus its kind,
/// mirrored explicitly so the presentation layer can branch on it without
/// re-inspecting the account.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub account: Account,
    pub kind: AccountKind,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn open(account: Account) -> Self {
        let kind = account.kind();
        Self {
            account,
            kind,
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::model::{CustomerAccount, VendorAccount};
    use crate::domain::shared::value_objects::UserId;

    #[test]
    fn should_derive_kind_from_customer_account() {
        let session = Session::open(Account::Customer(CustomerAccount {
            id: UserId::new(1),
            email: "test@buk.edu.ng".to_string(),
            password: "password".to_string(),
            name: "Aisha Bello".to_string(),
            phone: String::new(),
            student_id: String::new(),
            campus_role: "Student".to_string(),
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
            avatar: None,
        }));
        assert_eq!(session.kind, AccountKind::Customer);
    }

    #[test]
    fn should_derive_kind_from_vendor_account() {
        let session = Session::open(Account::Vendor(VendorAccount {
            id: UserId::new(3),
            email: "vendor@glow.com".to_string(),
            password: "password".to_string(),
            business_name: "Glow Skincare".to_string(),
            business_type: "Beauty & Health".to_string(),
            phone: String::new(),
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
            logo: None,
        }));
        assert_eq!(session.kind, AccountKind::Vendor);
    }
}
