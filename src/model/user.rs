use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use super::{Entity, Insertable, Scalar, Table};
use crate::error::Result;
use crate::validation;

/// A customer or staff account.
///
/// The stored password hash is write-only and never decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct User {
    pub id: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub registration_date: Option<String>,
    pub last_login: Option<String>,
    pub address: Option<String>,
    pub balance: Option<String>,
}

impl Entity for User {
    const TABLE: Table = Table::Users;
    const FIELDS: &'static [(&'static str, Scalar)] = &[
        ("id", Scalar::Text),
        ("last_name", Scalar::Text),
        ("first_name", Scalar::Text),
        ("middle_name", Scalar::Text),
        ("email", Scalar::Text),
        ("phone", Scalar::Text),
        ("role", Scalar::Text),
        ("registration_date", Scalar::Text),
        ("last_login", Scalar::Text),
        ("address", Scalar::Text),
        ("balance", Scalar::Text),
    ];
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub last_name: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: String,
}

impl Insertable for NewUser {
    const TABLE: Table = Table::Users;

    fn validate(&self) -> Result<()> {
        validation::validate_required("last_name", &self.last_name)?;
        validation::validate_required("first_name", &self.first_name)?;
        validation::validate_optional("middle_name", self.middle_name.as_deref())?;
        validation::validate_email(&self.email)?;
        validation::validate_required("phone", &self.phone)?;
        validation::validate_required("password_hash", &self.password_hash)?;
        validation::validate_required("role", &self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_password_hash_is_not_decoded() {
        let record = json!({"id": "u1", "email": "a@b.c", "password_hash": "secret"});
        let user = User::from_record(record.as_object().unwrap().clone()).unwrap();
        assert_eq!(user.email.as_deref(), Some("a@b.c"));
        assert!(!serde_json::to_string(&user).unwrap().contains("secret"));
    }

    #[test]
    fn test_balance_number_is_text() {
        let record = json!({"id": 7, "balance": 1250});
        let user = User::from_record(record.as_object().unwrap().clone()).unwrap();
        assert_eq!(user.id.as_deref(), Some("7"));
        assert_eq!(user.balance.as_deref(), Some("1250"));
    }
}
