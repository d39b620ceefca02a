use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use super::{Entity, Insertable, Scalar, Table};
use crate::error::Result;
use crate::validation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Product {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Decimal kept as the backend's literal text.
    pub price: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<String>,
}

impl Entity for Product {
    const TABLE: Table = Table::Products;
    const FIELDS: &'static [(&'static str, Scalar)] = &[
        ("id", Scalar::Text),
        ("name", Scalar::Text),
        ("price", Scalar::Text),
        ("description", Scalar::Text),
        ("image_url", Scalar::Text),
        ("category_id", Scalar::Text),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Warehouse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
}

impl Entity for Warehouse {
    const TABLE: Table = Table::Warehouses;
    const FIELDS: &'static [(&'static str, Scalar)] = &[
        ("id", Scalar::Text),
        ("name", Scalar::Text),
        ("address", Scalar::Text),
        ("phone", Scalar::Text),
        ("description", Scalar::Text),
        ("working_hours", Scalar::Text),
    ];
}

#[derive(Debug, Clone, Serialize)]
pub struct NewWarehouse {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub working_hours: String,
}

impl Insertable for NewWarehouse {
    const TABLE: Table = Table::Warehouses;

    fn validate(&self) -> Result<()> {
        validation::validate_required("name", &self.name)?;
        validation::validate_required("address", &self.address)?;
        validation::validate_optional("phone", self.phone.as_deref())?;
        validation::validate_optional("description", self.description.as_deref())?;
        validation::validate_required("working_hours", &self.working_hours)
    }
}
