use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use super::{Entity, Insertable, Scalar, Table};
use crate::error::Result;
use crate::validation;

/// Reference row describing an order's lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct OrderStatus {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Entity for OrderStatus {
    const TABLE: Table = Table::OrderStatuses;
    const FIELDS: &'static [(&'static str, Scalar)] = &[
        ("id", Scalar::Text),
        ("name", Scalar::Text),
        ("description", Scalar::Text),
    ];
}

/// One line of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct OrderItem {
    pub id: Option<String>,
    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<String>,
}

impl Entity for OrderItem {
    const TABLE: Table = Table::OrderItems;
    const FIELDS: &'static [(&'static str, Scalar)] = &[
        ("id", Scalar::Text),
        ("order_id", Scalar::Text),
        ("product_id", Scalar::Text),
        ("quantity", Scalar::Int),
        ("price", Scalar::Text),
    ];
}

/// An order header. Items and status live in their own tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Order {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub status_id: Option<String>,
    pub total_price: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub delivery_address: Option<String>,
    pub comment: Option<String>,
}

impl Entity for Order {
    const TABLE: Table = Table::Orders;
    const FIELDS: &'static [(&'static str, Scalar)] = &[
        ("id", Scalar::Text),
        ("user_id", Scalar::Text),
        ("status_id", Scalar::Text),
        ("total_price", Scalar::Text),
        ("created_at", Scalar::Text),
        ("updated_at", Scalar::Text),
        ("delivery_address", Scalar::Text),
        ("comment", Scalar::Text),
    ];
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub user_id: String,
    pub status_id: String,
    pub total_price: String,
    pub delivery_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Insertable for NewOrder {
    const TABLE: Table = Table::Orders;

    fn validate(&self) -> Result<()> {
        validation::validate_required("user_id", &self.user_id)?;
        validation::validate_required("status_id", &self.status_id)?;
        validation::validate_decimal("total_price", &self.total_price)?;
        validation::validate_required("delivery_address", &self.delivery_address)?;
        validation::validate_optional("comment", self.comment.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOrderItem {
    pub order_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub price: String,
}

impl Insertable for NewOrderItem {
    const TABLE: Table = Table::OrderItems;

    fn validate(&self) -> Result<()> {
        validation::validate_required("order_id", &self.order_id)?;
        validation::validate_required("product_id", &self.product_id)?;
        validation::validate_quantity(self.quantity)?;
        validation::validate_decimal("price", &self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: i32, price: &str) -> NewOrderItem {
        NewOrderItem {
            order_id: "o1".to_string(),
            product_id: "p1".to_string(),
            quantity,
            price: price.to_string(),
        }
    }

    #[test]
    fn test_order_item_payload_keeps_price_text() {
        let record = line(3, "19.99").to_record().unwrap();
        assert_eq!(record["price"], "19.99");
        assert_eq!(record["quantity"], 3);
    }

    #[test]
    fn test_order_item_validation() {
        assert!(line(3, "19.99").validate().is_ok());
        assert!(line(0, "19.99").validate().is_err());
        assert!(line(1, "19,99").validate().is_err());
    }

    #[test]
    fn test_new_order_requires_decimal_total() {
        let order = NewOrder {
            user_id: "u1".to_string(),
            status_id: "s1".to_string(),
            total_price: "abc".to_string(),
            delivery_address: "Somewhere 1".to_string(),
            comment: None,
        };
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_new_order_caps_comment_length() {
        let mut order = NewOrder {
            user_id: "u1".to_string(),
            status_id: "s1".to_string(),
            total_price: "10.00".to_string(),
            delivery_address: "Somewhere 1".to_string(),
            comment: Some("Ring twice".to_string()),
        };
        assert!(order.validate().is_ok());

        order.comment = Some("x".repeat(validation::MAX_TEXT_LENGTH + 1));
        let err = order.validate().unwrap_err();
        assert!(err.to_string().contains("comment"));
    }
}
