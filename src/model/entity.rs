use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::Table;
use crate::error::{Result, ShopError};

/// A row as the backend returns it.
pub type Record = serde_json::Map<String, Value>;

/// Scalar kinds a field can carry across the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Text,
    Int,
}

/// A record type backed by one remote table.
pub trait Entity: DeserializeOwned + Sized {
    const TABLE: Table;

    /// Declared fields, in schema order.
    const FIELDS: &'static [(&'static str, Scalar)];

    /// Decode a backend row, coercing each declared field to its scalar kind.
    ///
    /// Columns the entity does not declare are ignored. A value that cannot
    /// be read as its declared kind is logged and decoded as null; the rest
    /// of the row is kept.
    fn from_record(mut record: Record) -> Result<Self> {
        for (name, kind) in Self::FIELDS {
            if let Some(value) = record.get_mut(*name) {
                if let Err(e) = coerce(Self::TABLE, name, *kind, value) {
                    warn!(table = %Self::TABLE, field = *name, error = %e, "unreadable field dropped");
                    *value = Value::Null;
                }
            }
        }
        serde_json::from_value(Value::Object(record)).map_err(|e| ShopError::Decode {
            table: Self::TABLE.to_string(),
            message: e.to_string(),
        })
    }
}

/// An insert payload for one remote table.
pub trait Insertable: Serialize {
    const TABLE: Table;

    /// Reject malformed arguments before anything reaches the backend.
    fn validate(&self) -> Result<()>;

    fn to_record(&self) -> Result<Record> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ShopError::Decode {
                table: Self::TABLE.to_string(),
                message: format!("insert payload is not an object: {}", other),
            }),
        }
    }
}

fn coerce(table: Table, field: &str, kind: Scalar, value: &mut Value) -> Result<()> {
    let coerced = match (kind, &*value) {
        (_, Value::Null) => return Ok(()),
        (Scalar::Text, Value::String(_)) => return Ok(()),
        // Numbers keep serde_json's rendering so money never goes through
        // float formatting of our own.
        (Scalar::Text, Value::Number(n)) => Value::String(n.to_string()),
        (Scalar::Text, Value::Bool(b)) => Value::String(b.to_string()),
        (Scalar::Int, Value::Number(n)) => int_value(n.as_i64().or_else(|| whole(n.as_f64()))),
        (Scalar::Int, Value::String(s)) => int_value(s.trim().parse::<i64>().ok()),
        _ => Value::Null,
    };

    if coerced.is_null() {
        return Err(ShopError::Decode {
            table: table.to_string(),
            message: format!("field '{}' cannot be read as {:?}: {}", field, kind, value),
        });
    }
    *value = coerced;
    Ok(())
}

fn whole(f: Option<f64>) -> Option<i64> {
    f.filter(|f| f.fract() == 0.0 && f.abs() <= i32::MAX as f64)
        .map(|f| f as i64)
}

fn int_value(n: Option<i64>) -> Value {
    n.and_then(|n| i32::try_from(n).ok())
        .map(Value::from)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Line {
        id: Option<String>,
        quantity: Option<i32>,
        price: Option<String>,
    }

    impl Entity for Line {
        const TABLE: Table = Table::OrderItems;
        const FIELDS: &'static [(&'static str, Scalar)] = &[
            ("id", Scalar::Text),
            ("quantity", Scalar::Int),
            ("price", Scalar::Text),
        ];
    }

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_numbers_become_strings() {
        let line = Line::from_record(record(json!({"id": 42, "quantity": 3, "price": 19.99}))).unwrap();
        assert_eq!(line.id.as_deref(), Some("42"));
        assert_eq!(line.price.as_deref(), Some("19.99"));
        assert_eq!(line.quantity, Some(3));
    }

    #[test]
    fn test_string_money_is_untouched() {
        let line = Line::from_record(record(json!({"price": "19.990"}))).unwrap();
        assert_eq!(line.price.as_deref(), Some("19.990"));
    }

    #[test]
    fn test_int_from_string_and_whole_float() {
        let line = Line::from_record(record(json!({"quantity": "7"}))).unwrap();
        assert_eq!(line.quantity, Some(7));
        let line = Line::from_record(record(json!({"quantity": 2.0}))).unwrap();
        assert_eq!(line.quantity, Some(2));
    }

    #[test]
    fn test_fractional_int_is_dropped() {
        let line = Line::from_record(record(json!({"id": "i1", "quantity": 2.5}))).unwrap();
        assert_eq!(line.id.as_deref(), Some("i1"));
        assert!(line.quantity.is_none());
    }

    #[test]
    fn test_int_out_of_range_is_dropped() {
        let line = Line::from_record(record(json!({"quantity": 3_000_000_000_i64, "price": "1.00"}))).unwrap();
        assert!(line.quantity.is_none());
        assert_eq!(line.price.as_deref(), Some("1.00"));
    }

    #[test]
    fn test_object_for_text_is_dropped() {
        let line = Line::from_record(record(json!({"id": {"nested": true}, "quantity": 1}))).unwrap();
        assert!(line.id.is_none());
        assert_eq!(line.quantity, Some(1));
    }

    #[test]
    fn test_coerce_reports_field() {
        let mut value = json!(2.5);
        let err = coerce(Table::OrderItems, "quantity", Scalar::Int, &mut value).unwrap_err();
        assert!(err.to_string().contains("quantity"));
        assert_eq!(value, json!(2.5));
    }

    #[test]
    fn test_missing_and_null_fields_are_none() {
        let line = Line::from_record(record(json!({"id": null, "extra": "ignored"}))).unwrap();
        assert!(line.id.is_none());
        assert!(line.quantity.is_none());
    }
}
