use std::fmt;
use std::str::FromStr;

use crate::error::ShopError;

/// Remote tables exposed through the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Products,
    Users,
    Warehouses,
    OrderStatuses,
    Orders,
    OrderItems,
}

/// Which backend credential a call runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anonymous key, subject to the backend's row-level policies.
    Public,
    /// Service-role key, bypasses row-level policies.
    Service,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::Products,
        Table::Users,
        Table::Warehouses,
        Table::OrderStatuses,
        Table::Orders,
        Table::OrderItems,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Table::Products => "products",
            Table::Users => "users",
            Table::Warehouses => "warehouses",
            Table::OrderStatuses => "order_statuses",
            Table::Orders => "orders",
            Table::OrderItems => "order_items",
        }
    }

    /// Credential used for reads. User rows are only readable with the
    /// service key.
    pub fn read_access(self) -> Access {
        match self {
            Table::Users => Access::Service,
            _ => Access::Public,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ShopError::Config(format!("Unknown table: {}", s)))
    }
}
