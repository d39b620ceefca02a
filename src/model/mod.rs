//! Data models for the shop dataset.
//!
//! Records come back from the backend as loosely typed JSON objects. Each
//! entity declares its fixed field list ([`Entity::FIELDS`]) and is decoded
//! through [`Entity::from_record`], which coerces backend values to the
//! declared scalar kind before deserializing.
//!
//! - [`Product`], [`User`], [`Warehouse`]: catalog and account records
//! - [`Order`], [`OrderItem`], [`OrderStatus`]: order records
//! - [`NewUser`], [`NewWarehouse`], [`NewOrder`], [`NewOrderItem`]: insert payloads

mod catalog;
mod entity;
mod order;
mod table;
mod user;

pub use catalog::{NewWarehouse, Product, Warehouse};
pub use entity::{Entity, Insertable, Record, Scalar};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus};
pub use table::{Access, Table};
pub use user::{NewUser, User};
