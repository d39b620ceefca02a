//! GraphQL schema, resolvers and HTTP surface for the shop dataset.
//!
//! Every root field is a passthrough to one backend table. Reads and inserts
//! that fail at the backend are logged and resolve to `null` / `[]`; the
//! relational fields on `Order` return their failures as field errors.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (GraphiQL at http://localhost:4000/graphql)
//! shopgraph serve --port 4000
//!
//! # Execute a query from the CLI
//! shopgraph query '{ orders { id total_price items { product_id quantity } } }'
//!
//! # Execute a mutation from the CLI
//! shopgraph mutate 'addOrderItem(order_id: "o1", product_id: "p1", quantity: 3, price: "19.99") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `product(s)`, `user(s)`, `warehouse(s)`, `orderStatus(es)`, `order(s)`
//! - **Mutations**: `createUser`, `createWarehouse`, `createOrder`, `addOrderItem`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, ShopSchema, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server, serve};
pub use types::*;
