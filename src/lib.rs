//! # Shopgraph - a GraphQL endpoint over a remote e-commerce backend
//!
//! Shopgraph exposes products, users, warehouses, orders, order items and
//! order statuses through one GraphQL endpoint. Persistence lives in a remote
//! table backend (the Supabase REST API); every resolver is a passthrough to
//! a single table call.
//!
//! ## Features
//!
//! - **Root queries**: one-by-id and list lookups for every entity
//! - **Mutations**: create users, warehouses, orders and order lines
//! - **Lazy relations**: `Order.items` and `Order.status` are fetched only
//!   when selected
//! - **Fixtures**: run against in-memory tables loaded from JSON
//!
//! ## Quick Start
//!
//! ```bash
//! # Point at a Supabase project
//! export SUPABASE_URL=https://<project>.supabase.co
//! export SUPABASE_ANON_KEY=...
//!
//! # Serve GraphQL (and GraphiQL) on port 4000
//! shopgraph serve
//!
//! # Or try it locally without a backend
//! shopgraph query --fixture shop.json '{ products { id name price } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Environment configuration
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Entity records and insert payloads
//! - [`storage`]: Data source adapters (REST and in-memory)
//! - [`validation`]: Mutation argument validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads the listening address and backend credentials from the environment.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `ShopError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

/// Entity records for the six shop tables.
pub mod model;

/// Data source adapters.
///
/// The REST client for the remote backend and the in-memory fixture store.
pub mod storage;

/// Input validation utilities.
///
/// Checks mutation arguments before any backend call is made.
pub mod validation;

pub mod logging;
