//! Data source adapters for the remote table backend.
//!
//! The graph never talks to a database directly. Every read and insert goes
//! through a [`DataSource`], which speaks in whole rows of one table:
//!
//! | call | meaning |
//! |------|---------|
//! | `select(table, None)` | every row, backend order |
//! | `select(table, Some(filter))` | rows where `column == value` |
//! | `select_single(table, filter)` | exactly one row, otherwise an error |
//! | `insert(table, row)` | insert and return the stored row |
//!
//! ## Components
//!
//! - [`RestSource`]: PostgREST over HTTP (the Supabase REST API)
//! - [`MemorySource`]: in-process tables seeded from a JSON fixture
//! - [`Backend`]: the pair of sources (anon and service credentials) handed
//!   to every resolver

mod memory;
mod rest;
mod source;

pub use memory::MemorySource;
pub use rest::RestSource;
pub use source::{Backend, DataSource, Filter};
