//! In-memory REST service for blog posts, recipes and shopping-list items.
//!
//! Each collection lives in its own [`store::MemoryStore`]: an ordered list of
//! records plus a monotonic id counter. The HTTP layer maps verbs onto store
//! operations:
//!
//! ```text
//! GET    /<resource>       list    200  JSON array
//! GET    /<resource>/:id   get     200  JSON record
//! POST   /<resource>       create  201  JSON record with id
//! PUT    /<resource>/:id   update  204  (body id must match path id)
//! DELETE /<resource>/:id   delete  204
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`resources`]: Record types and the [`resources::Resource`] contract
//! - [`store`]: In-memory record storage
//! - [`api`]: HTTP handlers, routes and request observation
//! - [`server`]: Start/stop lifecycle
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod resources;
pub mod server;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
