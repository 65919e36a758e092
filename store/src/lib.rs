//! # Freelance CRM store
//!
//! Client-side state for the CRM: the gateway abstraction over the remote
//! REST API, its configuration and errors, and the [`Store`] cache that views
//! read from and mutate through.

pub mod collection;
pub mod config;
pub mod error;
pub mod gateway;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use collection::Collection;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{GatewayError, Operation, StoreError};
pub use gateway::Gateway;
pub use store::{Cached, Store, StoreState, Summary, UNKNOWN_CLIENT, UNKNOWN_PROJECT};
