//! # API Gateway
//!
//! The boundary between the store and the remote REST API. Every method
//! issues exactly one request and either returns the parsed response or the
//! failure, unchanged. Implementations log failures where they happen; there
//! are no retries, timeouts or backoff.

use async_trait::async_trait;
use serde_json::Value;
use shared::Entity;

use crate::error::GatewayError;

/// One async operation per (entity, operation) pair, selected by the type
/// parameter: `gateway.list::<Client>()`, `gateway.delete::<Invoice>(id)`.
///
/// Futures are not `Send`; the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait Gateway {
    /// `GET /api/{resource}`
    async fn list<E: Entity>(&self) -> Result<Vec<E>, GatewayError>;

    /// `GET /api/{resource}/{id}`
    async fn get<E: Entity>(&self, id: &str) -> Result<E, GatewayError>;

    /// `POST /api/{resource}`; the returned entity carries the server-assigned id
    async fn create<E: Entity>(&self, draft: &E::Draft) -> Result<E, GatewayError>;

    /// `PUT /api/{resource}/{id}`
    ///
    /// The response body is returned loosely typed. The store reconciles from
    /// the request payload and never relies on its shape.
    async fn update<E: Entity>(&self, id: &str, draft: &E::Draft) -> Result<Value, GatewayError>;

    /// `DELETE /api/{resource}/{id}`
    async fn delete<E: Entity>(&self, id: &str) -> Result<Value, GatewayError>;
}
