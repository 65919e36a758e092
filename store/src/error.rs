use shared::Entity;
use std::fmt;
use thiserror::Error;

/// The five REST operations the gateway performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// Failure of a single HTTP exchange with the remote API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to serialize request: {0}")]
    Encode(String),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Status { status: 404, .. })
    }
}

/// A store operation that failed because its gateway call failed.
/// Local state is unchanged whenever this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to {operation} {subject}: {source}")]
pub struct StoreError {
    pub operation: Operation,
    /// Resource name for list operations, singular entity name otherwise
    pub subject: &'static str,
    #[source]
    pub source: GatewayError,
}

impl StoreError {
    pub fn new<E: Entity>(operation: Operation, source: GatewayError) -> Self {
        let subject = match operation {
            Operation::List => E::RESOURCE,
            _ => E::NAME,
        };
        Self {
            operation,
            subject,
            source,
        }
    }
}
