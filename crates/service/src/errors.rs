use sea_orm::TransactionError;
use thiserror::Error;

use models::errors::ModelError;

/// Business errors surfaced by the warehouse services.
///
/// `Display` is the bare user-facing message; the HTTP layer puts it in the
/// response envelope unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    /// A record-level rule (e.g. non-negative stock) rejected the write.
    #[error("{0}")]
    Invariant(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Invariant(_) => "invariant",
            ServiceError::Db(_) => "internal",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Invariant(m) => ServiceError::Invariant(m),
            ModelError::Db(m) => ServiceError::Db(m),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

impl From<TransactionError<ServiceError>> for ServiceError {
    fn from(e: TransactionError<ServiceError>) -> Self {
        match e {
            TransactionError::Connection(db) => ServiceError::Db(db.to_string()),
            TransactionError::Transaction(inner) => inner,
        }
    }
}
