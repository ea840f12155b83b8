use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A record-level rule rejected the write; the message is user-facing.
    #[error("{0}")]
    Invariant(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
