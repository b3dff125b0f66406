use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid WHERE clause: {0}")]
    InvalidWhere(String),

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}
