use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The request body failed validation.
    #[error("{0}")]
    Form(String),
    /// A value violated a domain constraint.
    #[error("{0}")]
    TypeConstraint(String),
    /// The store failed; carries the underlying failure text.
    #[error("{0}")]
    Internal(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
