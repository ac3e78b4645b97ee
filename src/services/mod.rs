use std::str::FromStr;

pub use errors::{ServiceError, ServiceResult};

pub mod articles;
pub mod authors;
pub mod categories;
pub mod errors;
pub mod tags;

/// Parse an identifier taken from the request path.
///
/// A malformed identifier cannot match any stored row, so it is reported as
/// [`ServiceError::NotFound`].
pub fn parse_path_id<T: FromStr>(raw: &str) -> ServiceResult<T> {
    raw.parse().map_err(|_| ServiceError::NotFound)
}
