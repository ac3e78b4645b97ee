//! Serializable response shapes of the JSON API.

pub mod articles;
pub mod authors;
pub mod categories;
pub mod tags;
