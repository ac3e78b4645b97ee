pub mod article;
pub mod author;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod tag;
