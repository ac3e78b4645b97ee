pub mod article;
pub mod author;
pub mod category;
pub mod tag;
pub mod types;
