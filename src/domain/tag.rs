use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TagId, TagName};

/// Entry in the tag catalogue.
///
/// Articles keep their own copy of tag names, so this record is not linked to
/// any article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Tag`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTag {
    pub name: TagName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
