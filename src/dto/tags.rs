use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::tag::Tag;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub tag_id: i32,
    pub tag_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Tag> for TagDto {
    fn from(value: Tag) -> Self {
        Self {
            tag_id: value.id.get(),
            tag_name: value.name.into_inner(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
