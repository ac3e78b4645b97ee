use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag};
use crate::domain::types::{TagName, TypeConstraintError};

/// Diesel model representing the `tags` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Tag`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag<'a> {
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Tag> for DomainTag {
    type Error = TypeConstraintError;

    fn try_from(tag: Tag) -> Result<Self, Self::Error> {
        Ok(Self {
            id: tag.id.try_into()?,
            name: TagName::new(tag.name)?,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewTag> for NewTag<'a> {
    fn from(tag: &'a DomainNewTag) -> Self {
        Self {
            name: tag.name.as_str(),
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}
