use diesel::prelude::*;

use crate::domain::author::{Author as DomainAuthor, NewAuthor as DomainNewAuthor};
use crate::domain::types::{AuthorImageUrl, AuthorName, TypeConstraintError};

/// Diesel model representing the `authors` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::authors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: String,
}

/// Insertable/patchable form of [`Author`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::authors)]
pub struct NewAuthor<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub description: &'a str,
}

impl TryFrom<Author> for DomainAuthor {
    type Error = TypeConstraintError;

    fn try_from(author: Author) -> Result<Self, Self::Error> {
        Ok(Self {
            id: author.id.try_into()?,
            name: AuthorName::new(author.name)?,
            image: AuthorImageUrl::new(author.image)?,
            description: author.description,
        })
    }
}

impl<'a> From<&'a DomainNewAuthor> for NewAuthor<'a> {
    fn from(author: &'a DomainNewAuthor) -> Self {
        Self {
            name: author.name.as_str(),
            image: author.image.as_str(),
            description: author.description.as_str(),
        }
    }
}
