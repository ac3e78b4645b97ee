use serde::Serialize;

use crate::domain::author::Author;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub author_id: i32,
    pub author_name: String,
    pub author_image: String,
    pub description: String,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        Self {
            author_id: value.id.get(),
            author_name: value.name.into_inner(),
            author_image: value.image.into_inner(),
            description: value.description,
        }
    }
}
