use serde::{Deserialize, Serialize};

use crate::domain::types::{AuthorId, AuthorImageUrl, AuthorName};

/// Byline attached to articles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
    pub image: AuthorImageUrl,
    /// Free-form biography, empty when not provided.
    pub description: String,
}

/// Data required to insert a new [`Author`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAuthor {
    pub name: AuthorName,
    pub image: AuthorImageUrl,
    pub description: String,
}

impl From<Author> for NewAuthor {
    fn from(author: Author) -> Self {
        Self {
            name: author.name,
            image: author.image,
            description: author.description,
        }
    }
}

/// Partial update of an [`Author`]; `None` leaves the stored value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorPatch {
    pub name: Option<AuthorName>,
    pub image: Option<AuthorImageUrl>,
    pub description: Option<String>,
}

impl AuthorPatch {
    pub fn apply(self, current: Author) -> NewAuthor {
        NewAuthor {
            name: self.name.unwrap_or(current.name),
            image: self.image.unwrap_or(current.image),
            description: self.description.unwrap_or(current.description),
        }
    }
}
