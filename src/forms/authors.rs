use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::author::{AuthorPatch, NewAuthor};
use crate::domain::types::{AuthorImageUrl, AuthorName, TypeConstraintError};
use crate::forms::non_blank;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddAuthorForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub author_name: String,
    pub author_image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddAuthorFormPayload {
    pub author: NewAuthor,
}

#[derive(Debug, Error)]
pub enum AddAuthorFormError {
    #[error("Add author form validation failed: {0}")]
    Validation(String),
    #[error("Add author form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddAuthorFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddAuthorFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddAuthorForm> for AddAuthorFormPayload {
    type Error = AddAuthorFormError;

    fn try_from(value: AddAuthorForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let image = match non_blank(value.author_image) {
            Some(image) => AuthorImageUrl::new(image)?,
            None => AuthorImageUrl::default(),
        };

        Ok(Self {
            author: NewAuthor {
                name: AuthorName::new(value.author_name)?,
                image,
                description: value.description.unwrap_or_default(),
            },
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorForm {
    #[validate(length(min = 1))]
    pub author_name: Option<String>,
    pub author_image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAuthorFormPayload {
    pub patch: AuthorPatch,
}

#[derive(Debug, Error)]
pub enum UpdateAuthorFormError {
    #[error("Update author form validation failed: {0}")]
    Validation(String),
    #[error("Update author form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateAuthorFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateAuthorFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateAuthorForm> for UpdateAuthorFormPayload {
    type Error = UpdateAuthorFormError;

    fn try_from(value: UpdateAuthorForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            patch: AuthorPatch {
                name: value.author_name.map(AuthorName::new).transpose()?,
                image: non_blank(value.author_image)
                    .map(AuthorImageUrl::new)
                    .transpose()?,
                description: value.description,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::DEFAULT_AUTHOR_IMAGE;

    #[test]
    fn add_author_applies_defaults() {
        let form = AddAuthorForm {
            author_name: " Ada Lovelace ".to_string(),
            author_image: None,
            description: None,
        };

        let payload: AddAuthorFormPayload = form.try_into().unwrap();
        assert_eq!(payload.author.name, "Ada Lovelace");
        assert_eq!(payload.author.image.as_str(), DEFAULT_AUTHOR_IMAGE);
        assert_eq!(payload.author.description, "");
    }

    #[test]
    fn add_author_rejects_bad_image() {
        let form = AddAuthorForm {
            author_name: "Ada".to_string(),
            author_image: Some("portrait".to_string()),
            description: None,
        };

        let err = AddAuthorFormPayload::try_from(form).unwrap_err();
        assert!(err.to_string().contains("authorImage"));
    }

    #[test]
    fn update_author_rejects_blank_name() {
        let form = UpdateAuthorForm {
            author_name: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(UpdateAuthorFormPayload::try_from(form).is_err());
    }
}
