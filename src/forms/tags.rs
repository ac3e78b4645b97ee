use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::NewTag;
use crate::domain::types::{TagName, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTagForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub tag_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddTagFormPayload {
    pub name: TagName,
}

impl AddTagFormPayload {
    pub fn into_new_tag(self) -> NewTag {
        let now = Utc::now().naive_utc();
        NewTag {
            name: self.name,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddTagFormError {
    #[error("Add tag form validation failed: {0}")]
    Validation(String),
    #[error("Add tag form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddTagFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddTagFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddTagForm> for AddTagFormPayload {
    type Error = AddTagFormError;

    fn try_from(value: AddTagForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: TagName::new(value.tag_name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_name_is_trimmed() {
        let form = AddTagForm {
            tag_name: " Science ".to_string(),
        };

        let payload: AddTagFormPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Science");
    }
}
