use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Body of both the create and the update category requests.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFormPayload {
    pub name: CategoryName,
}

impl CategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory { name: self.name }
    }
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category form validation failed: {0}")]
    Validation(String),
    #[error("Category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CategoryForm> for CategoryFormPayload {
    type Error = CategoryFormError;

    fn try_from(value: CategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.category_name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_is_trimmed() {
        let form = CategoryForm {
            category_name: "  World ".to_string(),
        };

        let payload: CategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "World");
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let form = CategoryForm {
            category_name: "   ".to_string(),
        };

        let payload: Result<CategoryFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }
}
