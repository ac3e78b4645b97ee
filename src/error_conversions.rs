//! Error conversion glue between the domain, form and service layers.
//!
//! The domain layer must not depend on service error types, so the `From`
//! impls that bridge them live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::articles::{AddArticleFormError, UpdateArticleFormError};
use crate::forms::authors::{AddAuthorFormError, UpdateAuthorFormError};
use crate::forms::categories::CategoryFormError;
use crate::forms::tags::AddTagFormError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        ServiceError::Internal(val.to_string())
    }
}

impl From<AddArticleFormError> for ServiceError {
    fn from(val: AddArticleFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateArticleFormError> for ServiceError {
    fn from(val: UpdateArticleFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddAuthorFormError> for ServiceError {
    fn from(val: AddAuthorFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateAuthorFormError> for ServiceError {
    fn from(val: UpdateAuthorFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<CategoryFormError> for ServiceError {
    fn from(val: CategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddTagFormError> for ServiceError {
    fn from(val: AddTagFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
