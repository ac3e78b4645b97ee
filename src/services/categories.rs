use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::CategoryFormPayload;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult, parse_path_id};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(e.into())
        }
    }
}

fn find_category<R>(id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            Err(e.into())
        }
    }
}

pub fn get_category<R>(id: &str, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let category_id: CategoryId = parse_path_id(id)?;
    find_category(category_id, repo).map(CategoryDto::from)
}

pub fn add_category<R>(payload: CategoryFormPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    match repo.create_category(&payload.into_new_category()) {
        Ok(category) => Ok(category.into()),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(e.into())
        }
    }
}

pub fn update_category<R>(
    id: &str,
    payload: CategoryFormPayload,
    repo: &R,
) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    let category_id: CategoryId = parse_path_id(id)?;

    match repo.update_category(category_id, &payload.name) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => find_category(category_id, repo).map(CategoryDto::from),
        Err(e) => {
            log::error!("Failed to update category {category_id}: {e}");
            Err(e.into())
        }
    }
}

/// Articles filed under the category keep their dangling reference.
pub fn delete_category<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id: CategoryId = parse_path_id(id)?;

    match repo.delete_category(category_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category {category_id}: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CategoryName;
    use crate::repository::test::TestRepository;

    fn payload(name: &str) -> CategoryFormPayload {
        CategoryFormPayload {
            name: CategoryName::new(name).unwrap(),
        }
    }

    #[test]
    fn create_then_rename() {
        let repo = TestRepository::default();
        let created = add_category(payload("Tech"), &repo).unwrap();
        assert_eq!(created.category_name, "Tech");

        let id = created.category_id.to_string();
        let renamed = update_category(&id, payload("Science"), &repo).unwrap();
        assert_eq!(renamed.category_id, created.category_id);
        assert_eq!(renamed.category_name, "Science");
        assert_eq!(list_categories(&repo).unwrap().len(), 1);
    }

    #[test]
    fn missing_category_is_not_found() {
        let repo = TestRepository::default();
        assert_eq!(get_category("5", &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(
            update_category("5", payload("X"), &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert_eq!(delete_category("abc", &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn store_failure_is_internal() {
        let repo = TestRepository::failing();
        assert!(matches!(
            list_categories(&repo).unwrap_err(),
            ServiceError::Internal(_)
        ));
    }
}
