use crate::domain::author::Author;
use crate::domain::types::AuthorId;
use crate::dto::authors::AuthorDto;
use crate::forms::authors::{AddAuthorFormPayload, UpdateAuthorFormPayload};
use crate::repository::{AuthorReader, AuthorWriter};

use super::{ServiceError, ServiceResult, parse_path_id};

pub fn list_authors<R>(repo: &R) -> ServiceResult<Vec<AuthorDto>>
where
    R: AuthorReader,
{
    match repo.list_authors() {
        Ok(authors) => Ok(authors.into_iter().map(AuthorDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list authors: {e}");
            Err(e.into())
        }
    }
}

fn find_author<R>(id: AuthorId, repo: &R) -> ServiceResult<Author>
where
    R: AuthorReader,
{
    match repo.get_author_by_id(id) {
        Ok(Some(author)) => Ok(author),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get author {id}: {e}");
            Err(e.into())
        }
    }
}

pub fn get_author<R>(id: &str, repo: &R) -> ServiceResult<AuthorDto>
where
    R: AuthorReader,
{
    let author_id: AuthorId = parse_path_id(id)?;
    find_author(author_id, repo).map(AuthorDto::from)
}

pub fn add_author<R>(payload: AddAuthorFormPayload, repo: &R) -> ServiceResult<AuthorDto>
where
    R: AuthorWriter,
{
    match repo.create_author(&payload.author) {
        Ok(author) => Ok(author.into()),
        Err(e) => {
            log::error!("Failed to create author: {e}");
            Err(e.into())
        }
    }
}

/// Merge the patch onto the stored author and write the result back.
pub fn update_author<R>(
    id: &str,
    payload: UpdateAuthorFormPayload,
    repo: &R,
) -> ServiceResult<AuthorDto>
where
    R: AuthorReader + AuthorWriter,
{
    let author_id: AuthorId = parse_path_id(id)?;
    let current = find_author(author_id, repo)?;
    let merged = payload.patch.apply(current);

    match repo.update_author(author_id, &merged) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => find_author(author_id, repo).map(AuthorDto::from),
        Err(e) => {
            log::error!("Failed to update author {author_id}: {e}");
            Err(e.into())
        }
    }
}

/// Articles written by the author keep their dangling reference.
pub fn delete_author<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: AuthorWriter,
{
    let author_id: AuthorId = parse_path_id(id)?;

    match repo.delete_author(author_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete author {author_id}: {e}");
            Err(e.into())
        }
    }
}
