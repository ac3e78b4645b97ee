use crate::domain::types::TagId;
use crate::dto::tags::TagDto;
use crate::forms::tags::AddTagFormPayload;
use crate::repository::{RepositoryError, TagReader, TagWriter};

use super::{ServiceError, ServiceResult, parse_path_id};

/// Outcome of a tag creation request.
#[derive(Debug, Clone, PartialEq)]
pub enum TagCreation {
    Created(TagDto),
    /// A tag with the same trimmed name already existed; nothing was written.
    Existing(TagDto),
}

pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<TagDto>>
where
    R: TagReader,
{
    match repo.list_tags() {
        Ok(tags) => Ok(tags.into_iter().map(TagDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list tags: {e}");
            Err(e.into())
        }
    }
}

/// Create a tag unless one with the same name exists.
///
/// An insert that loses a race against a concurrent one trips the unique
/// index; the winner's row is then returned as existing.
pub fn add_tag<R>(payload: AddTagFormPayload, repo: &R) -> ServiceResult<TagCreation>
where
    R: TagReader + TagWriter,
{
    match repo.get_tag_by_name(&payload.name) {
        Ok(Some(tag)) => return Ok(TagCreation::Existing(tag.into())),
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to look up tag: {e}");
            return Err(e.into());
        }
    }

    let name = payload.name.clone();
    match repo.create_tag(&payload.into_new_tag()) {
        Ok(tag) => Ok(TagCreation::Created(tag.into())),
        Err(RepositoryError::Conflict(_)) => match repo.get_tag_by_name(&name) {
            Ok(Some(tag)) => Ok(TagCreation::Existing(tag.into())),
            Ok(None) => Err(ServiceError::Internal(format!(
                "tag '{name}' conflicted but could not be read back"
            ))),
            Err(e) => {
                log::error!("Failed to re-read tag after conflict: {e}");
                Err(e.into())
            }
        },
        Err(e) => {
            log::error!("Failed to create tag: {e}");
            Err(e.into())
        }
    }
}

pub fn delete_tag<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: TagWriter,
{
    let tag_id: TagId = parse_path_id(id)?;

    match repo.delete_tag(tag_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete tag {tag_id}: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TagName;
    use crate::repository::test::TestRepository;

    fn payload(name: &str) -> AddTagFormPayload {
        AddTagFormPayload {
            name: TagName::new(name).unwrap(),
        }
    }

    #[test]
    fn duplicate_name_returns_existing_tag() {
        let repo = TestRepository::default();

        let first = match add_tag(payload("Science"), &repo).unwrap() {
            TagCreation::Created(tag) => tag,
            other => panic!("expected a new tag, got {other:?}"),
        };
        let second = match add_tag(payload("  Science "), &repo).unwrap() {
            TagCreation::Existing(tag) => tag,
            other => panic!("expected the existing tag, got {other:?}"),
        };

        assert_eq!(first.tag_id, second.tag_id);
        assert_eq!(repo.tag_count(), 1);
    }

    #[test]
    fn delete_unknown_tag_is_not_found() {
        let repo = TestRepository::default();
        assert_eq!(delete_tag("12", &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(delete_tag("x", &repo).unwrap_err(), ServiceError::NotFound);
    }
}
