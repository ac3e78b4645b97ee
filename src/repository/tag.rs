use diesel::prelude::*;

use crate::domain::tag::{NewTag, Tag};
use crate::domain::types::{TagId, TagName};
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag};
use crate::repository::{DieselRepository, RepositoryResult, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let items = tags::table
            .order(tags::name.asc())
            .load::<DbTag>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Tag>, _>>()?;

        Ok(items)
    }

    fn get_tag_by_name(&self, name: &TagName) -> RepositoryResult<Option<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let tag = tags::table
            .filter(tags::name.eq(name.as_str()))
            .first::<DbTag>(&mut conn)
            .optional()?;

        let tag = tag.map(TryInto::try_into).transpose()?;
        Ok(tag)
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, tag: &NewTag) -> RepositoryResult<Tag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_tag: DbNewTag = tag.into();

        let created = diesel::insert_into(tags::table)
            .values(&db_tag)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn delete_tag(&self, id: TagId) -> RepositoryResult<usize> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let affected = diesel::delete(tags::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
