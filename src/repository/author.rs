use diesel::prelude::*;

use crate::domain::author::{Author, NewAuthor};
use crate::domain::types::AuthorId;
use crate::models::author::{Author as DbAuthor, NewAuthor as DbNewAuthor};
use crate::repository::{AuthorReader, AuthorWriter, DieselRepository, RepositoryResult};

impl AuthorReader for DieselRepository {
    fn list_authors(&self) -> RepositoryResult<Vec<Author>> {
        use crate::schema::authors;

        let mut conn = self.conn()?;

        let items = authors::table
            .order((authors::name.asc(), authors::id.asc()))
            .load::<DbAuthor>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Author>, _>>()?;

        Ok(items)
    }

    fn get_author_by_id(&self, id: AuthorId) -> RepositoryResult<Option<Author>> {
        use crate::schema::authors;

        let mut conn = self.conn()?;

        let author = authors::table
            .find(id.get())
            .first::<DbAuthor>(&mut conn)
            .optional()?;

        let author = author.map(TryInto::try_into).transpose()?;
        Ok(author)
    }
}

impl AuthorWriter for DieselRepository {
    fn create_author(&self, author: &NewAuthor) -> RepositoryResult<Author> {
        use crate::schema::authors;

        let mut conn = self.conn()?;
        let db_author: DbNewAuthor = author.into();

        let created = diesel::insert_into(authors::table)
            .values(&db_author)
            .get_result::<DbAuthor>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_author(&self, id: AuthorId, author: &NewAuthor) -> RepositoryResult<usize> {
        use crate::schema::authors;

        let mut conn = self.conn()?;
        let db_author: DbNewAuthor = author.into();

        let affected = diesel::update(authors::table.find(id.get()))
            .set(&db_author)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_author(&self, id: AuthorId) -> RepositoryResult<usize> {
        use crate::schema::authors;

        let mut conn = self.conn()?;

        let affected = diesel::delete(authors::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
