use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::article::{Article, NewArticle};
use crate::domain::types::{ArticleId, TagName};
use crate::models::article::{
    Article as DbArticle, NewArticle as DbNewArticle, NewArticleTag as DbNewArticleTag,
};
use crate::repository::{
    ArticleListQuery, ArticleReader, ArticleWriter, DieselRepository, RepositoryResult,
};

/// Load the tag lists of the given articles, keyed by article id.
fn load_tags(
    conn: &mut SqliteConnection,
    article_ids: Vec<i32>,
) -> QueryResult<HashMap<i32, Vec<String>>> {
    use crate::schema::article_tags;

    let rows: Vec<(i32, String)> = article_tags::table
        .filter(article_tags::article_id.eq_any(article_ids))
        .order((article_tags::article_id.asc(), article_tags::position.asc()))
        .select((article_tags::article_id, article_tags::name))
        .load(conn)?;

    let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
    for (article_id, name) in rows {
        tags.entry(article_id).or_default().push(name);
    }
    Ok(tags)
}

/// Replace the tag set of an article.
fn replace_tags(conn: &mut SqliteConnection, article_id: i32, tags: &[TagName]) -> QueryResult<()> {
    use crate::schema::article_tags;

    diesel::delete(article_tags::table.filter(article_tags::article_id.eq(article_id)))
        .execute(conn)?;

    let rows = tags
        .iter()
        .enumerate()
        .map(|(position, tag)| DbNewArticleTag {
            article_id,
            name: tag.as_str(),
            position: position as i32,
        })
        .collect::<Vec<_>>();

    if !rows.is_empty() {
        diesel::insert_into(article_tags::table)
            .values(&rows)
            .execute(conn)?;
    }
    Ok(())
}

fn attach_tags(
    articles: Vec<DbArticle>,
    mut tags: HashMap<i32, Vec<String>>,
) -> RepositoryResult<Vec<Article>> {
    let articles = articles
        .into_iter()
        .map(|article| {
            let article_tags = tags.remove(&article.id).unwrap_or_default();
            (article, article_tags).try_into()
        })
        .collect::<Result<Vec<Article>, _>>()?;
    Ok(articles)
}

impl ArticleReader for DieselRepository {
    fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<(usize, Vec<Article>)> {
        use crate::schema::{article_tags, articles};

        let mut conn = self.conn()?;

        let category_ids = query
            .category_ids
            .iter()
            .map(|id| id.get())
            .collect::<Vec<i32>>();

        let query_builder = || {
            let mut items = articles::table.into_boxed::<diesel::sqlite::Sqlite>();

            if !category_ids.is_empty() {
                items = items.filter(articles::category_id.eq_any(category_ids.clone()));
            }

            if let Some(author_id) = query.author_id {
                items = items.filter(articles::author_id.eq(author_id.get()));
            }

            if let Some(tag) = &query.tag {
                items = items.filter(
                    articles::id.eq_any(
                        article_tags::table
                            .filter(article_tags::name.eq(tag.as_str().to_string()))
                            .select(article_tags::article_id),
                    ),
                );
            }

            if let Some(article_type) = query.article_type {
                items = items.filter(articles::article_type.eq(article_type.as_str()));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder()
            .order(articles::published.desc())
            .then_order_by(articles::id.desc());

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let rows = items.load::<DbArticle>(&mut conn)?;
        let tags = load_tags(&mut conn, rows.iter().map(|a| a.id).collect())?;

        Ok((total, attach_tags(rows, tags)?))
    }

    fn get_article_by_id(&self, id: ArticleId) -> RepositoryResult<Option<Article>> {
        use crate::schema::articles;

        let mut conn = self.conn()?;

        let Some(row) = articles::table
            .find(id.get())
            .first::<DbArticle>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let tags = load_tags(&mut conn, vec![row.id])?;
        Ok(attach_tags(vec![row], tags)?.pop())
    }
}

impl ArticleWriter for DieselRepository {
    fn create_article(&self, article: &NewArticle) -> RepositoryResult<Article> {
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let db_article: DbNewArticle = article.into();

        let row = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let row = diesel::insert_into(articles::table)
                .values(&db_article)
                .get_result::<DbArticle>(conn)?;
            replace_tags(conn, row.id, &article.tags)?;
            Ok(row)
        })?;

        let tags: Vec<String> = article.tags.iter().map(|t| t.as_str().to_string()).collect();
        Ok((row, tags).try_into()?)
    }

    fn update_article(&self, id: ArticleId, article: &NewArticle) -> RepositoryResult<usize> {
        use crate::schema::articles;

        let mut conn = self.conn()?;
        let db_article: DbNewArticle = article.into();

        let affected = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let affected = diesel::update(articles::table.find(id.get()))
                .set(&db_article)
                .execute(conn)?;
            if affected > 0 {
                replace_tags(conn, id.get(), &article.tags)?;
            }
            Ok(affected)
        })?;

        Ok(affected)
    }

    fn delete_article(&self, id: ArticleId) -> RepositoryResult<usize> {
        use crate::schema::{article_tags, articles};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(article_tags::table.filter(article_tags::article_id.eq(id.get())))
                .execute(conn)?;
            diesel::delete(articles::table.find(id.get())).execute(conn)
        })?;

        Ok(affected)
    }
}
