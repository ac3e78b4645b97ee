use crate::db::{DbConnection, DbPool};
use crate::domain::article::{Article, NewArticle};
use crate::domain::author::{Author, NewAuthor};
use crate::domain::category::{Category, NewCategory};
use crate::domain::tag::{NewTag, Tag};
use crate::domain::types::{
    ArticleId, ArticleType, AuthorId, CategoryId, CategoryName, TagId, TagName,
};
use crate::pagination::Pagination;

pub use errors::{RepositoryError, RepositoryResult};

pub mod article;
pub mod author;
pub mod category;
pub mod errors;
pub mod tag;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Filter and pagination options for listing articles.
///
/// Every populated field narrows the result; an empty `category_ids` and
/// `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleListQuery {
    /// Match articles filed under any of these categories.
    pub category_ids: Vec<CategoryId>,
    /// Match articles written by this author.
    pub author_id: Option<AuthorId>,
    /// Match articles whose tag set contains this tag.
    pub tag: Option<TagName>,
    /// Match articles of exactly this type.
    pub article_type: Option<ArticleType>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl ArticleListQuery {
    pub fn categories(mut self, category_ids: impl IntoIterator<Item = CategoryId>) -> Self {
        self.category_ids = category_ids.into_iter().collect();
        self
    }
    pub fn author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }
    pub fn tag(mut self, tag: TagName) -> Self {
        self.tag = Some(tag);
        self
    }
    pub fn article_type(mut self, article_type: ArticleType) -> Self {
        self.article_type = Some(article_type);
        self
    }
    pub fn paginate(mut self, page: i64, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// Whether `article` satisfies every filter in this query.
    pub fn matches(&self, article: &Article) -> bool {
        (self.category_ids.is_empty() || self.category_ids.contains(&article.category_id))
            && self.author_id.is_none_or(|id| article.author_id == id)
            && self.tag.as_ref().is_none_or(|tag| article.tags.contains(tag))
            && self
                .article_type
                .is_none_or(|article_type| article.article_type == article_type)
    }
}

/// Read-only operations for article entities.
pub trait ArticleReader {
    /// List articles matching the query, most recent first.
    ///
    /// Returns the number of matching articles ignoring pagination together
    /// with the requested page.
    fn list_articles(&self, query: ArticleListQuery) -> RepositoryResult<(usize, Vec<Article>)>;
    /// Retrieve an article by its identifier.
    fn get_article_by_id(&self, id: ArticleId) -> RepositoryResult<Option<Article>>;
}

/// Write operations for article entities and their tag sets.
pub trait ArticleWriter {
    /// Persist a new article and return it with its assigned identifier.
    fn create_article(&self, article: &NewArticle) -> RepositoryResult<Article>;
    /// Overwrite an article and its tags. Returns the number of updated rows.
    fn update_article(&self, id: ArticleId, article: &NewArticle) -> RepositoryResult<usize>;
    /// Delete an article and its tags. Returns the number of deleted articles.
    fn delete_article(&self, id: ArticleId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Rename a category.
    fn update_category(&self, id: CategoryId, name: &CategoryName) -> RepositoryResult<usize>;
    /// Delete a category; articles referencing it are left untouched.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for author entities.
pub trait AuthorReader {
    /// List all authors ordered by name.
    fn list_authors(&self) -> RepositoryResult<Vec<Author>>;
    /// Retrieve an author by identifier.
    fn get_author_by_id(&self, id: AuthorId) -> RepositoryResult<Option<Author>>;
}

/// Write operations for author entities.
pub trait AuthorWriter {
    /// Persist a new author.
    fn create_author(&self, author: &NewAuthor) -> RepositoryResult<Author>;
    /// Overwrite every column of an author.
    fn update_author(&self, id: AuthorId, author: &NewAuthor) -> RepositoryResult<usize>;
    /// Delete an author; articles referencing it are left untouched.
    fn delete_author(&self, id: AuthorId) -> RepositoryResult<usize>;
}

/// Read-only operations for the tag catalogue.
pub trait TagReader {
    /// List all tags ordered by name.
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    /// Look a tag up by its exact (trimmed) name.
    fn get_tag_by_name(&self, name: &TagName) -> RepositoryResult<Option<Tag>>;
}

/// Write operations for the tag catalogue.
pub trait TagWriter {
    /// Persist a new tag. Fails with [`RepositoryError::Conflict`] when the
    /// name is already taken.
    fn create_tag(&self, tag: &NewTag) -> RepositoryResult<Tag>;
    /// Delete a tag by identifier.
    fn delete_tag(&self, id: TagId) -> RepositoryResult<usize>;
}
