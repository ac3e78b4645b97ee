use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::article::Article;
use crate::domain::author::Author;
use crate::domain::category::Category;
use crate::domain::types::ArticleType;

/// Full article as returned by the list and create endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub article_id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub hero: String,
    pub article_type: ArticleType,
    pub description: String,
    pub media_url: Option<String>,
    pub published: NaiveDateTime,
    pub category_id: i32,
    pub author_id: i32,
    pub tags: Vec<String>,
}

impl From<Article> for ArticleDto {
    fn from(value: Article) -> Self {
        Self {
            article_id: value.id.get(),
            title: value.title.into_inner(),
            subtitle: value.subtitle.map(|s| s.into_inner()),
            hero: value.hero.into_inner(),
            article_type: value.article_type,
            description: value.description.into_inner(),
            media_url: value.media_url.map(|m| m.into_inner()),
            published: value.published,
            category_id: value.category_id.get(),
            author_id: value.author_id.get(),
            tags: value.tags.into_iter().map(|t| t.into_inner()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCategoryDto {
    pub id: i32,
    pub name: String,
}

impl From<Category> for ArticleCategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleAuthorDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: String,
}

impl From<Author> for ArticleAuthorDto {
    fn from(value: Author) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            image: value.image.into_inner(),
            description: value.description,
        }
    }
}

/// Single article with its category and author expanded.
///
/// `category` and `author` are `null` when the referenced row no longer
/// exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailDto {
    pub article_id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub hero: String,
    pub article_type: ArticleType,
    pub description: String,
    pub media_url: Option<String>,
    pub published: NaiveDateTime,
    pub category: Option<ArticleCategoryDto>,
    pub author: Option<ArticleAuthorDto>,
    pub tags: Vec<String>,
}

impl ArticleDetailDto {
    pub fn new(article: Article, category: Option<Category>, author: Option<Author>) -> Self {
        Self {
            article_id: article.id.get(),
            title: article.title.into_inner(),
            subtitle: article.subtitle.map(|s| s.into_inner()),
            hero: article.hero.into_inner(),
            article_type: article.article_type,
            description: article.description.into_inner(),
            media_url: article.media_url.map(|m| m.into_inner()),
            published: article.published,
            category: category.map(ArticleCategoryDto::from),
            author: author.map(ArticleAuthorDto::from),
            tags: article.tags.into_iter().map(|t| t.into_inner()).collect(),
        }
    }
}

/// Compact article entry of the filter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub article_id: i32,
    pub title: String,
    pub hero: String,
    pub category_id: i32,
    pub author_id: i32,
    pub article_type: ArticleType,
    pub tags: Vec<String>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(value: Article) -> Self {
        Self {
            article_id: value.id.get(),
            title: value.title.into_inner(),
            hero: value.hero.into_inner(),
            category_id: value.category_id.get(),
            author_id: value.author_id.get(),
            article_type: value.article_type,
            tags: value.tags.into_iter().map(|t| t.into_inner()).collect(),
        }
    }
}

/// Author echoed back by the filter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDisplayDto {
    pub author_name: String,
    pub author_id: Option<i32>,
}

impl AuthorDisplayDto {
    pub const ANONYMOUS: &'static str = "Anonymous";

    pub fn anonymous() -> Self {
        Self {
            author_name: Self::ANONYMOUS.to_string(),
            author_id: None,
        }
    }
}

impl From<Author> for AuthorDisplayDto {
    fn from(value: Author) -> Self {
        Self {
            author_name: value.name.into_inner(),
            author_id: Some(value.id.get()),
        }
    }
}

/// Category echoed back by the filter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDisplayDto {
    pub category_id: i32,
    pub category_name: String,
}

impl From<Category> for CategoryDisplayDto {
    fn from(value: Category) -> Self {
        Self {
            category_id: value.id.get(),
            category_name: value.name.into_inner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterArticlesDto {
    /// `None` when no valid category identifier was supplied.
    pub category_ids: Option<Vec<i32>>,
    pub tag: Option<String>,
    pub author: AuthorDisplayDto,
    pub category: Option<CategoryDisplayDto>,
    pub articles: Vec<ArticleSummaryDto>,
    pub page: i64,
    pub total: usize,
    pub total_pages: usize,
}
