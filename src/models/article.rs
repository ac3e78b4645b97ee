use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::article::{Article as DomainArticle, NewArticle as DomainNewArticle};
use crate::domain::types::{
    ArticleSubtitle, ArticleTitle, ArticleType, HeroUrl, HtmlDescription, MediaUrl, TagName,
    TypeConstraintError,
};

/// Diesel model representing a row in the `articles` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub hero: String,
    pub article_type: String,
    pub description: String,
    pub media_url: Option<String>,
    pub published: NaiveDateTime,
    pub category_id: i32,
    pub author_id: i32,
}

/// Insertable/patchable form of [`Article`].
///
/// Optional columns are written as `NULL` when absent so that a full rewrite
/// clears them.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::articles)]
#[diesel(treat_none_as_null = true)]
pub struct NewArticle<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub hero: &'a str,
    pub article_type: &'a str,
    pub description: &'a str,
    pub media_url: Option<&'a str>,
    pub published: NaiveDateTime,
    pub category_id: i32,
    pub author_id: i32,
}

/// Row of the `article_tags` table: one tag name attached to one article.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::article_tags)]
pub struct NewArticleTag<'a> {
    pub article_id: i32,
    pub name: &'a str,
    /// Index of the tag in the article's tag list.
    pub position: i32,
}

impl TryFrom<(Article, Vec<String>)> for DomainArticle {
    type Error = TypeConstraintError;

    fn try_from((article, tags): (Article, Vec<String>)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: article.id.try_into()?,
            title: ArticleTitle::new(article.title)?,
            subtitle: article.subtitle.map(ArticleSubtitle::new).transpose()?,
            hero: HeroUrl::new(article.hero)?,
            article_type: ArticleType::try_from(article.article_type)?,
            description: HtmlDescription::new(article.description)?,
            media_url: article.media_url.map(MediaUrl::new).transpose()?,
            published: article.published,
            category_id: article.category_id.try_into()?,
            author_id: article.author_id.try_into()?,
            tags: tags
                .into_iter()
                .map(TagName::new)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl<'a> From<&'a DomainNewArticle> for NewArticle<'a> {
    fn from(article: &'a DomainNewArticle) -> Self {
        Self {
            title: article.title.as_str(),
            subtitle: article.subtitle.as_ref().map(|s| s.as_str()),
            hero: article.hero.as_str(),
            article_type: article.article_type.as_str(),
            description: article.description.as_str(),
            media_url: article.media_url.as_ref().map(|m| m.as_str()),
            published: article.published,
            category_id: article.category_id.get(),
            author_id: article.author_id.get(),
        }
    }
}
