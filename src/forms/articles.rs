use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::article::{ArticlePatch, NewArticle, normalize_tags};
use crate::domain::types::{
    ArticleSubtitle, ArticleTitle, ArticleType, AuthorId, CategoryId, HeroUrl, HtmlDescription,
    MediaUrl, TypeConstraintError,
};
use crate::forms::{IdInput, explicit_null, non_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddArticleForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub hero: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub article_type: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub description: String,
    pub media_url: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub category: IdInput,
    pub author: IdInput,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddArticleFormPayload {
    pub article: NewArticle,
}

#[derive(Debug, Error)]
pub enum AddArticleFormError {
    #[error("Add article form validation failed: {0}")]
    Validation(String),
    #[error("Add article form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddArticleFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddArticleFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddArticleForm> for AddArticleFormPayload {
    type Error = AddArticleFormError;

    fn try_from(value: AddArticleForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let article = NewArticle {
            title: ArticleTitle::new(value.title)?,
            subtitle: non_blank(value.subtitle)
                .map(ArticleSubtitle::new)
                .transpose()?,
            hero: HeroUrl::new(value.hero)?,
            article_type: ArticleType::try_from(value.article_type)?,
            description: HtmlDescription::new(value.description)?,
            media_url: non_blank(value.media_url).map(MediaUrl::new).transpose()?,
            published: value
                .published
                .map(|p| p.naive_utc())
                .unwrap_or_else(|| Utc::now().naive_utc()),
            category_id: value.category.parse::<CategoryId>()?,
            author_id: value.author.parse::<AuthorId>()?,
            tags: normalize_tags(value.tags),
        };
        article.validate()?;

        Ok(Self { article })
    }
}

/// Partial article update; every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleForm {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    /// `null` or blank clears the subtitle.
    #[serde(default, deserialize_with = "explicit_null")]
    pub subtitle: Option<Option<String>>,
    #[validate(length(min = 1))]
    pub hero: Option<String>,
    pub article_type: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    /// `null` or blank clears the media link.
    #[serde(default, deserialize_with = "explicit_null")]
    pub media_url: Option<Option<String>>,
    pub published: Option<DateTime<Utc>>,
    pub category: Option<IdInput>,
    pub author: Option<IdInput>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateArticleFormPayload {
    pub patch: ArticlePatch,
}

#[derive(Debug, Error)]
pub enum UpdateArticleFormError {
    #[error("Update article form validation failed: {0}")]
    Validation(String),
    #[error("Update article form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateArticleFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateArticleFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateArticleForm> for UpdateArticleFormPayload {
    type Error = UpdateArticleFormError;

    fn try_from(value: UpdateArticleForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let patch = ArticlePatch {
            title: value.title.map(ArticleTitle::new).transpose()?,
            subtitle: value
                .subtitle
                .map(|s| non_blank(s).map(ArticleSubtitle::new).transpose())
                .transpose()?,
            hero: value.hero.map(HeroUrl::new).transpose()?,
            article_type: value.article_type.map(ArticleType::try_from).transpose()?,
            description: value.description.map(HtmlDescription::new).transpose()?,
            media_url: value
                .media_url
                .map(|m| non_blank(m).map(MediaUrl::new).transpose())
                .transpose()?,
            published: value.published.map(|p| p.naive_utc()),
            category_id: value
                .category
                .map(|c| c.parse::<CategoryId>())
                .transpose()?,
            author_id: value.author.map(|a| a.parse::<AuthorId>()).transpose()?,
            tags: value.tags.map(normalize_tags),
        };

        Ok(Self { patch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio_form_without_media() -> AddArticleForm {
        serde_json::from_value(serde_json::json!({
            "title": "Morning briefing",
            "hero": "https://example.com/hero.jpg",
            "articleType": "AUDIO",
            "description": "<p>Today's headlines</p>",
            "category": "1",
            "author": 2,
            "tags": ["Politics", " Politics ", "Economy"]
        }))
        .unwrap()
    }

    #[test]
    fn audio_article_without_media_url_is_rejected() {
        let result: Result<AddArticleFormPayload, _> = audio_form_without_media().try_into();
        let err = result.unwrap_err();
        assert!(matches!(err, AddArticleFormError::TypeConstraint(_)));
        assert!(err.to_string().contains("mediaUrl"));
    }

    #[test]
    fn plain_text_description_is_rejected() {
        let mut form = audio_form_without_media();
        form.article_type = "TEXT".to_string();
        form.description = "plain text".to_string();

        let err = AddArticleFormPayload::try_from(form).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn valid_article_is_normalized() {
        let mut form = audio_form_without_media();
        form.media_url = Some("https://cdn.example.com/briefing.mp3".to_string());

        let payload = AddArticleFormPayload::try_from(form).unwrap();
        let article = payload.article;
        assert_eq!(article.category_id.get(), 1);
        assert_eq!(article.author_id.get(), 2);
        assert_eq!(article.article_type, ArticleType::Audio);
        let tags: Vec<&str> = article.tags.iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, vec!["Politics", "Economy"]);
    }

    #[test]
    fn malformed_category_is_rejected() {
        let mut form = audio_form_without_media();
        form.article_type = "TEXT".to_string();
        form.category = IdInput::Text("not-an-id".to_string());

        let err = AddArticleFormPayload::try_from(form).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn missing_title_names_the_field() {
        let mut form = audio_form_without_media();
        form.title = String::new();

        let err = AddArticleFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, AddArticleFormError::Validation(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn update_form_builds_sparse_patch() {
        let form: UpdateArticleForm = serde_json::from_value(serde_json::json!({
            "title": "Updated",
            "tags": ["Space"]
        }))
        .unwrap();

        let payload = UpdateArticleFormPayload::try_from(form).unwrap();
        assert_eq!(payload.patch.title.unwrap(), "Updated");
        assert!(payload.patch.hero.is_none());
        assert_eq!(payload.patch.tags.unwrap().len(), 1);
    }

    #[test]
    fn update_form_distinguishes_absent_from_null() {
        let form: UpdateArticleForm = serde_json::from_value(serde_json::json!({
            "articleType": "TEXT",
            "mediaUrl": null,
            "subtitle": "  "
        }))
        .unwrap();

        let patch = UpdateArticleFormPayload::try_from(form).unwrap().patch;
        assert_eq!(patch.media_url, Some(None));
        assert_eq!(patch.subtitle, Some(None));

        let form: UpdateArticleForm = serde_json::from_value(serde_json::json!({
            "mediaUrl": "https://cdn.example.com/a.mp3"
        }))
        .unwrap();
        let patch = UpdateArticleFormPayload::try_from(form).unwrap().patch;
        assert!(patch.subtitle.is_none());
        assert!(matches!(patch.media_url, Some(Some(_))));
    }
}
