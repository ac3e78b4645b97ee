use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ArticleId, ArticleSubtitle, ArticleTitle, ArticleType, AuthorId, CategoryId, HeroUrl,
    HtmlDescription, MediaUrl, TagName, TypeConstraintError,
};

/// A published piece of content.
///
/// `category_id` and `author_id` are only checked for format; the referenced
/// rows may be missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub subtitle: Option<ArticleSubtitle>,
    pub hero: HeroUrl,
    pub article_type: ArticleType,
    pub description: HtmlDescription,
    pub media_url: Option<MediaUrl>,
    pub published: NaiveDateTime,
    pub category_id: CategoryId,
    pub author_id: AuthorId,
    pub tags: Vec<TagName>,
}

/// Data required to insert a new [`Article`] or overwrite an existing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub subtitle: Option<ArticleSubtitle>,
    pub hero: HeroUrl,
    pub article_type: ArticleType,
    pub description: HtmlDescription,
    pub media_url: Option<MediaUrl>,
    pub published: NaiveDateTime,
    pub category_id: CategoryId,
    pub author_id: AuthorId,
    pub tags: Vec<TagName>,
}

impl NewArticle {
    /// Enforces the cross-field rules that single value types cannot express.
    pub fn validate(&self) -> Result<(), TypeConstraintError> {
        check_media(self.article_type, self.media_url.as_ref())
    }
}

impl From<Article> for NewArticle {
    fn from(article: Article) -> Self {
        Self {
            title: article.title,
            subtitle: article.subtitle,
            hero: article.hero,
            article_type: article.article_type,
            description: article.description,
            media_url: article.media_url,
            published: article.published,
            category_id: article.category_id,
            author_id: article.author_id,
            tags: article.tags,
        }
    }
}

/// Partial update of an [`Article`]; `None` leaves the stored value in place.
///
/// `subtitle` and `media_url` are clearable: `Some(None)` removes the stored
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticlePatch {
    pub title: Option<ArticleTitle>,
    pub subtitle: Option<Option<ArticleSubtitle>>,
    pub hero: Option<HeroUrl>,
    pub article_type: Option<ArticleType>,
    pub description: Option<HtmlDescription>,
    pub media_url: Option<Option<MediaUrl>>,
    pub published: Option<NaiveDateTime>,
    pub category_id: Option<CategoryId>,
    pub author_id: Option<AuthorId>,
    pub tags: Option<Vec<TagName>>,
}

impl ArticlePatch {
    /// Merge the patch onto `current` and re-check the merged article.
    pub fn apply(self, current: Article) -> Result<NewArticle, TypeConstraintError> {
        let merged = NewArticle {
            title: self.title.unwrap_or(current.title),
            subtitle: self.subtitle.unwrap_or(current.subtitle),
            hero: self.hero.unwrap_or(current.hero),
            article_type: self.article_type.unwrap_or(current.article_type),
            description: self.description.unwrap_or(current.description),
            media_url: self.media_url.unwrap_or(current.media_url),
            published: self.published.unwrap_or(current.published),
            category_id: self.category_id.unwrap_or(current.category_id),
            author_id: self.author_id.unwrap_or(current.author_id),
            tags: self.tags.unwrap_or(current.tags),
        };
        merged.validate()?;
        Ok(merged)
    }
}

/// AUDIO and VIDEO articles must link to their media.
pub fn check_media(
    article_type: ArticleType,
    media_url: Option<&MediaUrl>,
) -> Result<(), TypeConstraintError> {
    if article_type.requires_media() && media_url.is_none() {
        return Err(TypeConstraintError::MissingMediaUrl(article_type));
    }
    Ok(())
}

/// Turn raw tag input into a set: blanks are dropped, duplicates collapsed,
/// first-seen order kept.
pub fn normalize_tags<I, S>(raw: I) -> Vec<TagName>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tags: Vec<TagName> = Vec::new();
    for tag in raw.into_iter().filter_map(|t| TagName::new(t).ok()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("Moon landing").unwrap(),
            subtitle: None,
            hero: HeroUrl::new("https://example.com/moon.jpg").unwrap(),
            article_type: ArticleType::Text,
            description: HtmlDescription::new("<p>One small step</p>").unwrap(),
            media_url: None,
            published: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            category_id: CategoryId::new(1).unwrap(),
            author_id: AuthorId::new(1).unwrap(),
            tags: vec![TagName::new("Science").unwrap()],
        }
    }

    #[test]
    fn audio_requires_media_url() {
        let err = check_media(ArticleType::Audio, None).unwrap_err();
        assert_eq!(err, TypeConstraintError::MissingMediaUrl(ArticleType::Audio));
        assert!(err.to_string().contains("mediaUrl"));
    }

    #[test]
    fn text_does_not_require_media_url() {
        assert!(check_media(ArticleType::Text, None).is_ok());
    }

    #[test]
    fn normalize_tags_trims_and_deduplicates() {
        let tags = normalize_tags(vec![" Science", "Space", "", "Science ", "  "]);
        let names: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["Science", "Space"]);
    }

    #[test]
    fn patch_keeps_unspecified_fields() {
        let patch = ArticlePatch {
            title: Some(ArticleTitle::new("Mars landing").unwrap()),
            ..Default::default()
        };
        let merged = patch.apply(sample_article()).unwrap();
        assert_eq!(merged.title, "Mars landing");
        assert_eq!(merged.tags, vec![TagName::new("Science").unwrap()]);
        assert_eq!(merged.article_type, ArticleType::Text);
    }

    #[test]
    fn patch_switching_to_video_needs_media() {
        let patch = ArticlePatch {
            article_type: Some(ArticleType::Video),
            ..Default::default()
        };
        assert_eq!(
            patch.apply(sample_article()).unwrap_err(),
            TypeConstraintError::MissingMediaUrl(ArticleType::Video)
        );

        let patch = ArticlePatch {
            article_type: Some(ArticleType::Video),
            media_url: Some(Some(MediaUrl::new("https://example.com/clip.mp4").unwrap())),
            ..Default::default()
        };
        let merged = patch.apply(sample_article()).unwrap();
        assert_eq!(merged.article_type, ArticleType::Video);
    }

    #[test]
    fn patch_can_clear_media_when_switching_to_text() {
        let mut current = sample_article();
        current.article_type = ArticleType::Audio;
        current.media_url = Some(MediaUrl::new("https://example.com/talk.mp3").unwrap());
        current.subtitle = Some(ArticleSubtitle::new("Episode 1").unwrap());

        let patch = ArticlePatch {
            article_type: Some(ArticleType::Text),
            media_url: Some(None),
            subtitle: Some(None),
            ..Default::default()
        };
        let merged = patch.apply(current.clone()).unwrap();
        assert_eq!(merged.article_type, ArticleType::Text);
        assert!(merged.media_url.is_none());
        assert!(merged.subtitle.is_none());

        let patch = ArticlePatch {
            media_url: Some(None),
            ..Default::default()
        };
        assert_eq!(
            patch.apply(current).unwrap_err(),
            TypeConstraintError::MissingMediaUrl(ArticleType::Audio)
        );
    }
}
