use crate::domain::article::Article;
use crate::domain::types::{ArticleId, ArticleType, AuthorId, CategoryId, TagName};
use crate::dto::articles::{
    ArticleDetailDto, ArticleDto, ArticleSummaryDto, AuthorDisplayDto, CategoryDisplayDto,
    FilterArticlesDto,
};
use crate::forms::articles::{AddArticleFormPayload, UpdateArticleFormPayload};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated, Pagination};
use crate::repository::{
    ArticleListQuery, ArticleReader, ArticleWriter, AuthorReader, CategoryReader,
};

use super::{ServiceError, ServiceResult, parse_path_id};

/// Raw query-string parameters of the filter endpoint.
///
/// Values are kept as text; [`FilterArticlesParams::to_list_query`] decides
/// which of them are usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterArticlesParams {
    pub categories: Vec<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub article_type: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Filter parameters after parsing, together with the repository query they
/// translate into.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFilter {
    pub query: ArticleListQuery,
    pub first_category: Option<CategoryId>,
    pub page: i64,
    pub per_page: usize,
}

impl FilterArticlesParams {
    /// Collect parameters from decoded query-string pairs.
    ///
    /// `categories` may repeat (also spelled `categories[]`); `pageSize` is
    /// accepted for `limit`. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "categories" | "categories[]" => params.categories.push(value),
                "author" => params.author = Some(value),
                "tag" => params.tag = Some(value),
                "articleType" => params.article_type = Some(value),
                "page" => params.page = Some(value),
                "limit" | "pageSize" => params.limit = Some(value),
                _ => {}
            }
        }
        params
    }

    /// Build the repository query. Malformed values drop their filter
    /// instead of failing the request.
    pub fn to_list_query(&self, default_per_page: usize) -> ParsedFilter {
        let category_ids: Vec<CategoryId> = self
            .categories
            .iter()
            .filter_map(|raw| raw.parse().ok())
            .collect();
        let first_category = category_ids.first().copied();

        let page = self
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1);

        let fallback = if default_per_page == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            default_per_page
        };
        let per_page = self
            .limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(fallback);

        let mut query = ArticleListQuery::default()
            .categories(category_ids)
            .paginate(page, per_page);

        if let Some(author_id) = self.author_id() {
            query = query.author(author_id);
        }
        if let Some(tag) = self.tag.clone().and_then(|t| TagName::new(t).ok()) {
            query = query.tag(tag);
        }
        if let Some(article_type) = self
            .article_type
            .as_deref()
            .and_then(|raw| ArticleType::try_from(raw.trim()).ok())
        {
            query = query.article_type(article_type);
        }

        ParsedFilter {
            query,
            first_category,
            page,
            per_page,
        }
    }

    fn author_id(&self) -> Option<AuthorId> {
        self.author.as_deref().and_then(|raw| raw.parse().ok())
    }
}

/// Every article, most recent first.
pub fn list_articles<R>(repo: &R) -> ServiceResult<Vec<ArticleDto>>
where
    R: ArticleReader,
{
    match repo.list_articles(ArticleListQuery::default()) {
        Ok((_total, articles)) => Ok(articles.into_iter().map(ArticleDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list articles: {e}");
            Err(e.into())
        }
    }
}

/// Filtered, paginated article listing with the requested author and
/// category echoed back for display.
pub fn filter_articles<R>(
    params: &FilterArticlesParams,
    default_per_page: usize,
    repo: &R,
) -> ServiceResult<FilterArticlesDto>
where
    R: ArticleReader + AuthorReader + CategoryReader,
{
    let parsed = params.to_list_query(default_per_page);
    let query = parsed.query;

    let (total, articles) = repo.list_articles(query.clone()).map_err(|e| {
        log::error!("Failed to filter articles: {e}");
        ServiceError::from(e)
    })?;

    let pagination = Pagination {
        page: parsed.page,
        per_page: parsed.per_page,
    };
    let page = Paginated::new(articles, pagination, total);

    let author = match query.author_id {
        Some(author_id) => match repo.get_author_by_id(author_id) {
            Ok(Some(author)) => AuthorDisplayDto::from(author),
            Ok(None) => AuthorDisplayDto::anonymous(),
            Err(e) => {
                log::warn!("Failed to resolve author {author_id} for display: {e}");
                AuthorDisplayDto::anonymous()
            }
        },
        None => AuthorDisplayDto::anonymous(),
    };

    let category = match parsed.first_category {
        Some(category_id) => match repo.get_category_by_id(category_id) {
            Ok(category) => category.map(CategoryDisplayDto::from),
            Err(e) => {
                log::warn!("Failed to resolve category {category_id} for display: {e}");
                None
            }
        },
        None => None,
    };

    Ok(FilterArticlesDto {
        category_ids: (!query.category_ids.is_empty())
            .then(|| query.category_ids.iter().map(|id| id.get()).collect()),
        tag: query.tag.map(|t| t.into_inner()),
        author,
        category,
        articles: page.items.into_iter().map(ArticleSummaryDto::from).collect(),
        page: page.page,
        total: page.total,
        total_pages: page.total_pages,
    })
}

fn find_article<R>(id: ArticleId, repo: &R) -> ServiceResult<Article>
where
    R: ArticleReader,
{
    match repo.get_article_by_id(id) {
        Ok(Some(article)) => Ok(article),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get article {id}: {e}");
            Err(e.into())
        }
    }
}

/// One article with its category and author expanded.
pub fn get_article<R>(id: &str, repo: &R) -> ServiceResult<ArticleDetailDto>
where
    R: ArticleReader + AuthorReader + CategoryReader,
{
    let article_id: ArticleId = parse_path_id(id)?;
    let article = find_article(article_id, repo)?;

    let category = repo.get_category_by_id(article.category_id).map_err(|e| {
        log::error!("Failed to get category of article {article_id}: {e}");
        ServiceError::from(e)
    })?;
    let author = repo.get_author_by_id(article.author_id).map_err(|e| {
        log::error!("Failed to get author of article {article_id}: {e}");
        ServiceError::from(e)
    })?;

    Ok(ArticleDetailDto::new(article, category, author))
}

pub fn create_article<R>(payload: AddArticleFormPayload, repo: &R) -> ServiceResult<ArticleDto>
where
    R: ArticleWriter,
{
    match repo.create_article(&payload.article) {
        Ok(article) => Ok(article.into()),
        Err(e) => {
            log::error!("Failed to create article: {e}");
            Err(e.into())
        }
    }
}

/// Merge the patch onto the stored article and write the result back.
pub fn update_article<R>(
    id: &str,
    payload: UpdateArticleFormPayload,
    repo: &R,
) -> ServiceResult<ArticleDto>
where
    R: ArticleReader + ArticleWriter,
{
    let article_id: ArticleId = parse_path_id(id)?;
    let current = find_article(article_id, repo)?;

    let merged = payload.patch.apply(current)?;

    match repo.update_article(article_id, &merged) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => find_article(article_id, repo).map(ArticleDto::from),
        Err(e) => {
            log::error!("Failed to update article {article_id}: {e}");
            Err(e.into())
        }
    }
}

pub fn delete_article<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: ArticleWriter,
{
    let article_id: ArticleId = parse_path_id(id)?;

    match repo.delete_article(article_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete article {article_id}: {e}");
            Err(e.into())
        }
    }
}
