use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod articles;
pub mod authors;
pub mod categories;
pub mod tags;

/// Body shared by every API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// `1` on success, `0` on failure.
    pub status: u8,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 1,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: 1,
            message: message.into(),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
            data: None,
        }
    }
}

pub fn respond<T: Serialize>(status: StatusCode, body: ApiResponse<T>) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

/// Translate a service failure into an envelope with `status: 0`.
///
/// `not_found` names the missing resource, e.g. "Article not found".
pub fn error_response(err: ServiceError, not_found: &str) -> HttpResponse {
    let (status, message) = match err {
        ServiceError::NotFound => (StatusCode::NOT_FOUND, not_found.to_string()),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            (StatusCode::BAD_REQUEST, message)
        }
        ServiceError::Internal(message) => {
            log::error!("Request failed: {message}");
            (StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    };
    respond(status, ApiResponse::failure(message))
}

/// Reject malformed JSON bodies with a 400 envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = respond(
            StatusCode::BAD_REQUEST,
            ApiResponse::failure(format!("Invalid request body: {err}")),
        );
        InternalError::from_response(err, response).into()
    })
}

/// Register every API route under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            // `/articles/filter` must be registered before `/articles/{id}`.
            .service(articles::filter_articles)
            .service(articles::list_articles)
            .service(articles::create_article)
            .service(articles::update_article)
            .service(articles::delete_article)
            .service(articles::get_article)
            .service(categories::list_categories)
            .service(categories::add_category)
            .service(categories::get_category)
            .service(categories::update_category)
            .service(categories::delete_category)
            .service(authors::list_authors)
            .service(authors::add_author)
            .service(authors::get_author)
            .service(authors::update_author)
            .service(authors::delete_author)
            .service(tags::list_tags)
            .service(tags::add_tag)
            .service(tags::delete_tag),
    );
}
