use actix_web::http::StatusCode;
use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::articles::{
    AddArticleForm, AddArticleFormPayload, UpdateArticleForm, UpdateArticleFormPayload,
};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, error_response, respond};
use crate::services::ServiceError;
use crate::services::articles::{
    FilterArticlesParams, create_article as create_article_service,
    delete_article as delete_article_service, filter_articles as filter_articles_service,
    get_article as get_article_service, list_articles as list_articles_service,
    update_article as update_article_service,
};

const NOT_FOUND: &str = "Article not found";

#[get("/articles")]
pub async fn list_articles(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_articles_service(repo.get_ref()) {
        Ok(articles) => respond(StatusCode::OK, ApiResponse::success("success", articles)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[get("/articles/filter")]
pub async fn filter_articles(
    query: web::Query<Vec<(String, String)>>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let params = FilterArticlesParams::from_pairs(query.into_inner());

    match filter_articles_service(&params, server_config.page_size, repo.get_ref()) {
        Ok(result) => respond(StatusCode::OK, ApiResponse::success("success", result)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[post("/articles/create")]
pub async fn create_article(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddArticleForm>,
) -> impl Responder {
    let payload: AddArticleFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), NOT_FOUND),
    };

    match create_article_service(payload, repo.get_ref()) {
        Ok(article) => respond(
            StatusCode::CREATED,
            ApiResponse::success("Article created", article),
        ),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[put("/articles/edit/{article_id}")]
pub async fn update_article(
    article_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateArticleForm>,
) -> impl Responder {
    let payload: UpdateArticleFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), NOT_FOUND),
    };

    match update_article_service(&article_id, payload, repo.get_ref()) {
        Ok(article) => respond(
            StatusCode::OK,
            ApiResponse::success("Article updated", article),
        ),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[delete("/articles/delete/{article_id}")]
pub async fn delete_article(
    article_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_article_service(&article_id, repo.get_ref()) {
        Ok(()) => respond(StatusCode::OK, ApiResponse::message("Article deleted")),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[get("/articles/{article_id}")]
pub async fn get_article(
    article_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_article_service(&article_id, repo.get_ref()) {
        Ok(article) => respond(StatusCode::OK, ApiResponse::success("success", article)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}
