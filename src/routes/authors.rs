use actix_web::http::StatusCode;
use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::authors::{
    AddAuthorForm, AddAuthorFormPayload, UpdateAuthorForm, UpdateAuthorFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, error_response, respond};
use crate::services::ServiceError;
use crate::services::authors::{
    add_author as add_author_service, delete_author as delete_author_service,
    get_author as get_author_service, list_authors as list_authors_service,
    update_author as update_author_service,
};

const NOT_FOUND: &str = "Author not found";

#[get("/authors")]
pub async fn list_authors(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_authors_service(repo.get_ref()) {
        Ok(authors) => respond(StatusCode::OK, ApiResponse::success("success", authors)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[get("/authors/{author_id}")]
pub async fn get_author(
    author_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_author_service(&author_id, repo.get_ref()) {
        Ok(author) => respond(StatusCode::OK, ApiResponse::success("success", author)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[post("/authors")]
pub async fn add_author(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddAuthorForm>,
) -> impl Responder {
    let payload: AddAuthorFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), NOT_FOUND),
    };

    match add_author_service(payload, repo.get_ref()) {
        Ok(author) => respond(
            StatusCode::CREATED,
            ApiResponse::success("Author created", author),
        ),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[put("/authors/{author_id}")]
pub async fn update_author(
    author_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateAuthorForm>,
) -> impl Responder {
    let payload: UpdateAuthorFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), NOT_FOUND),
    };

    match update_author_service(&author_id, payload, repo.get_ref()) {
        Ok(author) => respond(StatusCode::OK, ApiResponse::success("Author updated", author)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[delete("/authors/{author_id}")]
pub async fn delete_author(
    author_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_author_service(&author_id, repo.get_ref()) {
        Ok(()) => respond(StatusCode::OK, ApiResponse::message("Author deleted")),
        Err(err) => error_response(err, NOT_FOUND),
    }
}
