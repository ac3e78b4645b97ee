use actix_web::http::StatusCode;
use actix_web::{Responder, delete, get, post, web};

use crate::forms::tags::{AddTagForm, AddTagFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, error_response, respond};
use crate::services::ServiceError;
use crate::services::tags::{
    TagCreation, add_tag as add_tag_service, delete_tag as delete_tag_service,
    list_tags as list_tags_service,
};

const NOT_FOUND: &str = "Tag not found";

#[get("/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_tags_service(repo.get_ref()) {
        Ok(tags) => respond(StatusCode::OK, ApiResponse::success("success", tags)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddTagForm>,
) -> impl Responder {
    let payload: AddTagFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), NOT_FOUND),
    };

    match add_tag_service(payload, repo.get_ref()) {
        Ok(TagCreation::Created(tag)) => respond(
            StatusCode::CREATED,
            ApiResponse::success("Tag added successfully", tag),
        ),
        Ok(TagCreation::Existing(tag)) => {
            respond(StatusCode::OK, ApiResponse::success("Tag already exists", tag))
        }
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    tag_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_tag_service(&tag_id, repo.get_ref()) {
        Ok(()) => respond(StatusCode::OK, ApiResponse::message("Tag deleted successfully")),
        Err(err) => error_response(err, NOT_FOUND),
    }
}
