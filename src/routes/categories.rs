use actix_web::http::StatusCode;
use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::categories::{CategoryForm, CategoryFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, error_response, respond};
use crate::services::ServiceError;
use crate::services::categories::{
    add_category as add_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    update_category as update_category_service,
};

const NOT_FOUND: &str = "Category not found";

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => respond(StatusCode::OK, ApiResponse::success("success", categories)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_category_service(&category_id, repo.get_ref()) {
        Ok(category) => respond(StatusCode::OK, ApiResponse::success("success", category)),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let payload: CategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), NOT_FOUND),
    };

    match add_category_service(payload, repo.get_ref()) {
        Ok(category) => respond(
            StatusCode::CREATED,
            ApiResponse::success("Category added successfully", category),
        ),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let payload: CategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), NOT_FOUND),
    };

    match update_category_service(&category_id, payload, repo.get_ref()) {
        Ok(category) => respond(
            StatusCode::OK,
            ApiResponse::success("Category updated successfully", category),
        ),
        Err(err) => error_response(err, NOT_FOUND),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_category_service(&category_id, repo.get_ref()) {
        Ok(()) => respond(
            StatusCode::OK,
            ApiResponse::message("Category deleted successfully"),
        ),
        Err(err) => error_response(err, NOT_FOUND),
    }
}
