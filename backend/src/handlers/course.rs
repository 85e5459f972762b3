use actix_web::{web, HttpResponse, Result};
use shared::{ApiError, ApiSuccess};

use crate::models::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/course")
            .route("/showAllCategories", web::get().to(show_all_categories))
            .route("/categories/{slug}", web::get().to(get_category)),
    );
}

async fn show_all_categories(state: web::Data<AppState>) -> Result<HttpResponse> {
    let categories = state.catalog.categories().to_vec();
    log::debug!("Serving {} categories", categories.len());
    Ok(HttpResponse::Ok().json(ApiSuccess::new(categories)))
}

async fn get_category(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let slug = path.into_inner();

    match state.catalog.find_by_slug(&slug) {
        Some(category) => Ok(HttpResponse::Ok().json(ApiSuccess::new(category.clone()))),
        None => Ok(HttpResponse::NotFound().json(ApiError::new(
            "not_found",
            format!("No category matches '{}'", slug),
        ))),
    }
}
