use actix_web::web;

pub mod course;
pub mod spa;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(course::configure));
}
