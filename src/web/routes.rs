use actix_web::web;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health-query", web::post().to(handlers::health_query))
            .route("/symptom-checker", web::post().to(handlers::symptom_checker))
            .route("/clinic-finder", web::post().to(handlers::clinic_finder))
    )
    .route("/", web::get().to(handlers::liveness))
    .route("/app", web::get().to(handlers::chat_page));
}
