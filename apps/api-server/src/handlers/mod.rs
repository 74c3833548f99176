//! HTTP handlers and route configuration.

mod authors;
mod health;
mod posts;

use actix_web::error::JsonPayloadError;
use actix_web::web;

use crate::middleware::error::AppError;
use crate::observability::RequestId;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Rejected bodies and query strings get the same problem-details shape as
    // other errors
    let json_config = web::JsonConfig::default().error_handler(|err, req| {
        let error = if matches!(err, JsonPayloadError::ContentType) {
            AppError::UnsupportedMediaType(err.to_string())
        } else {
            AppError::BadRequest(err.to_string())
        };
        error.in_request(&RequestId::of(req)).into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, req| {
        AppError::BadRequest(err.to_string())
            .in_request(&RequestId::of(req))
            .into()
    });

    cfg.app_data(json_config).app_data(query_config).service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .service(
                web::scope("/post")
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post)),
            )
            // Author routes
            .route("/author", web::post().to(authors::create_author)),
    );
}
