//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::liveness)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .service(
                        web::resource(["", "/"])
                            .route(web::get().to(posts::get_all_posts))
                            .route(web::post().to(posts::create_post)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(posts::get_post_by_id))
                            .route(web::put().to(posts::update_post))
                            .route(web::delete().to(posts::delete_post)),
                    ),
            ),
    );
}

/// JSON extractor config: malformed bodies answer 400 `{message}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
