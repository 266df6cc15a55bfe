//! HTTP handlers and route configuration.

mod admin;
mod health;
mod presenters;
mod public;
mod session;

use actix_web::web;

/// Configure all application routes.
///
/// `/{id}` is registered after every fixed single-segment path so it only
/// catches what nothing else claims.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health::health_check))
        // Reader screens
        .route("/", web::get().to(public::feed))
        .route("/category/{category}", web::get().to(public::category))
        .route("/blog/{id}", web::get().to(public::post))
        // Session
        .service(
            web::resource("/login")
                .route(web::get().to(session::status))
                .route(web::post().to(session::login)),
        )
        .route("/logout", web::post().to(session::logout))
        // Admin (guarded)
        .route("/admin", web::get().to(admin::dashboard))
        .route("/admin/posts", web::post().to(admin::create))
        .service(
            web::resource("/admin/posts/{id}")
                .route(web::put().to(admin::update))
                .route(web::delete().to(admin::delete)),
        )
        .route("/{id}", web::get().to(public::post))
        .default_service(web::route().to(public::not_found));
}
