pub mod auth;
pub mod food;
pub mod health;
pub mod requests;
pub mod swagger;
pub mod users;


use actix_web::{web, HttpResponse};
use crate::utils::error::AppError;

async fn banner() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("food is coming")
}

/// Malformed JSON bodies become a 400 with a JSON `message`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

/// Registers every route, mounting the API under `prefix` ("" for the root).
///
/// Expects `web::Data<dyn DocumentStore>` and `web::Data<SessionTokens>` in
/// app data.
pub fn routes(cfg: &mut web::ServiceConfig, prefix: &str) {
    let banner_path = if prefix.is_empty() { "/" } else { prefix };

    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .route(banner_path, web::get().to(banner))
        .service(
            web::scope(prefix)
                // Food
                .route("/food", web::get().to(food::list_food))
                .route("/food", web::post().to(food::add_food))
                .route("/food/{id}", web::get().to(food::get_food))
                .route("/food/{id}", web::patch().to(food::update_food))
                .route("/food/{id}", web::delete().to(food::delete_food))
                // Users
                .route("/users", web::get().to(users::list_users))
                .route("/users", web::post().to(users::add_user))
                // Donation requests
                .route("/request", web::get().to(requests::list_requests))
                .route("/request", web::post().to(requests::add_request))
                .route("/request/{email}", web::get().to(requests::requests_for_donator))
                .route("/request/{id}", web::delete().to(requests::delete_request))
                // Session
                .route("/jwt", web::post().to(auth::issue_token))
                .route("/logout", web::post().to(auth::logout)),
        );
}
