use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpResponse};
use serde_json::Value;
use crate::{
    models::{MessageResponse, SuccessResponse},
    services::auth_service::{SessionTokens, TOKEN_COOKIE},
    utils::error::AppResult,
};

// Cross-site front ends need SameSite=None, which browsers only accept on
// secure cookies.
fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, value)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .finish()
}

#[utoipa::path(
    post,
    path = "/api/jwt",
    tag = "Auth",
    responses(
        (status = 200, description = "Token issued as the `token` cookie", body = SuccessResponse),
        (status = 400, description = "Payload is not a JSON object", body = MessageResponse)
    )
)]
pub async fn issue_token(
    tokens: web::Data<SessionTokens>,
    payload: web::Json<Value>,
) -> AppResult<HttpResponse> {
    log::info!("🔐 POST /jwt - user for token: {}", payload);

    let token = tokens.issue(&payload)?;
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token))
        .json(SuccessResponse { success: true }))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Session cookie cleared", body = SuccessResponse)
    )
)]
pub async fn logout() -> HttpResponse {
    log::info!("👋 POST /logout");

    let mut cookie = session_cookie(String::new());
    cookie.make_removal();
    HttpResponse::Ok()
        .cookie(cookie)
        .json(SuccessResponse { success: true })
}
