use actix_web::{web, HttpResponse};
use crate::{
    database::DocumentStore,
    models::{documents_to_json, InsertResponse, MessageResponse, NewUser},
    services::user_service,
    utils::error::AppResult,
};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Array of user documents"),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
pub async fn list_users(store: web::Data<dyn DocumentStore>) -> AppResult<HttpResponse> {
    log::info!("👥 GET /users");

    let users = user_service::list_users(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(users)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User stored", body = InsertResponse),
        (status = 400, description = "Body is not a storable JSON object", body = MessageResponse)
    )
)]
pub async fn add_user(
    store: web::Data<dyn DocumentStore>,
    user: web::Json<NewUser>,
) -> AppResult<HttpResponse> {
    log::info!("📝 POST /users - email: {}", user.email().unwrap_or("N/A"));

    let result = user_service::add_user(store.get_ref(), &user).await?;
    Ok(HttpResponse::Ok().json(result))
}
