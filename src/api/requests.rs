use actix_web::{web, HttpResponse};
use crate::{
    database::DocumentStore,
    models::{documents_to_json, DeleteResponse, InsertResponse, MessageResponse, NewDonationRequest},
    services::request_service,
    utils::error::AppResult,
};

#[utoipa::path(
    get,
    path = "/api/request",
    tag = "Requests",
    responses(
        (status = 200, description = "Array of donation request documents"),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
pub async fn list_requests(store: web::Data<dyn DocumentStore>) -> AppResult<HttpResponse> {
    log::info!("📋 GET /request");

    let requests = request_service::list_requests(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(requests)))
}

#[utoipa::path(
    get,
    path = "/api/request/{email}",
    tag = "Requests",
    params(("email" = String, Path, description = "Donator email (matched against donator.email)")),
    responses(
        (status = 200, description = "Requests made against this donator"),
        (status = 400, description = "Email is blank", body = MessageResponse),
        (status = 404, description = "No request for this donator", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
pub async fn requests_for_donator(
    store: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
) -> AppResult<HttpResponse> {
    log::info!("🔎 GET /request/{}", email);

    let requests = request_service::requests_for_donator(store.get_ref(), &email).await?;
    log::info!("✅ Found {} requests for {}", requests.len(), email);
    Ok(HttpResponse::Ok().json(documents_to_json(requests)))
}

#[utoipa::path(
    post,
    path = "/api/request",
    tag = "Requests",
    request_body = NewDonationRequest,
    responses(
        (status = 200, description = "Request stored", body = InsertResponse),
        (status = 400, description = "Body is not a storable JSON object", body = MessageResponse)
    )
)]
pub async fn add_request(
    store: web::Data<dyn DocumentStore>,
    request: web::Json<NewDonationRequest>,
) -> AppResult<HttpResponse> {
    log::info!("📝 POST /request - donator: {}", request.donator_email().unwrap_or("N/A"));

    let result = request_service::add_request(store.get_ref(), &request).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/api/request/{id}",
    tag = "Requests",
    params(("id" = String, Path, description = "Request document id")),
    responses(
        (status = 200, description = "Delete result; deletedCount is 0 when nothing matched", body = DeleteResponse),
        (status = 500, description = "Malformed id or store error", body = MessageResponse)
    )
)]
pub async fn delete_request(
    store: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    log::info!("🗑️  DELETE /request/{}", id);

    let result = request_service::delete_request(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(result))
}
