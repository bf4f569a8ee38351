use actix_web::{web, HttpResponse};
use serde::Deserialize;
use crate::{
    database::DocumentStore,
    models::{document_to_json, documents_to_json, DeleteResponse, FoodUpdate, InsertResponse, MessageResponse, NewFood},
    services::food_service,
    utils::error::AppResult,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FoodQuery {
    /// Only return listings posted by this donor
    pub email: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/food",
    tag = "Food",
    responses(
        (status = 200, description = "Array of food documents"),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
pub async fn list_food(
    store: web::Data<dyn DocumentStore>,
    query: web::Query<FoodQuery>,
) -> AppResult<HttpResponse> {
    log::info!("🍞 GET /food - email: {}", query.email.as_deref().unwrap_or("<all>"));

    let foods = food_service::list_food(store.get_ref(), query.email.as_deref()).await?;
    log::info!("✅ Listed {} food items", foods.len());
    Ok(HttpResponse::Ok().json(documents_to_json(foods)))
}

#[utoipa::path(
    post,
    path = "/api/food",
    tag = "Food",
    request_body = NewFood,
    responses(
        (status = 200, description = "Food stored", body = InsertResponse),
        (status = 400, description = "Body is not a storable JSON object", body = MessageResponse)
    )
)]
pub async fn add_food(
    store: web::Data<dyn DocumentStore>,
    food: web::Json<NewFood>,
) -> AppResult<HttpResponse> {
    log::info!("📝 POST /food - {}", food.food_name.as_ref().and_then(Option::as_deref).unwrap_or("<unnamed>"));

    let result = food_service::add_food(store.get_ref(), &food).await?;
    log::info!("✅ Food added: {}", result.inserted_id);
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/food/{id}",
    tag = "Food",
    params(("id" = String, Path, description = "Food document id")),
    responses(
        (status = 200, description = "The food document, or null"),
        (status = 500, description = "Malformed id or store error", body = MessageResponse)
    )
)]
pub async fn get_food(
    store: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    log::info!("🔎 GET /food/{}", id);

    let food = food_service::get_food(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(food.map(document_to_json)))
}

#[utoipa::path(
    patch,
    path = "/api/food/{id}",
    tag = "Food",
    params(("id" = String, Path, description = "Food document id")),
    request_body = FoodUpdate,
    responses(
        (status = 200, description = "Food updated", body = MessageResponse),
        (status = 400, description = "food_name or food_quantity missing", body = MessageResponse),
        (status = 404, description = "No food with this id", body = MessageResponse),
        (status = 500, description = "Malformed id or store error", body = MessageResponse)
    )
)]
pub async fn update_food(
    store: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
    update: web::Json<FoodUpdate>,
) -> AppResult<HttpResponse> {
    log::info!("🔧 PATCH /food/{} - {:?}", id, update);

    food_service::update_food(store.get_ref(), &id, &update).await?;
    log::info!("✅ Food updated: {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Food updated successfully!")))
}

#[utoipa::path(
    delete,
    path = "/api/food/{id}",
    tag = "Food",
    params(("id" = String, Path, description = "Food document id")),
    responses(
        (status = 200, description = "Delete result; deletedCount is 0 when nothing matched", body = DeleteResponse),
        (status = 500, description = "Malformed id or store error", body = MessageResponse)
    )
)]
pub async fn delete_food(
    store: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    log::info!("🗑️  DELETE /food/{}", id);

    let result = food_service::delete_food(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(result))
}
