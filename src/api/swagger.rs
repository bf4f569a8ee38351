use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Station API",
        version = "1.0.0",
        description = "Food-donation tracking backend.\n\nRoutes are documented under the default `/api` prefix; `API_PREFIX` moves them.\n\n**Session:** `POST /api/jwt` sets an http-only `token` cookie valid for one hour."
    ),
    paths(
        // Food
        crate::api::food::list_food,
        crate::api::food::add_food,
        crate::api::food::get_food,
        crate::api::food::update_food,
        crate::api::food::delete_food,

        // Users
        crate::api::users::list_users,
        crate::api::users::add_user,

        // Requests
        crate::api::requests::list_requests,
        crate::api::requests::requests_for_donator,
        crate::api::requests::add_request,
        crate::api::requests::delete_request,

        // Auth
        crate::api::auth::issue_token,
        crate::api::auth::logout,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::NewFood,
            crate::models::FoodUpdate,
            crate::models::Quantity,
            crate::models::NewUser,
            crate::models::NewDonationRequest,
            crate::models::Donator,
            crate::models::InsertResponse,
            crate::models::DeleteResponse,
            crate::models::MessageResponse,
            crate::models::SuccessResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Food", description = "Food listings posted by donors."),
        (name = "Users", description = "Registered users."),
        (name = "Requests", description = "Pickup requests made against a donator's listing."),
        (name = "Auth", description = "Session cookie issuance."),
        (name = "Health", description = "Liveness and store connectivity."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/food",
            "/api/food/{id}",
            "/api/users",
            "/api/request",
            "/api/request/{email}",
            "/api/request/{id}",
            "/api/jwt",
            "/api/logout",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
