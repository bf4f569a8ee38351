pub mod auth_service;
pub mod food_service;
pub mod request_service;
pub mod user_service;
