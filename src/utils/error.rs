use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    Auth(String),
    Store(String),
    Config(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Auth(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Store(msg) => write!(f, "Store error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Store(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => {
                log::warn!("⚠️ {}", self);
                msg.clone()
            }
            AppError::Auth(detail) => {
                log::warn!("🔒 Rejected session token: {}", detail);
                "unauthorized access".to_string()
            }
            AppError::Store(_) | AppError::Config(_) | AppError::Internal(_) => {
                log::error!("❌ {}", self);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "message": message }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Store(format!("MongoDB error: {}", err))
    }
}

// Malformed ids are a store-layer failure, not a client validation error.
impl From<mongodb::bson::oid::Error> for AppError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        AppError::Store(format!("Invalid document id: {}", err))
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::Validation(format!("Body cannot be stored: {}", err))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Auth(err.to_string())
    }
}
