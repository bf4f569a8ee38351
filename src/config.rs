//! Process configuration, read from the environment after `.env` is loaded.

use crate::utils::error::{AppError, AppResult};
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:5173,https://food-station-client.vercel.app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo { uri: String, database: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub token_secret: String,
    pub allowed_origins: Vec<String>,
    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got '{}'", raw)))?,
            None => 5000,
        };

        let store = match lookup("STORE_BACKEND").as_deref().unwrap_or("mongodb") {
            "memory" => StoreBackend::Memory,
            "mongodb" => StoreBackend::Mongo {
                uri: mongo_uri(&lookup)?,
                database: lookup("DB_NAME").unwrap_or_else(|| "foodStation".to_string()),
            },
            other => {
                return Err(AppError::Config(format!(
                    "STORE_BACKEND must be 'mongodb' or 'memory', got '{}'",
                    other
                )))
            }
        };

        let token_secret = lookup("ACCESS_TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Config("ACCESS_TOKEN_SECRET must be set".to_string()))?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let api_prefix = normalize_prefix(&lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string()));

        Ok(Self {
            host,
            port,
            store,
            token_secret,
            allowed_origins,
            api_prefix,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn mongo_uri<F>(lookup: &F) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    match (lookup("DB_USER"), lookup("DB_PASS"), lookup("DB_CLUSTER")) {
        (Some(user), Some(pass), Some(cluster)) => Ok(format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            user, pass, cluster
        )),
        _ => Err(AppError::Config(
            "set DATABASE_URL, or DB_USER, DB_PASS and DB_CLUSTER".to_string(),
        )),
    }
}

// "api", "/api/" and "/api" all mount at "/api"; "" and "/" mount at the root.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_memory_backend() {
        let config = Config::from_lookup(lookup_from(&[
            ("STORE_BACKEND", "memory"),
            ("ACCESS_TOKEN_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_mongo_uri_composed_from_parts() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_USER", "alice"),
            ("DB_PASS", "pw"),
            ("DB_CLUSTER", "cluster0.example.net"),
            ("ACCESS_TOKEN_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(
            config.store,
            StoreBackend::Mongo {
                uri: "mongodb+srv://alice:pw@cluster0.example.net/?retryWrites=true&w=majority".to_string(),
                database: "foodStation".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("STORE_BACKEND", "memory")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_database_settings_are_rejected() {
        let result = Config::from_lookup(lookup_from(&[("ACCESS_TOKEN_SECRET", "s3cret")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_prefix_normalization() {
        assert_eq!(normalize_prefix("api/"), "/api");
        assert_eq!(normalize_prefix("/app"), "/app");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
    }
}
