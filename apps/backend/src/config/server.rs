//! HTTP server settings read from the process environment.

use std::env;

use crate::config::db::must_var;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
}

impl ServerConfig {
    /// Reads `BACKEND_HOST`, `BACKEND_PORT` and the required `BACKEND_JWT_SECRET`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };
        let jwt_secret = must_var("BACKEND_JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(AppError::config("BACKEND_JWT_SECRET must not be empty"));
        }

        Ok(Self {
            host,
            port,
            jwt_secret,
        })
    }

    pub fn security(&self) -> SecurityConfig {
        SecurityConfig::new(self.jwt_secret.as_bytes())
    }
}
