//! Service configuration
//!
//! The transcript-processing service address comes from the environment so
//! deployments can point the client anywhere without a rebuild.

use thiserror::Error;

use crate::submission::client::ServiceEndpoint;

/// Environment variable holding the service base URL.
pub const SERVER_URL_ENV: &str = "BUZZDROP_SERVER_URL";

/// Errors from loading the service configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BUZZDROP_SERVER_URL is not set; export it or add it to a .env file")]
    MissingServerUrl,
}

/// Client-side service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the transcript-processing service
    pub server_url: String,
}

impl ServiceConfig {
    /// Load configuration, reading a `.env` file first if one exists
    /// (development convenience).
    pub fn load() -> Result<Self, ConfigError> {
        match dotenv::dotenv() {
            Ok(path) => log::debug!("[Config] Loaded .env file from: {:?}", path),
            Err(e) => log::debug!("[Config] No .env file found or error loading it: {}", e),
        }
        Self::from_env()
    }

    /// Read configuration from already-populated environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url =
            std::env::var(SERVER_URL_ENV).map_err(|_| ConfigError::MissingServerUrl)?;
        Ok(Self { server_url })
    }

    /// Endpoint for the submission client
    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(self.server_url.clone())
    }
}
