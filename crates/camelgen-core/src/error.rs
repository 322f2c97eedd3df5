//! Error handling for the camelgen code generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! Only the collaborators around the transform (specification loading,
//! configuration and file emission) can fail. Turning a loaded
//! [`Specification`](crate::model::Specification) into route statements never
//! returns an error.
//!
//! # Examples
//!
//! ```
//! use camelgen_core::error::{Error, Result};
//!
//! fn check_package(package: &str) -> Result<()> {
//!     if package.is_empty() {
//!         return Err(Error::config("package must not be empty"));
//!     }
//!     Ok(())
//! }
//! # assert!(check_package("com.example").is_ok());
//! ```

use thiserror::Error;

/// Result type for camelgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for camelgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// HTTP error while fetching a remote specification
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Swagger/OpenAPI document error
    #[error("OpenAPI error: {0}")]
    OpenApi(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new OpenAPI error
    pub fn openapi<S: Into<String>>(msg: S) -> Self {
        Self::OpenApi(msg.into())
    }
}
