//! Configuration management for camelgen code generation.
//!
//! The configuration names the Swagger document to read, the directory the
//! generated source tree is written to and the Java package of the generated
//! route builder. It can be created programmatically or loaded from a YAML or
//! TOML file.
//!
//! # Examples
//!
//! ```no_run
//! use camelgen_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> camelgen_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("petstore.json", "target/generated-sources/swagger-routes");
//! config.package = "org.acme.routes".to_string();
//! config.validate()?;
//!
//! // Or load from a config file
//! let config = Config::from_file("camelgen.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::fs;

static PACKAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z_$][A-Za-z0-9_$]*(?:\.[A-Za-z_$][A-Za-z0-9_$]*)*)?$")
        .expect("package pattern is valid")
});

/// Configuration for route builder generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path or URL of the Swagger document
    #[serde(default = "default_schema_path")]
    pub schema_path: String,

    /// Root directory of the generated source tree
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Java package of the generated class; empty for the default package
    #[serde(default = "default_package")]
    pub package: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            output_dir: default_output_dir(),
            package: default_package(),
        }
    }
}

/// On-disk formats a configuration can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> crate::Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => Err(crate::Error::config(format!(
                "Unsupported config file '{}': expected .yaml, .yml or .toml",
                path.display()
            ))),
        }
    }
}

impl Config {
    /// Create a new Config with the default package
    pub fn new(schema_path: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_dir: output_dir.into(),
            package: default_package(),
        }
    }

    /// Load configuration from a YAML or TOML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = fs::read_to_string(path).await?;
        let config = match format {
            Format::Yaml => serde_yaml::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        Ok(config)
    }

    /// Save configuration to a YAML or TOML file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = match Format::from_path(path)? {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Toml => toml::to_string(self)?,
        };
        fs::write(path, content).await?;
        Ok(())
    }

    /// Check the values before any file is touched
    pub fn validate(&self) -> crate::Result<()> {
        if self.schema_path.trim().is_empty() {
            return Err(crate::Error::config("schema path must not be empty"));
        }
        if self.output_dir.trim().is_empty() {
            return Err(crate::Error::config("output directory must not be empty"));
        }
        if !PACKAGE_RE.is_match(&self.package) {
            return Err(crate::Error::config(format!(
                "'{}' is not a valid Java package name",
                self.package
            )));
        }
        Ok(())
    }
}

fn default_schema_path() -> String {
    "petstore.json".to_string()
}

fn default_output_dir() -> String {
    "target/generated-sources/swagger-routes".to_string()
}

fn default_package() -> String {
    "com.example.helloworld".to_string()
}
