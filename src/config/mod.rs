#[cfg(feature = "cli")]
pub mod cli;

use crate::types::session::{SESSION_TYPE_DESKTOP, SESSION_TYPE_WS};
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub service: ServiceConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub session_type: Option<i32>,
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InventoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values,
    /// leaving unknown placeholders untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InventoryError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn endpoint(&self) -> &str {
        &self.service.endpoint
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.service.timeout_seconds.unwrap_or(30)
    }

    pub fn session_type(&self) -> i32 {
        self.auth.session_type.unwrap_or(SESSION_TYPE_WS)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service.endpoint", &self.service.endpoint)?;
        validation::validate_non_empty_string("auth.username", &self.auth.username)?;
        validation::validate_non_empty_string("auth.password", &self.auth.password)?;

        if let Some(session_type) = self.auth.session_type {
            validation::validate_range(
                "auth.session_type",
                session_type,
                SESSION_TYPE_DESKTOP,
                SESSION_TYPE_WS,
            )?;
        }

        Ok(())
    }
}
