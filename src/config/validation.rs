//! Configuration validation.
//!
//! Serde handles syntax; this checks the values make sense together.
//! All problems are reported at once, not just the first.

use std::fmt;

use crate::config::schema::SdkConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SdkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.manager.api_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "manager.api_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new("manager.api_url", e.to_string())),
    }

    if config.manager.sort_cluster_name.trim().is_empty() {
        errors.push(ValidationError::new("manager.sort_cluster_name", "must not be empty"));
    }
    if config.manager.sort_task_id.trim().is_empty() {
        errors.push(ValidationError::new("manager.sort_task_id", "must not be empty"));
    }
    if config.manager.request_timeout_secs == 0 {
        errors.push(ValidationError::new("manager.request_timeout_secs", "must be greater than 0"));
    }
    if config.reload.interval_secs == 0 {
        errors.push(ValidationError::new("reload.interval_secs", "must be greater than 0"));
    }
    if config.reload.base_backoff_ms > config.reload.max_backoff_ms {
        errors.push(ValidationError::new(
            "reload.base_backoff_ms",
            "must not exceed reload.max_backoff_ms",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
