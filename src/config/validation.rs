//! Semantic configuration checks, applied after deserialization.

use url::Url;

use crate::config::schema::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address must not be empty")]
    EmptyBindAddress,

    #[error("lookup.base_url is not a valid URL: {0}")]
    InvalidBackendUrl(String),

    #[error("lookup.timeout_ms must be greater than zero")]
    ZeroLookupTimeout,
}

/// Validate semantic constraints serde cannot express.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.trim().is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }

    if let Err(e) = Url::parse(&config.lookup.base_url) {
        errors.push(ValidationError::InvalidBackendUrl(e.to_string()));
    }

    if config.lookup.timeout_ms == 0 {
        errors.push(ValidationError::ZeroLookupTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
