use crate::config::auth_config;
use crate::error::{Error, Result};

/// Extracts the bearer token from an `Authorization: Bearer <token>` header value.
pub fn extract_bearer(header_value: &str) -> Result<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(Error::MissingBearerPrefix)
}

/// Checks a provided API key against the configured operator secret.
/// If no secret is configured, every request is accepted (open service).
pub fn check_api_key(provided: &str) -> Result<()> {
    match &auth_config().api_key {
        None => Ok(()),
        Some(expected) if expected == provided => Ok(()),
        Some(_) => Err(Error::InvalidApiKey),
    }
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer("Bearer abc123").unwrap(), "abc123");
        assert!(extract_bearer("abc123").is_err());
    }

    #[test]
    fn test_extract_bearer_trims_whitespace() {
        assert_eq!(extract_bearer("Bearer  abc123 ").unwrap(), "abc123");
    }
}

// endregion: Unit Test
