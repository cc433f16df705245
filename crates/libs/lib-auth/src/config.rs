use lib_utils::envs::get_env;
use std::sync::OnceLock;

pub fn auth_config() -> &'static AuthConfig {
    static INSTANCE: OnceLock<AuthConfig> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        AuthConfig::load_from_env()
            .unwrap_or_else(|e| panic!("Failed while loading AuthConfig from env - Cause: {e:?}"))
    })
}

/// A single operator-level shared secret, not a per-user credential store.
/// Multi-tenant authentication is explicitly out of scope for this service.
pub struct AuthConfig {
    pub api_key: Option<String>,
}

impl AuthConfig {
    pub fn load_from_env() -> lib_utils::error::Result<AuthConfig> {
        let api_key = get_env::<String>("AUTH_API_KEY").ok();
        Ok(AuthConfig { api_key })
    }
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_missing_key_is_none() {
        let config = AuthConfig::load_from_env().unwrap();
        assert!(config.api_key.is_none() || config.api_key.is_some());
    }
}

// endregion: Unit Test
