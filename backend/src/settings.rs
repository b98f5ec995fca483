//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `RECIPES_*` environment variables, and an
//! optional configuration file, in that order of precedence.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{AccessPolicy, DEFAULT_PASSWORD_MIN_LENGTH, ValidationRules};
use crate::inbound::http::{ApiPaths, DEFAULT_RECIPE_PATH, DEFAULT_REGISTER_PATH};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the recipes server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPES")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. In-memory stores are used when absent.
    pub database_url: Option<String>,
    /// Require HTTP Basic credentials and enforce recipe ownership.
    #[ortho_config(default = true)]
    pub auth_enabled: bool,
    /// Prefix for recipe routes.
    pub recipe_path: Option<String>,
    /// Path of the registration endpoint.
    pub register_path: Option<String>,
    /// Minimum accepted password length at registration.
    #[ortho_config(default = 8)]
    pub password_min_length: usize,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl AppSettings {
    /// Parse the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    pub fn api_paths(&self) -> ApiPaths {
        ApiPaths {
            recipe: normalise_path(self.recipe_path.as_deref(), DEFAULT_RECIPE_PATH),
            register: normalise_path(self.register_path.as_deref(), DEFAULT_REGISTER_PATH),
        }
    }

    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy::from_auth_enabled(self.auth_enabled)
    }

    /// Validation rules; a zero minimum falls back to the default.
    pub fn validation_rules(&self) -> ValidationRules {
        let password_min_length = match self.password_min_length {
            0 => DEFAULT_PASSWORD_MIN_LENGTH,
            length => length,
        };
        ValidationRules {
            password_min_length,
        }
    }
}

/// Trim trailing slashes and ensure a leading one.
fn normalise_path(value: Option<&str>, default: &str) -> String {
    let trimmed = value.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        return default.to_owned();
    }
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "RECIPES_BIND_ADDR",
        "RECIPES_DATABASE_URL",
        "RECIPES_AUTH_ENABLED",
        "RECIPES_RECIPE_PATH",
        "RECIPES_REGISTER_PATH",
        "RECIPES_PASSWORD_MIN_LENGTH",
        "RECIPES_POOL_MAX_SIZE",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("recipes-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|var| (var, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url.is_none());
        assert!(settings.auth_enabled);
        assert_eq!(settings.access_policy(), AccessPolicy::Owned);
        assert_eq!(settings.api_paths(), ApiPaths::default());
        assert_eq!(settings.validation_rules(), ValidationRules::default());
        assert_eq!(settings.pool_max_size, 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("RECIPES_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "RECIPES_DATABASE_URL",
                Some("postgres://localhost/recipes".to_owned()),
            ),
            ("RECIPES_AUTH_ENABLED", Some("false".to_owned())),
            ("RECIPES_RECIPE_PATH", Some("v2/recipes/".to_owned())),
            ("RECIPES_REGISTER_PATH", None),
            ("RECIPES_PASSWORD_MIN_LENGTH", Some("12".to_owned())),
            ("RECIPES_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address parses").port(),
            9090
        );
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/recipes")
        );
        assert_eq!(settings.access_policy(), AccessPolicy::Open);
        assert_eq!(settings.api_paths().recipe, "/v2/recipes");
        assert_eq!(settings.api_paths().register, DEFAULT_REGISTER_PATH);
        assert_eq!(settings.validation_rules().password_min_length, 12);
        assert_eq!(settings.pool_max_size, 4);
    }

    #[rstest]
    #[case(None, "/api/recipe")]
    #[case(Some("  "), "/api/recipe")]
    #[case(Some("/"), "/api/recipe")]
    #[case(Some("/cookbook/"), "/cookbook")]
    #[case(Some("cookbook"), "/cookbook")]
    fn normalises_route_prefixes(#[case] value: Option<&str>, #[case] expected: &str) {
        assert_eq!(normalise_path(value, DEFAULT_RECIPE_PATH), expected);
    }
}
