//! Constants used throughout rupaul.
//!
//! Centralizes magic strings and configuration values.

use std::time::Duration;

/// Vault instance all secrets are read from.
pub const VAULT_ADDR: &str = "https://vault.adeo.no";

/// Connect timeout for the Vault client.
pub const VAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the Vault token.
pub const VAULT_TOKEN_HEADER: &str = "X-Vault-Token";

/// Environment variable holding a Vault token.
pub const VAULT_TOKEN_ENV: &str = "VAULT_TOKEN";

/// Environment variable overriding the Vault CLI config file location.
pub const VAULT_CONFIG_PATH_ENV: &str = "VAULT_CONFIG_PATH";

/// Vault CLI config file relative to HOME (~/.vault).
pub const VAULT_CONFIG_FILE: &str = ".vault";

/// File the Vault CLI internal token helper caches the token in (~/.vault-token).
pub const VAULT_TOKEN_FILE: &str = ".vault-token";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "RUPAUL_LOG";

/// Generated compose file name.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Compose file format version.
pub const COMPOSE_VERSION: &str = "3";

/// Build context of the generated service.
pub const COMPOSE_BUILD: &str = ".";

/// Volume exposing `./secrets` inside the container when Vault is enabled.
pub const SECRETS_VOLUME: &str = "${PWD}/secrets:/secrets";

/// Directory generated files are written to.
pub const OUTPUT_DIR: &str = ".";
