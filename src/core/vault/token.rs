//! Vault token resolution.
//!
//! Mirrors how the Vault CLI finds a token: `VAULT_TOKEN` first, then the
//! configured token helper. Without a `token_helper` entry in the CLI config
//! the internal helper is used, which caches the token in `~/.vault-token`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;
use zeroize::Zeroizing;

use super::Token;
use crate::core::constants;
use crate::error::{Result, TokenError};

/// Something that can produce a Vault token.
pub trait TokenProvider {
    /// Resolve a token.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::NotLoggedIn` if no token is available.
    fn token(&self) -> Result<Token>;
}

/// Token lookup following the Vault CLI rules.
#[derive(Debug, Clone, Default)]
pub struct TokenSource {
    env_token: Option<String>,
    home: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

/// The part of the Vault CLI config file rupaul reads.
#[derive(Debug, Default, Deserialize)]
struct CliConfig {
    #[serde(default)]
    token_helper: Option<String>,
}

impl TokenSource {
    /// Read token locations from the process environment.
    pub fn from_env() -> Self {
        Self {
            env_token: std::env::var(constants::VAULT_TOKEN_ENV).ok(),
            home: dirs::home_dir(),
            config_path: std::env::var_os(constants::VAULT_CONFIG_PATH_ENV).map(PathBuf::from),
        }
    }

    /// Use `token` as if it came from `VAULT_TOKEN`.
    pub fn with_env_token(mut self, token: impl Into<String>) -> Self {
        self.env_token = Some(token.into());
        self
    }

    /// Use `home` as the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Use `path` as the Vault CLI config file.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    fn config_file(&self) -> Option<PathBuf> {
        self.config_path.clone().or_else(|| {
            self.home
                .as_ref()
                .map(|home| home.join(constants::VAULT_CONFIG_FILE))
        })
    }

    /// Token helper program configured for the Vault CLI, if any.
    fn token_helper(&self) -> Result<Option<String>> {
        let Some(path) = self.config_file() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| TokenError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let config: CliConfig = toml::from_str(&contents).map_err(|e| TokenError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        Ok(config.token_helper.filter(|helper| !helper.trim().is_empty()))
    }

    /// Ask an external token helper for the token.
    fn helper_token(helper: &str) -> Result<Token> {
        let helper_error = |reason: String| TokenError::Helper {
            helper: helper.to_string(),
            reason,
        };

        let program = if Path::new(helper).is_absolute() {
            PathBuf::from(helper)
        } else {
            which::which(helper).map_err(|e| helper_error(e.to_string()))?
        };
        debug!(helper = %program.display(), "running token helper");

        let output = Command::new(&program)
            .arg("get")
            .output()
            .map_err(|e| helper_error(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(helper_error(stderr.trim().to_string()).into());
        }

        let stdout = Zeroizing::new(output.stdout);
        let token = String::from_utf8_lossy(&stdout);
        Ok(Zeroizing::new(token.trim().to_string()))
    }

    /// Read the token cached by the internal helper.
    fn cached_token(&self) -> Result<Token> {
        let Some(home) = &self.home else {
            return Ok(Token::default());
        };
        let path = home.join(constants::VAULT_TOKEN_FILE);
        debug!(path = %path.display(), "reading cached token");

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let contents = Zeroizing::new(contents);
                Ok(Zeroizing::new(contents.trim().to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Token::default()),
            Err(source) => Err(TokenError::File { path, source }.into()),
        }
    }
}

impl TokenProvider for TokenSource {
    fn token(&self) -> Result<Token> {
        if let Some(token) = self.env_token.as_deref().filter(|t| !t.is_empty()) {
            debug!("using token from {}", constants::VAULT_TOKEN_ENV);
            return Ok(Zeroizing::new(token.to_string()));
        }

        let token = match self.token_helper()? {
            Some(helper) => Self::helper_token(&helper)?,
            None => self.cached_token()?,
        };

        if token.is_empty() {
            return Err(TokenError::NotLoggedIn.into());
        }
        Ok(token)
    }
}
