//! Authenticated Vault session.

use tracing::{debug, info};

use super::{SecretStore, Token, TokenInfo, TokenProvider};
use crate::core::secret::SecretPayload;
use crate::error::{Result, VaultError};

/// A secret store paired with a token that passed self-lookup.
pub struct Session<S> {
    store: S,
    token: Token,
    info: TokenInfo,
}

impl<S: SecretStore> Session<S> {
    /// Connect to `store` and validate a token from `tokens`.
    ///
    /// Checks connectivity before resolving the token, and resolves the
    /// token before any request that needs one.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Unreachable` if the store cannot be reached,
    /// `TokenError` if no token can be resolved, and
    /// `VaultError::InvalidToken` if the self-lookup fails.
    pub fn connect(store: S, tokens: &impl TokenProvider) -> Result<Self> {
        store.ping()?;
        let token = tokens.token()?;
        Self::login(store, token)
    }

    /// Validate `token` against `store`.
    pub fn login(store: S, token: Token) -> Result<Self> {
        let info = store.lookup_self(&token)?;
        info!("token validated");
        Ok(Self { store, token, info })
    }

    /// Metadata from the self-lookup.
    pub fn info(&self) -> &TokenInfo {
        &self.info
    }

    /// Read the secret at `path`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::SecretNotFound` if nothing is stored at `path`,
    /// or the store's read error.
    pub fn read(&self, path: &str) -> Result<SecretPayload> {
        debug!(path, "reading secret");
        self.store
            .read(&self.token, path)?
            .ok_or_else(|| VaultError::SecretNotFound(path.to_string()).into())
    }
}
