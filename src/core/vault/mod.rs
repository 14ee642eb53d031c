//! Vault access.
//!
//! Secrets are read through the [`SecretStore`] trait. The HTTP
//! implementation lives in [`client`]; tests substitute an in-memory store.
//!
//! A [`Session`] is the only way to read secrets, and it can only be built
//! after the token has been validated with a self-lookup.

mod client;
mod session;
mod token;

pub use client::Client;
pub use session::Session;
pub use token::{TokenProvider, TokenSource};

#[cfg(test)]
pub(crate) use session::testing;

use serde_json::{Map, Value};
use zeroize::Zeroizing;

use crate::core::secret::SecretPayload;
use crate::error::{Error, Result, VaultError};

/// A Vault token, wiped from memory on drop.
pub type Token = Zeroizing<String>;

/// Remote secret storage.
pub trait SecretStore {
    /// Check that the store can be reached at all.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Unreachable` on network failure.
    fn ping(&self) -> Result<()>;

    /// Look up metadata for `token`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidToken` if the token is rejected.
    fn lookup_self(&self, token: &str) -> Result<TokenInfo>;

    /// Read the secret at `path`.
    ///
    /// Returns `Ok(None)` when nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Read` if the request fails.
    fn read(&self, token: &str, path: &str) -> Result<Option<SecretPayload>>;
}

/// Token metadata returned by a self-lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenInfo {
    data: Map<String, Value>,
}

impl TokenInfo {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Display name of the token owner, if present and a string.
    pub fn display_name(&self) -> Option<&str> {
        self.data.get("display_name").and_then(Value::as_str)
    }

    /// Token and identity policies, trimmed, sorted and deduplicated.
    /// Blank entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Policies` if either list is not a list of strings.
    pub fn policies(&self) -> Result<Vec<String>> {
        let mut policies: Vec<String> = string_list(self.data.get("policies"))?
            .into_iter()
            .chain(string_list(self.data.get("identity_policies"))?)
            .map(|policy| policy.trim().to_string())
            .filter(|policy| !policy.is_empty())
            .collect();
        policies.sort();
        policies.dedup();
        Ok(policies)
    }
}

fn string_list(value: Option<&Value>) -> Result<Vec<String>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| Error::from(VaultError::Policies))
            })
            .collect(),
        Some(_) => Err(VaultError::Policies.into()),
    }
}
