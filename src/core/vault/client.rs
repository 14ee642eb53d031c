//! Blocking HTTP client for the Vault API.

use reqwest::blocking::{ClientBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::{SecretStore, TokenInfo};
use crate::core::constants;
use crate::core::secret::{payload_from_json, SecretPayload};
use crate::error::{Result, VaultError};

/// Vault HTTP client bound to one address.
pub struct Client {
    http: reqwest::blocking::Client,
    addr: Url,
}

/// Envelope shared by Vault read and lookup responses.
#[derive(Debug, Default, Deserialize)]
struct SecretResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
}

/// Error body returned by Vault on failure.
#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

impl Client {
    /// Create a client for the Vault instance at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Client` if the address is invalid or the HTTP
    /// client cannot be built.
    pub fn new(addr: &str) -> Result<Self> {
        Self::with_builder(addr, reqwest::blocking::Client::builder())
    }

    /// Requests have no overall deadline, only connecting is bounded.
    /// `ping` sets its own.
    fn with_builder(addr: &str, builder: ClientBuilder) -> Result<Self> {
        let addr = Url::parse(addr).map_err(|e| {
            VaultError::Client(format!("could not parse vault address {}: {}", addr, e))
        })?;
        let http = builder
            .connect_timeout(constants::VAULT_CONNECT_TIMEOUT)
            .timeout(None)
            .build()
            .map_err(|e| VaultError::Client(e.to_string()))?;
        Ok(Self { http, addr })
    }

    /// Client for the default Vault instance.
    pub fn default_instance() -> Result<Self> {
        Self::new(constants::VAULT_ADDR)
    }

    /// Address this client talks to.
    pub fn addr(&self) -> &Url {
        &self.addr
    }

    /// URL of an API path under `/v1/`.
    fn api_url(&self, path: &str) -> Result<Url> {
        let path = format!("v1/{}", path.trim_start_matches('/'));
        self.addr
            .join(&path)
            .map_err(|e| VaultError::Client(format!("invalid path {}: {}", path, e)).into())
    }

    fn get(&self, token: &str, url: Url) -> reqwest::Result<Response> {
        trace!(url = %url, "GET");
        self.http
            .get(url)
            .header(constants::VAULT_TOKEN_HEADER, token)
            .send()
    }
}

impl SecretStore for Client {
    fn ping(&self) -> Result<()> {
        debug!(addr = %self.addr, "pinging vault");
        self.http
            .get(self.addr.clone())
            .timeout(constants::VAULT_CONNECT_TIMEOUT)
            .send()
            .map_err(|e| VaultError::Unreachable(e.to_string()))?;
        Ok(())
    }

    fn lookup_self(&self, token: &str) -> Result<TokenInfo> {
        let url = self.api_url("auth/token/lookup-self")?;
        let response = self
            .get(token, url)
            .map_err(|e| VaultError::InvalidToken(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| VaultError::InvalidToken(e.to_string()))?;
        if !status.is_success() {
            return Err(VaultError::InvalidToken(error_message(status, &body)).into());
        }

        match parse_data(&body).map_err(VaultError::InvalidToken)? {
            Some(data) => Ok(TokenInfo::new(data)),
            None => Err(VaultError::InvalidToken("empty lookup response".to_string()).into()),
        }
    }

    fn read(&self, token: &str, path: &str) -> Result<Option<SecretPayload>> {
        let read_error = |reason: String| VaultError::Read {
            path: path.to_string(),
            reason,
        };

        let url = self.api_url(path)?;
        let response = self
            .get(token, url)
            .map_err(|e| read_error(e.to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|e| read_error(e.to_string()))?;

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if status == StatusCode::NOT_FOUND && error_list(&body).is_empty() {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(read_error(error_message(status, &body)).into());
        }

        Ok(parse_data(&body).map_err(read_error)?.map(payload_from_json))
    }
}

/// Extract `data` from a Vault response body.
fn parse_data(body: &str) -> std::result::Result<Option<Map<String, Value>>, String> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let response: SecretResponse =
        serde_json::from_str(body).map_err(|e| format!("invalid response: {}", e))?;
    Ok(response.data)
}

fn error_list(body: &str) -> Vec<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|r| r.errors)
        .unwrap_or_default()
}

/// Format a failed response the way the Vault CLI does.
fn error_message(status: StatusCode, body: &str) -> String {
    let errors = error_list(body);
    if errors.is_empty() {
        format!("Code: {}", status.as_u16())
    } else {
        format!("Code: {}. Errors: {}", status.as_u16(), errors.join("; "))
    }
}
