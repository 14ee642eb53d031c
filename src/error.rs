//! Error types.
//!
//! Each stage of the drag pipeline has its own error enum. They are all
//! wrapped by [`Error`] so stages can propagate with `?` and `main` can
//! print a single message before exiting.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),
}

/// Reading or parsing the application manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("could not read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("manifest {} has no metadata.name", .path.display())]
    MissingName { path: PathBuf },
}

/// Generating docker-compose.yml.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("could not serialize docker-compose file: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolving a Vault token.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("looks like you're not logged in to vault. Run \"vault login -method=oidc\" to login")]
    NotLoggedIn,

    #[error("could not read vault config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("could not get vault token from token helper {helper}: {reason}")]
    Helper { helper: String, reason: String },

    #[error("could not read vault token file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Talking to Vault.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("could not create vault client: {0}")]
    Client(String),

    #[error("could not connect to vault - network problem? {0}")]
    Unreachable(String),

    #[error(
        "could not verify the validity of the vault token - it may be invalid or expired. {0}"
    )]
    InvalidToken(String),

    #[error("unable to convert token policies to expected format")]
    Policies,

    #[error("could not read secret {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("no secret found at {0}")]
    SecretNotFound(String),
}

/// Writing secrets to disk.
#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("secret {key} has invalid type: expected string, found {kind}")]
    InvalidType { key: String, kind: &'static str },

    #[error("secret {key} from {path} is not a valid file name")]
    InvalidKey { path: String, key: String },

    #[error("could not make directory {}: {source}", .dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write secret to {}: {source}", .file.display())]
    Write {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
