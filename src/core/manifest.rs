//! Application manifest loading.
//!
//! Reads the subset of a nais `Application` resource rupaul cares about:
//! name, port, environment and Vault mounts. Unknown fields are ignored so
//! full manifests can be passed as-is.

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::{ManifestError, Result};

/// A nais application manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: ApplicationSpec,
}

/// Object metadata. Only the name is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
}

/// The `spec` section of the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    /// Port the application listens on. Zero or negative means no port.
    #[serde(default)]
    pub port: i32,
    #[serde(default)]
    pub env: Vec<EnvVar>,
    #[serde(default)]
    pub vault: Vault,
}

/// A single environment variable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvVar {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Vault integration settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vault {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, rename = "paths", alias = "mounts")]
    pub mounts: Vec<Mount>,
}

/// A secret path in Vault and the directory its keys are written to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mount {
    pub kv_path: String,
    pub mount_path: String,
}

impl Application {
    /// Load a manifest from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Read` if the file cannot be read,
    /// `ManifestError::Parse` if the YAML is malformed, and
    /// `ManifestError::MissingName` if `metadata.name` is empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading manifest");

        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let app = Self::parse(&contents).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if app.name().is_empty() {
            return Err(ManifestError::MissingName {
                path: path.to_path_buf(),
            }
            .into());
        }

        debug!(
            name = app.name(),
            env = app.spec.env.len(),
            mounts = app.spec.vault.mounts.len(),
            "manifest loaded"
        );
        Ok(app)
    }

    /// Parse a manifest from YAML text.
    pub fn parse(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    /// Application name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Vault mounts, in manifest order.
    pub fn mounts(&self) -> &[Mount] {
        &self.spec.vault.mounts
    }
}

impl Mount {
    /// Local directory this mount's secrets are written to, relative to `base`.
    ///
    /// Mount paths are usually absolute in-container paths such as
    /// `/var/run/secrets/nais.io/vault`; the root is dropped so they land
    /// under `base` instead of at the filesystem root.
    pub fn destination(&self, base: &Path) -> PathBuf {
        let mut dir = base.to_path_buf();
        for component in Path::new(&self.mount_path).components() {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
                other => dir.push(other),
            }
        }
        dir
    }
}
