//! docker-compose descriptor generation.
//!
//! Builds a single-service compose file from an [`Application`] so the app
//! can be started locally with `docker compose up`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::manifest::Application;
use crate::error::{ComposeError, Result};

/// A docker-compose file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compose {
    pub version: String,
    pub services: BTreeMap<String, Service>,
}

/// One service in a compose file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub build: String,
    pub image: String,
    pub volumes: Vec<String>,
    pub ports: Vec<String>,
    pub environment: BTreeMap<String, String>,
}

impl Service {
    /// Derive the service for an application.
    pub fn from_application(app: &Application) -> Self {
        let mut service = Self {
            build: constants::COMPOSE_BUILD.to_string(),
            image: app.name().to_string(),
            volumes: Vec::new(),
            ports: Vec::new(),
            environment: BTreeMap::new(),
        };

        if app.spec.port > 0 {
            service
                .ports
                .push(format!("{port}:{port}", port = app.spec.port));
        }

        if app.spec.vault.enabled {
            service.volumes.push(constants::SECRETS_VOLUME.to_string());
        }

        // Last entry wins for duplicate names
        for var in &app.spec.env {
            service
                .environment
                .insert(var.name.clone(), var.value.clone());
        }

        service
    }
}

impl Compose {
    /// Build a compose file holding exactly one service, keyed by app name.
    pub fn from_application(app: &Application) -> Self {
        let mut services = BTreeMap::new();
        services.insert(app.name().to_string(), Service::from_application(app));
        Self {
            version: constants::COMPOSE_VERSION.to_string(),
            services,
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self).map_err(ComposeError::Serialize)?)
    }

    /// Write `docker-compose.yml` into `dir`, creating it if needed.
    ///
    /// Any existing file is overwritten. Returns the path written.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(constants::COMPOSE_FILE);
        let yaml = self.to_yaml()?;

        std::fs::create_dir_all(dir).map_err(|source| ComposeError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
        std::fs::write(&path, yaml).map_err(|source| ComposeError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "compose file written");
        Ok(path)
    }
}
