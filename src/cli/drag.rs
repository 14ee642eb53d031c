//! Drag command - compose file plus secrets from Vault.

use std::path::Path;
use tracing::info;

use crate::cli::{output, quote};
use crate::core::compose::Compose;
use crate::core::constants;
use crate::core::manifest::Application;
use crate::core::materialize::{materialize_mount, WrittenSecret};
use crate::core::vault::{self, SecretStore, Session, TokenInfo, TokenProvider, TokenSource};
use crate::error::Result;

/// Drag secrets for the manifest at `manifest` into the current directory.
pub fn execute(manifest: &Path) -> Result<()> {
    quote::print();

    let app = Application::load(manifest)?;
    let client = vault::Client::default_instance()?;
    let written = run(
        &app,
        Path::new(constants::OUTPUT_DIR),
        client,
        &TokenSource::from_env(),
    )?;

    info!(secrets = written.len(), "drag finished");
    Ok(())
}

/// Generate the compose file, then fetch and write every mount.
///
/// The compose file is written before Vault is contacted, so it exists even
/// when a later step fails.
pub fn run<S: SecretStore>(
    app: &Application,
    base: &Path,
    store: S,
    tokens: &impl TokenProvider,
) -> Result<Vec<WrittenSecret>> {
    let compose_path = Compose::from_application(app).write(base)?;
    output::info(format!(
        "Generated {}",
        output::generated(&compose_path.display().to_string())
    ));

    output::info(format!("Fetching secrets from Vault ({})", constants::VAULT_ADDR));
    let session = Session::connect(store, tokens)?;
    report_token(session.info())?;

    let mut written = Vec::new();
    for mount in app.mounts() {
        output::info(format!(
            "Reading secret from Vault: {}",
            output::path(&mount.kv_path)
        ));
        let secrets = materialize_mount(&session, mount, base, |secret| {
            output::info(format!("Found secret {}", output::path(&secret.origin())));
        })?;
        written.extend(secrets);
    }

    Ok(written)
}

fn report_token(info: &TokenInfo) -> Result<()> {
    if let Some(name) = info.display_name() {
        output::info(format!("Logged in as {}", output::bold(name)));
    }

    let policies = info.policies()?;
    if policies.is_empty() {
        output::dimmed("The Vault token has no policies");
    } else {
        output::info(format!(
            "The Vault token has policies {}",
            policies.join(", ")
        ));
    }
    Ok(())
}
