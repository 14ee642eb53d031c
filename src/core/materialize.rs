//! Writing secrets to disk.
//!
//! Each key of a secret becomes one file under the mount's destination
//! directory. Nothing is rolled back on failure: files written before an
//! error stay on disk.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::core::manifest::Mount;
use crate::core::secret::{effective_payload, SecretPayload, SecretValue};
use crate::core::vault::{SecretStore, Session};
use crate::error::{MaterializeError, Result};

/// A secret that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSecret {
    /// Vault path the secret was read from.
    pub kv_path: String,
    pub key: String,
    pub file: PathBuf,
}

impl WrittenSecret {
    /// `<kv_path>/<key>`, for reporting.
    pub fn origin(&self) -> String {
        format!("{}/{}", self.kv_path.trim_end_matches('/'), self.key)
    }
}

/// Read one mount from Vault and write its keys under `base`.
///
/// `report` is called after each file is written.
///
/// # Errors
///
/// Returns the session's read error, `MaterializeError::InvalidType` for a
/// non-string value, or an I/O error while writing.
pub fn materialize_mount<S: SecretStore>(
    session: &Session<S>,
    mount: &Mount,
    base: &Path,
    report: impl FnMut(&WrittenSecret),
) -> Result<Vec<WrittenSecret>> {
    let raw = session.read(&mount.kv_path)?;
    let payload = effective_payload(raw);
    let dir = mount.destination(base);
    debug!(
        path = %mount.kv_path,
        keys = payload.len(),
        dir = %dir.display(),
        "materializing mount"
    );
    write_payload(&mount.kv_path, payload, &dir, report)
}

/// Write every key of `payload` as a file in `dir`, in key order.
pub fn write_payload(
    kv_path: &str,
    payload: SecretPayload,
    dir: &Path,
    mut report: impl FnMut(&WrittenSecret),
) -> Result<Vec<WrittenSecret>> {
    let mut written = Vec::with_capacity(payload.len());

    for (key, value) in payload {
        let value = match value {
            SecretValue::Text(value) => value,
            other => {
                return Err(MaterializeError::InvalidType {
                    key,
                    kind: other.kind(),
                }
                .into())
            }
        };
        if !is_file_name(&key) {
            return Err(MaterializeError::InvalidKey {
                path: kv_path.to_string(),
                key,
            }
            .into());
        }

        std::fs::create_dir_all(dir).map_err(|source| MaterializeError::CreateDir {
            dir: dir.to_path_buf(),
            source,
        })?;

        let file = dir.join(&key);
        write_secret(&file, value.as_bytes())?;
        trace!(file = %file.display(), "secret written");

        let secret = WrittenSecret {
            kv_path: kv_path.to_string(),
            key,
            file,
        };
        report(&secret);
        written.push(secret);
    }

    Ok(written)
}

/// Keys become file names and must not point outside the directory.
fn is_file_name(key: &str) -> bool {
    !key.is_empty() && key != "." && key != ".." && !key.contains(['/', '\\'])
}

fn write_secret(file: &Path, contents: &[u8]) -> Result<()> {
    let write_error = |source| MaterializeError::Write {
        file: file.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut handle = options.open(file).map_err(write_error)?;
    handle.write_all(contents).map_err(write_error)?;
    Ok(())
}
