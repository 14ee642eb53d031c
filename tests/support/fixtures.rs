//! Test fixtures and constants.

/// A nais manifest with port, env and one Vault mount.
pub const MANIFEST: &str = r#"
apiVersion: nais.io/v1alpha1
kind: Application
metadata:
  name: myapp
  namespace: default
  labels:
    team: aura
spec:
  image: navikt/myapp:1.0
  port: 8080
  env:
    - name: DB_HOST
      value: localhost
    - name: LOG_LEVEL
      value: debug
  vault:
    enabled: true
    paths:
      - kvPath: /kv/preprod/fss/myapp/default
        mountPath: /var/run/secrets/nais.io/vault
"#;

/// A manifest without port, env or Vault.
pub const MINIMAL_MANIFEST: &str = "metadata:\n  name: tiny\n";

/// A manifest that is not valid YAML.
pub const BROKEN_MANIFEST: &str = "metadata: [name: oops\n";
