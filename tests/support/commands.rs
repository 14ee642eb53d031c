//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a rupaul command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - no Vault token or Vault CLI config from the caller
    /// - colors disabled
    /// - current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("rupaul").expect("failed to find rupaul binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env_remove("VAULT_TOKEN");
        cmd.env_remove("VAULT_CONFIG_PATH");
        cmd.env_remove("RUPAUL_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `rupaul drag <manifest>`.
    pub fn drag(&self, manifest: &str) -> Output {
        self.cmd()
            .args(["drag", manifest])
            .output()
            .expect("failed to run rupaul drag")
    }
}
