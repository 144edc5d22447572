//! Integration tests for Anvil

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn anvil() -> Command {
        let mut cmd = cargo_bin_cmd!("anvil");
        // Tests must never pick up a real credential or config.
        cmd.env_remove("ANVIL_IDENTITY")
            .env_remove("ANVIL_SECRET")
            .env_remove("ANVIL_CONFIG")
            .env_remove("ANVIL_SERVER")
            .env("CI", "1");
        cmd
    }

    #[test]
    fn help_displays() {
        anvil()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("forge project scaffolding"));
    }

    #[test]
    fn version_displays() {
        anvil()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("anvil"));
    }

    #[test]
    fn config_path_honors_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        anvil()
            .args(["--config", path.to_str().unwrap(), "config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        anvil()
            .args(["--config", path.to_str().unwrap(), "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[server]"))
            .stdout(predicate::str::contains("debounce_ms = 300"));
    }

    #[test]
    fn config_init_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        anvil()
            .args(["--config", path.to_str().unwrap(), "config", "init"])
            .assert()
            .success();
        assert!(path.exists());
    }

    #[test]
    fn config_set_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        anvil()
            .args([
                "--config",
                path.to_str().unwrap(),
                "config",
                "set",
                "groups.debounce_ms",
                "500",
            ])
            .assert()
            .success();
        anvil()
            .args(["--config", path.to_str().unwrap(), "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("debounce_ms = 500"));
    }

    #[test]
    fn groups_requires_credential() {
        anvil()
            .arg("groups")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not authenticated"));
    }

    #[test]
    fn login_requires_credential() {
        anvil()
            .arg("login")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not authenticated"));
    }

    #[test]
    fn create_requires_credential() {
        anvil()
            .arg("create")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not authenticated"));
    }

    #[test]
    fn credential_error_carries_hint() {
        anvil()
            .arg("login")
            .assert()
            .failure()
            .stderr(predicate::str::contains("ANVIL_IDENTITY"));
    }

    #[test]
    fn create_rejects_unknown_namespace_target() {
        anvil()
            .args(["create", "--namespace", "qa=apps-qa"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown deployment target"));
    }

    #[test]
    fn completions_bash() {
        anvil()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("anvil"));
    }
}
