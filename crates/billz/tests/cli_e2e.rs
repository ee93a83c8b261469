#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn billz_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("billz"));
    cmd.env("BILLZ_CONFIG_DIR", config_dir.path())
        .env("BILLZ_SAMPLE_DELAY_MS", "0")
        .env_remove("BILLZ_DEMO_MODE")
        .env_remove("BILLZ_DEFAULT_CURRENCY")
        .env_remove("BILLZ_LOG");
    cmd
}

#[test]
fn test_scripted_session_creates_lists_and_summarizes() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .args(["--no-color"])
        .write_stdin(
            "new --set id=INV-00001 --set value=100 --set status=draft --set customerName=Acme\n\
             new --set id=INV-00002 --set value=200 --set status=due --set customerName=Globex\n\
             new --set id=INV-00003 --set value=300 --set status=paid --set customerName=Initech\n\
             summary\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice created: INV-00002"))
        .stdout(predicate::str::contains("3 invoices · $600.00"))
        .stdout(predicate::str::contains("Globex"))
        .stdout(predicate::str::contains("Initech"));
}

#[test]
fn test_filter_and_clear_in_session() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .args(["--no-color", "shell"])
        .write_stdin(
            "new --set id=A --set value=5 --set status=due\n\
             new --set id=B --set value=7 --set status=paid\n\
             filter paid\n\
             filter\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing Paid invoices"))
        .stdout(predicate::str::contains("1 invoice · $7.00"))
        .stdout(predicate::str::contains("Showing all invoices"))
        .stdout(predicate::str::contains("2 invoices · $12.00"));
}

#[test]
fn test_unknown_session_command_does_not_abort() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .write_stdin("bogus\nnew --set id=X --set value=1\nquit\nnew --set id=Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bogus"))
        .stdout(predicate::str::contains("Invoice created: X"))
        .stdout(predicate::str::contains("Invoice created: Y").not());
}

#[test]
fn test_samples_need_demo_mode() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .write_stdin("sample --count 3\ndemo on\nsample --count 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("only available in demo mode"))
        .stdout(predicate::str::contains("Demo mode on"))
        .stdout(predicate::str::contains("Generated 3 sample invoices"));
}

#[test]
fn test_demo_command_prints_board() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .args(["--no-color", "demo", "--count", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 5 sample invoices"))
        .stdout(predicate::str::contains("All"))
        .stdout(predicate::str::contains("5 invoices ·"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_fields_lists_schema() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("customerName"))
        .stdout(predicate::str::contains("Invoice Status"))
        .stdout(predicate::str::contains("dropdown: draft"));
}

#[test]
fn test_config_set_get_unset() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .args(["config", "set", "top-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top-n set to 5"));

    billz_cmd(&temp)
        .args(["config", "get", "top-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));

    billz_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-currency"))
        .stdout(predicate::str::contains("USD"));

    billz_cmd(&temp)
        .args(["config", "unset", "top-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top-n reset to 3"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown config key: colour"))
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_demo_mode_from_config_enables_samples() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .args(["config", "set", "demo-mode", "on"])
        .assert()
        .success();

    billz_cmd(&temp)
        .write_stdin("sample --count 2\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 sample invoices"))
        .stdout(predicate::str::contains("2 invoices ·"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();

    billz_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("billz ", env!("CARGO_PKG_VERSION"))));
}
