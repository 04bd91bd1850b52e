use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bank(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bank").unwrap();
    cmd.env("BANK_CLI_DATA_DIR", dir);
    cmd
}

fn data_file(dir: &Path) -> std::path::PathBuf {
    dir.join("data").join("bank_data.txt")
}

#[test]
fn test_menu_fresh_start_and_exit() {
    let temp_dir = TempDir::new().unwrap();

    bank(temp_dir.path())
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous data found. Starting fresh."))
        .stdout(predicate::str::contains("BANKING MANAGEMENT SYSTEM"))
        .stdout(predicate::str::contains("Thank you for using our banking system!"))
        .stdout(predicate::str::contains("\x1b[").not());

    assert!(!data_file(temp_dir.path()).exists());
}

#[test]
fn test_menu_session_persists_accounts() {
    let temp_dir = TempDir::new().unwrap();

    bank(temp_dir.path())
        .arg("menu")
        .write_stdin("1\nAlice\n1001\n100.00\n\n2\n1001\n50\n\n3\n1001\n30\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created successfully!"))
        .stdout(predicate::str::contains("Deposit successful!"))
        .stdout(predicate::str::contains("Remaining Balance: $120.00"));

    let contents = fs::read_to_string(data_file(temp_dir.path())).unwrap();
    assert_eq!(contents, "1\nAlice 1001 120.00\n");

    bank(temp_dir.path())
        .write_stdin("4\n1001\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 account(s) from file."))
        .stdout(predicate::str::contains("Current Balance: $120.00"));
}

#[test]
fn test_menu_rejects_overdraft() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    fs::write(data_file(temp_dir.path()), "1\nBob 7 10.00\n").unwrap();

    bank(temp_dir.path())
        .write_stdin("3\n7\n25\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Insufficient balance"))
        .stdout(predicate::str::contains("Available Balance: $10.00"));

    let contents = fs::read_to_string(data_file(temp_dir.path())).unwrap();
    assert_eq!(contents, "1\nBob 7 10.00\n");
}

#[test]
fn test_menu_ends_cleanly_on_closed_input() {
    let temp_dir = TempDir::new().unwrap();

    bank(temp_dir.path())
        .write_stdin("1\nAlice\n")
        .assert()
        .success();

    assert!(!data_file(temp_dir.path()).exists());
}

#[test]
fn test_corrupt_data_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    fs::write(data_file(temp_dir.path()), "2\nAlice 1001 100.00\n").unwrap();

    bank(temp_dir.path())
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data file"));
}

#[test]
fn test_list_and_show() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    fs::write(
        data_file(temp_dir.path()),
        "2\nAlice 1001 100.00\nBob 1002 25.50\n",
    )
    .unwrap();

    bank(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("TOTAL"))
        .stdout(predicate::str::contains("2 account(s)"));

    bank(temp_dir.path())
        .args(["show", "1002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account Holder: Bob"))
        .stdout(predicate::str::contains("Current Balance: $25.50"));

    bank(temp_dir.path())
        .args(["show", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: 9999"));
}

#[test]
fn test_list_empty() {
    let temp_dir = TempDir::new().unwrap();

    bank(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts found."));
}

#[test]
fn test_audit_records_operations() {
    let temp_dir = TempDir::new().unwrap();

    bank(temp_dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries yet."));

    bank(temp_dir.path())
        .write_stdin("1\nAlice\n1001\n100\n\n2\n1001\n5\n\n5\n")
        .assert()
        .success();

    bank(temp_dir.path())
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEPOSIT #1001 (Alice)"))
        .stdout(predicate::str::contains("CREATE").not());
}

#[test]
fn test_config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    bank(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("bank_data.txt"))
        .stdout(predicate::str::contains("Max accounts:    100"));

    let written = fs::read_to_string(temp_dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"max_accounts\": 100"));
    assert!(written.contains("\"currency_symbol\": \"$\""));
}

#[test]
fn test_settings_file_is_honored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"max_accounts": 1, "currency_symbol": "€", "audit_enabled": false}"#,
    )
    .unwrap();

    bank(temp_dir.path())
        .write_stdin("1\nAlice\n1\n10\n\n1\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: €10.00"))
        .stdout(predicate::str::contains("Maximum account limit reached (1 accounts)"));

    assert!(!temp_dir.path().join("audit.log").exists());

    bank(temp_dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit logging is disabled in settings."));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    bank(env_dir.path())
        .arg("--data-dir")
        .arg(flag_dir.path())
        .write_stdin("1\nCarol\n42\n0\n\n5\n")
        .assert()
        .success();

    assert!(data_file(flag_dir.path()).exists());
    assert!(!data_file(env_dir.path()).exists());
}
