use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contacts(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contacts").unwrap();
    cmd.env("CONTACTS_HOME", home.path());
    cmd
}

fn stored_ids(home: &TempDir) -> Vec<String> {
    let raw = std::fs::read_to_string(home.path().join("lorem_contacts.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_shows_default_contacts() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Jane Smith"));
}

#[test]
fn test_add_edit_delete_round_trip() {
    let home = TempDir::new().unwrap();

    contacts(&home)
        .args(["add", "Ann Lee", "ann@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully!"));

    let ids = stored_ids(&home);
    assert_eq!(ids.len(), 3);
    assert_eq!(&ids[..2], &["1".to_string(), "2".to_string()]);

    contacts(&home)
        .args(["edit", "1", "--status", "inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully!"));

    contacts(&home)
        .args(["rm", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully!"));

    let after = stored_ids(&home);
    assert_eq!(after, vec!["1".to_string(), ids[2].clone()]);

    contacts(&home)
        .args(["ls", "--status", "inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Ann Lee").not());
}

#[test]
fn test_add_requires_name() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["add", "  ", "ann@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["edit", "404", "--name", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact not found: 404"));
}

#[test]
fn test_delete_unknown_id_succeeds() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["delete", "404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact with id 404"));
}

#[test]
fn test_stats() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["edit", "2", "-s", "inactive"])
        .assert()
        .success();
    contacts(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total contacts:    2"));
}

#[test]
fn test_persist_off_keeps_nothing() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["config", "persist", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("persist set to false"));

    contacts(&home)
        .args(["add", "Ann Lee", "ann@x.com"])
        .assert()
        .success();
    assert!(!home.path().join("lorem_contacts.json").exists());

    contacts(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee").not());
}

#[test]
fn test_config_unknown_key() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["config", "colour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_verbose_run_writes_log_file() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["-v", "add", "Ann Lee", "ann@x.com"])
        .assert()
        .success();

    let mut logged = String::new();
    for entry in std::fs::read_dir(home.path().join("logs")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        if name.starts_with("contacts") && name.ends_with(".log") {
            logged.push_str(&std::fs::read_to_string(&path).unwrap());
        }
    }
    assert!(logged.contains("event=cli_start"), "log was: {:?}", logged);
    assert!(logged.contains("event=create"), "log was: {:?}", logged);
}

#[test]
fn test_config_rejects_unusable_storage_key() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["config", "storage-key", "a/b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key 'a/b'"));

    contacts(&home)
        .args(["config", "storage-key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lorem_contacts"));

    contacts(&home)
        .args(["add", "Bob Ray", "bob@x.com"])
        .assert()
        .success();
    contacts(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Ray"));
}

#[test]
fn test_edit_unknown_id_with_blank_name_is_not_found() {
    let home = TempDir::new().unwrap();
    contacts(&home)
        .args(["edit", "404", "--name", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact not found: 404"));
}
