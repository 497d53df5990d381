use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_CLI_DATA_DIR", data_dir.path());
    cmd.env_remove("FOLIO_LOG");
    cmd
}

#[test]
fn tax_prints_take_home_breakdown() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["tax", "45000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$4,288"))
        .stdout(predicate::str::contains("$900"))
        .stdout(predicate::str::contains("$39,812"));
}

#[test]
fn tax_accepts_pay_frequency_synonyms() {
    let dir = TempDir::new().unwrap();
    // 3,461.54 per fortnight is roughly 90,000 a year
    folio(&dir)
        .args(["tax", "3461.54", "--frequency", "fn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$90,000"));
}

#[test]
fn template_is_printed_to_stdout() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["budget", "template"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,amount,frequency,category"));
}

#[test]
fn import_list_and_summary() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.csv");

    folio(&dir)
        .args(["budget", "template"])
        .arg(&template)
        .assert()
        .success();

    folio(&dir)
        .args(["budget", "import"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 7 expenses"));

    folio(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Netflix"))
        .stdout(predicate::str::contains("$38,173.88"));

    folio(&dir)
        .args(["budget", "summary", "--salary", "90000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$38,174 / year"))
        .stdout(predicate::str::contains("Monthly surplus"));
}

#[test]
fn import_reports_missing_columns() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, "foo,bar\n1,2\n").unwrap();

    folio(&dir)
        .args(["budget", "import"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find required columns"));
}

#[test]
fn add_then_remove_expense() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["budget", "add", "Car rego", "850", "--frequency", "yearly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport"));

    folio(&dir)
        .args(["budget", "remove", "car rego"])
        .assert()
        .success();

    folio(&dir)
        .args(["budget", "remove", "car rego"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn project_with_zero_return() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["project", "1000", "--allocation", "100", "--return", "0", "--years", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("After 10 years: $120,000"));
}

#[test]
fn project_rejects_out_of_range_return() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["project", "1000", "--return", "45"])
        .assert()
        .failure();
}

#[test]
fn opportunity_shows_checkpoints() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["opportunity", "5", "--frequency", "daily"])
        .assert()
        .failure();

    folio(&dir)
        .args(["opportunity", "50", "--frequency", "weekly", "--return", "0", "--years", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$13,000"))
        .stdout(predicate::str::contains("$78,000"));
}

#[test]
fn notification_lifecycle() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["notify", "add", "Price alert", "VAS dropped 3%", "--type", "warning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added notification ntf-"));

    folio(&dir)
        .args(["notify", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 notifications, 1 unread"));

    folio(&dir)
        .args(["notify", "read-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 1 notifications as read"));

    folio(&dir)
        .args(["notify", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 unread"));

    assert!(dir.path().join("data").join("notification-storage.json").exists());
}
