use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("budget_insights").expect("binary exists");
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn prints_the_sample_dashboard() {
    let dir = TempDir::new().unwrap();
    cli()
        .args(["--plain", "--config"])
        .arg(dir.path().join("config.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Dashboard: May 2025 ==="))
        .stdout(predicate::str::contains(
            "INFO: Housing makes up 70% of your monthly expenses.",
        ));
}

#[test]
fn default_logging_stays_off_stdout() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("budget_insights")
        .expect("binary exists")
        .env_remove("RUST_LOG")
        .args(["--plain", "--config"])
        .arg(dir.path().join("config.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\n=== Dashboard: May 2025 ==="))
        .stdout(predicate::str::contains("\u{1b}").not())
        .stdout(predicate::str::contains("tracing initialized").not())
        .stderr(predicate::str::contains("tracing initialized"));
}

#[test]
fn config_thresholds_change_insights() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "insights": { "approaching_ratio": 0.75 }, "trend_months": 2 }"#,
    )
    .unwrap();
    cli()
        .args(["2025-05", "--plain", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "INFO: You're approaching your Housing budget ($1,200.00 of $1,500.00).",
        ));
}

#[test]
fn rejects_malformed_months() {
    cli()
        .arg("May-2025")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn rejects_future_months() {
    cli()
        .arg("9999-12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("in the future"));
}
