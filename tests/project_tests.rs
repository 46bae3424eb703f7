use assert_fs::prelude::*;
use predicates::prelude::*;

const BASELINE_SCENARIO: &str = "dev_complexity: standard
initial_users: 1000
psychiatrist_count: 5
premium_price: 19.99
conversion_rate_percent: 5
deep_ai_enabled: true
";

#[test]
fn project_writes_thirteen_labeled_months_and_chart() {
    let dir = assert_fs::TempDir::new().unwrap();
    let scenario_file = dir.child("scenario.yaml");
    scenario_file.write_str(BASELINE_SCENARIO).unwrap();
    let output_file = dir.child("projection.yaml");
    let scenario_arg = scenario_file.path().to_str().unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("burncast").unwrap();
    cmd.args([
        "project",
        "-s",
        scenario_arg,
        "-o",
        output_arg,
        "-d",
        "2026-01-01",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Projected MRR at month 12:"))
        .stdout(predicate::str::contains(format!(
            "Projection written to {output_arg}"
        )));

    let output = std::fs::read_to_string(output_file.path()).unwrap();
    assert_eq!(output.matches("- month:").count(), 13);
    assert!(output.contains("month: 2026-01"));
    assert!(output.contains("month: 2026-12"));
    assert!(output.contains("month: 2027-01"));
    assert!(output.contains("users: 1000"));
    assert!(output.contains("users: 2800"));

    let chart = dir.child("projection.yaml.png");
    chart.assert(predicate::path::exists());
    assert!(std::fs::metadata(chart.path()).unwrap().len() > 0);
}

#[test]
fn project_rejects_invalid_start_date() {
    let dir = assert_fs::TempDir::new().unwrap();
    let scenario_file = dir.child("scenario.yaml");
    scenario_file.write_str(BASELINE_SCENARIO).unwrap();
    let output_file = dir.child("projection.yaml");

    let mut cmd = assert_cmd::Command::cargo_bin("burncast").unwrap();
    cmd.args([
        "project",
        "-s",
        scenario_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "-d",
        "January 2026",
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Invalid start date: January 2026"));
    output_file.assert(predicate::path::missing());
}
