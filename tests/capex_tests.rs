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
fn capex_writes_breakdown_and_chart() {
    let dir = assert_fs::TempDir::new().unwrap();
    let scenario_file = dir.child("scenario.yaml");
    scenario_file.write_str(BASELINE_SCENARIO).unwrap();
    let output_file = dir.child("capex.yaml");
    let scenario_arg = scenario_file.path().to_str().unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("burncast").unwrap();
    cmd.args(["capex", "-s", scenario_arg, "-o", output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total capital required: 212500.00"))
        .stdout(predicate::str::contains(format!(
            "Capital breakdown written to {output_arg}"
        )));

    let output = std::fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("development: 150000"));
    assert!(output.contains("legal_compliance: 27500"));
    assert!(output.contains("marketing: 15000"));
    assert!(output.contains("contingency: 20000"));
    assert!(output.contains("total: 212500"));

    let chart = dir.child("capex.yaml.png");
    chart.assert(predicate::path::exists());
    assert!(std::fs::metadata(chart.path()).unwrap().len() > 0);
}

#[test]
fn capex_rejects_unknown_development_tier() {
    let dir = assert_fs::TempDir::new().unwrap();
    let scenario_file = dir.child("scenario.yaml");
    scenario_file
        .write_str(&BASELINE_SCENARIO.replace("standard", "galactic"))
        .unwrap();
    let output_file = dir.child("capex.yaml");

    let mut cmd = assert_cmd::Command::cargo_bin("burncast").unwrap();
    cmd.args([
        "capex",
        "-s",
        scenario_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to load scenario"));
    output_file.assert(predicate::path::missing());
}
