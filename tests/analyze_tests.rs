use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const COST_CSV: &str = "\
Date,Cost,Item Number,Type
2025-01-10,100,10001,Material
2025-02-10,100,10001,Labor
2025-01-15,500,99999,Material
";

const ATTRIBUTES_CSV: &str = "\
Item Number,Cost,Lead Time,Yield,Hours
10001,22,20,80,2.5
99999,10,5,90,1
";

fn write_input_files() -> (assert_fs::NamedTempFile, assert_fs::NamedTempFile) {
    let cost_file = assert_fs::NamedTempFile::new("costs.csv").unwrap();
    cost_file.write_str(COST_CSV).unwrap();
    let attributes_file = assert_fs::NamedTempFile::new("attributes.csv").unwrap();
    attributes_file.write_str(ATTRIBUTES_CSV).unwrap();
    (cost_file, attributes_file)
}

#[test]
fn analyze_without_overrides_reports_matching_totals() {
    let (cost_file, attributes_file) = write_input_files();
    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("evimpact").unwrap();
    cmd.args([
        "analyze",
        "-c",
        cost_file.path().to_str().unwrap(),
        "-a",
        attributes_file.path().to_str().unwrap(),
        "-i",
        "10001",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("EVM Impact Report for item 10001"))
        .stdout(predicate::str::contains(
            "Budget at completion (BAC): $200.00",
        ))
        .stdout(predicate::str::contains(
            "Estimate at completion (EAC): $200.00",
        ))
        .stdout(predicate::str::contains("EVM report written to"));

    let report = fs::read_to_string(output_file.path()).unwrap();
    assert!(report.contains("budget_at_completion: 200.0"));
    assert!(report.contains("estimate_at_completion: 200.0"));
    assert!(report.contains("period_end: 2025-01-31"));
    assert!(report.contains("period_end: 2025-02-28"));
}

#[test]
fn analyze_with_doubled_unit_cost_raises_the_estimate() {
    let (cost_file, attributes_file) = write_input_files();
    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("evimpact").unwrap();
    cmd.args([
        "analyze",
        "-c",
        cost_file.path().to_str().unwrap(),
        "-a",
        attributes_file.path().to_str().unwrap(),
        "-i",
        "10001",
        "-o",
        output_file.path().to_str().unwrap(),
        "--unit-cost",
        "44",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        "Estimate at completion (EAC): $300.00",
    ));

    let report = fs::read_to_string(output_file.path()).unwrap();
    assert!(report.contains("estimate_at_completion: 300.0"));
}

#[test]
fn analyze_with_longer_lead_time_shifts_the_timeline() {
    let (cost_file, attributes_file) = write_input_files();
    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("evimpact").unwrap();
    cmd.args([
        "analyze",
        "-c",
        cost_file.path().to_str().unwrap(),
        "-a",
        attributes_file.path().to_str().unwrap(),
        "-i",
        "10001",
        "-o",
        output_file.path().to_str().unwrap(),
        "--lead-time",
        "60",
    ]);

    cmd.assert().success();

    // The February labor booking moves 40 days later, into March.
    let report = fs::read_to_string(output_file.path()).unwrap();
    assert!(report.contains("period_end: 2025-03-31"));
}

#[test]
fn analyze_unknown_item_reports_empty_selection() {
    let (cost_file, attributes_file) = write_input_files();
    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("evimpact").unwrap();
    cmd.args([
        "analyze",
        "-c",
        cost_file.path().to_str().unwrap(),
        "-a",
        attributes_file.path().to_str().unwrap(),
        "-i",
        "55555",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("match item '55555'"));
    output_file.assert(predicate::path::missing());
}

#[test]
fn analyze_reports_missing_columns() {
    let cost_file = assert_fs::NamedTempFile::new("costs.csv").unwrap();
    cost_file
        .write_str("Date,Cost,Type\n2025-01-10,100,Material\n")
        .unwrap();
    let attributes_file = assert_fs::NamedTempFile::new("attributes.csv").unwrap();
    attributes_file.write_str(ATTRIBUTES_CSV).unwrap();
    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("evimpact").unwrap();
    cmd.args([
        "analyze",
        "-c",
        cost_file.path().to_str().unwrap(),
        "-a",
        attributes_file.path().to_str().unwrap(),
        "-i",
        "10001",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("column 'Item Number' is missing"));
}
