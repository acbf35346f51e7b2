//! End-to-end tests for the load → inspect → report pipeline.

use std::path::Path;
use tempfile::TempDir;
use tfplan_tools::cli::{run_compare, run_inspect};
use tfplan_tools::config::{CompareConfigBuilder, InspectConfigBuilder};
use tfplan_tools::pipeline::{exit_codes, load_filter, run_comparison, run_inspection};
use tfplan_tools::reports::ReportFormat;

const PLAN_A: &str = "tests/fixtures/plan-a.json";
const PLAN_B: &str = "tests/fixtures/plan-b.json";
const FILTER: &str = "tests/fixtures/filter.json";

#[test]
fn test_run_inspection_from_files() {
    let config = InspectConfigBuilder::new()
        .plan(PLAN_A)
        .filter(Some(FILTER.to_string()))
        .build()
        .unwrap();

    let result = run_inspection(&config, None).unwrap();
    assert_eq!(result.counts().resources, 2);
    assert_eq!(result.counts().total(), 2);
}

#[test]
fn test_configured_filter_file_is_fallback() {
    let config = InspectConfigBuilder::new().plan(PLAN_A).build().unwrap();

    let unfiltered = run_inspection(&config, None).unwrap();
    let filtered = run_inspection(&config, Some(Path::new(FILTER))).unwrap();
    assert_eq!(unfiltered.counts().total(), 5);
    assert_eq!(filtered.counts().total(), 2);
}

#[test]
fn test_inline_filter_argument() {
    let filter = load_filter(
        Some(r#"{"outputChanges": [{"namePattern": "*", "diffPatterns": {".": [{"before": "*", "after": "*"}]}}]}"#),
        None,
    )
    .unwrap();
    assert_eq!(filter.output_changes.len(), 1);
}

#[test]
fn test_invalid_filter_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("filter.json");
    std::fs::write(&path, "{\"resourceChanges\": 3}").unwrap();

    let config = InspectConfigBuilder::new()
        .plan(PLAN_A)
        .filter(Some(path.display().to_string()))
        .build()
        .unwrap();
    let err = run_inspection(&config, None).unwrap_err();
    assert!(format!("{err:#}").contains("filter"));
}

#[test]
fn test_run_comparison_from_files() {
    let config = CompareConfigBuilder::new()
        .plan_a(PLAN_A)
        .plan_b(PLAN_B)
        .filter(Some(FILTER.to_string()))
        .build()
        .unwrap();

    let result = run_comparison(&config, None).unwrap();
    assert_eq!(result.counts().resources, 2);
}

#[test]
fn test_inspect_writes_json_report() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("inspection.json");

    let mut config = InspectConfigBuilder::new()
        .plan(PLAN_A)
        .filter(Some(FILTER.to_string()))
        .output_format(ReportFormat::Json)
        .detailed_exitcode(true)
        .build()
        .unwrap();
    config.output.file = Some(out.clone());
    config.behavior.quiet = true;

    let code = run_inspect(config, None).unwrap();
    assert_eq!(code, exit_codes::CHANGES_DETECTED);

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.ends_with('\n'));
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        json["diff"]["resources"]["aws_db_instance.main"][".allocated_storage"],
        serde_json::json!({"before": "20", "after": "30"})
    );
    assert_eq!(json["diff"]["outputs"], serde_json::json!({}));
    assert_eq!(json["diff"]["resourceDrifts"], serde_json::json!({}));
}

#[test]
fn test_compare_writes_summary_report() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("summary.txt");

    let mut config = CompareConfigBuilder::new()
        .plan_a(PLAN_A)
        .plan_b(PLAN_B)
        .filter(Some(FILTER.to_string()))
        .output_format(ReportFormat::Summary)
        .build()
        .unwrap();
    config.output.file = Some(out.clone());
    config.behavior.quiet = true;

    let code = run_compare(config, None).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "Changes: 2 resources, 0 resource drifts, 0 outputs\n"
    );
}

#[test]
fn test_compare_same_plan_is_clean() {
    let tmp = TempDir::new().unwrap();
    let mut config = CompareConfigBuilder::new()
        .plan_a(PLAN_A)
        .plan_b(PLAN_A)
        .detailed_exitcode(true)
        .build()
        .unwrap();
    config.output.file = Some(tmp.path().join("out.json"));
    config.behavior.quiet = true;

    assert_eq!(run_compare(config, None).unwrap(), exit_codes::SUCCESS);
}

#[test]
fn test_missing_plan_file_fails() {
    let config = InspectConfigBuilder::new()
        .plan("tests/fixtures/does-not-exist.json")
        .build()
        .unwrap();
    let err = run_inspection(&config, None).unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.json"));
}
