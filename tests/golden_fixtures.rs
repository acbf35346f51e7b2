use tfplan_tools::diff::{EMPTY, KNOWN_AFTER_APPLY};
use tfplan_tools::reports::{PrettyReporter, ReportConfig, ReportGenerator};
use tfplan_tools::{parse_plan_str, AttributeDiff, InspectEngine, InspectFilter, Plan};

fn load_plan(name: &str) -> Plan {
    let content = std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .expect("failed to read plan fixture");
    parse_plan_str(&content).expect("failed to parse plan fixture")
}

fn load_filter() -> InspectFilter {
    let content =
        std::fs::read_to_string("tests/fixtures/filter.json").expect("failed to read filter");
    InspectFilter::from_json(&content).expect("failed to parse filter")
}

#[test]
fn golden_parse_plan_a() {
    let plan = load_plan("plan-a.json");

    assert_eq!(plan.format_version.as_deref(), Some("1.2"));
    assert_eq!(plan.terraform_version.as_deref(), Some("1.6.6"));
    assert_eq!(plan.resource_changes.len(), 4);
    assert_eq!(plan.resource_drift.len(), 1);
    assert_eq!(plan.output_changes.len(), 2);
    assert_eq!(plan.entity_count(), 7);
}

#[test]
fn golden_inspect_plan_a_unfiltered() {
    let result = InspectEngine::new()
        .inspect(&load_plan("plan-a.json"))
        .expect("inspection should succeed");

    // null_resource.noop and the region output have no attribute changes
    let counts = result.counts();
    assert_eq!(counts.resources, 3);
    assert_eq!(counts.resource_drifts, 1);
    assert_eq!(counts.outputs, 1);
    assert!(!result.diff.resources.contains_key("null_resource.noop"));

    let web = &result.diff.resources["aws_instance.web"];
    assert_eq!(web.len(), 4);
    assert_eq!(web[".ami"], AttributeDiff::new("ami-0397850", "ami-0abc123"));
    assert_eq!(web[".tags.Env"], AttributeDiff::new("staging", "prod"));
    assert_eq!(
        web[".vpc_security_group_ids."],
        AttributeDiff::new("sg-1", "sg-1,sg-2")
    );

    let bucket = &result.diff.resources["aws_s3_bucket.logs"];
    assert_eq!(bucket.len(), 4);
    assert_eq!(bucket[".arn"], AttributeDiff::new(EMPTY, KNOWN_AFTER_APPLY));
    assert_eq!(bucket[".force_destroy"], AttributeDiff::new(EMPTY, "false"));

    // The password is redacted on both sides and therefore unchanged
    let db = &result.diff.resources["aws_db_instance.main"];
    assert_eq!(db.len(), 1);
    assert_eq!(db[".allocated_storage"], AttributeDiff::new("20", "30"));

    assert_eq!(
        result.diff.outputs["endpoint"]["."],
        AttributeDiff::new(EMPTY, "db.example.com")
    );
}

#[test]
fn golden_inspect_plan_a_filtered() {
    let result = InspectEngine::new()
        .with_filter(load_filter())
        .inspect(&load_plan("plan-a.json"))
        .expect("inspection should succeed");

    let counts = result.counts();
    assert_eq!(counts.resources, 2);
    assert_eq!(counts.resource_drifts, 0);
    assert_eq!(counts.outputs, 0);

    let web = &result.diff.resources["aws_instance.web"];
    assert_eq!(
        web.keys().collect::<Vec<_>>(),
        vec![".instance_type", ".vpc_security_group_ids."]
    );
}

#[test]
fn golden_pretty_report_plan_a_filtered() {
    let result = InspectEngine::new()
        .with_filter(load_filter())
        .inspect(&load_plan("plan-a.json"))
        .expect("inspection should succeed");

    let report = PrettyReporter::new()
        .no_color()
        .generate_inspection_report(&result, &ReportConfig::default())
        .expect("report should render");

    let expected = format!(
        "\tTerraform plan contained the following un-filtered changes:\n\
         \n\t\tresource \"aws_db_instance.main\" changes:\n\
         \t\t\t.allocated_storage: 20 -> 30\n\
         \n\t\tresource \"aws_instance.web\" changes:\n\
         \t\t\t.instance_type:{}t2.medium -> t2.micro\n\
         \t\t\t.vpc_security_group_ids.: sg-1 -> sg-1,sg-2\n\
         \n\tChanges: 2 resources, 0 resource drifts, 0 outputs\n",
        " ".repeat(11)
    );
    assert_eq!(report, expected);
}

#[test]
fn golden_compare_filtered() {
    let comparison = InspectEngine::new()
        .with_filter(load_filter())
        .compare(Some(&load_plan("plan-a.json")), Some(&load_plan("plan-b.json")))
        .expect("comparison should succeed");

    let counts = comparison.counts();
    assert_eq!(counts.resources, 2);
    assert_eq!(counts.resource_drifts, 0);
    assert_eq!(counts.outputs, 0);

    let web = &comparison.diff.resources["aws_instance.web"];
    assert_eq!(web.plan_a.len(), 1);
    assert_eq!(
        web.plan_a[".instance_type"],
        AttributeDiff::new("t2.medium", "t2.micro")
    );
    assert_eq!(
        web.plan_b[".instance_type"],
        AttributeDiff::new("t2.medium", "t2.large")
    );

    // Only plan A changes the database
    let db = &comparison.diff.resources["aws_db_instance.main"];
    assert_eq!(db.plan_a[".allocated_storage"], AttributeDiff::new("20", "30"));
    assert_eq!(db.plan_b[".allocated_storage"], AttributeDiff::empty());
}

#[test]
fn golden_compare_unfiltered_keeps_drift() {
    let comparison = InspectEngine::new()
        .compare(Some(&load_plan("plan-a.json")), Some(&load_plan("plan-b.json")))
        .expect("comparison should succeed");

    let counts = comparison.counts();
    assert_eq!(counts.resources, 2);
    assert_eq!(counts.resource_drifts, 1);
    assert_eq!(counts.outputs, 0);
    assert!(!comparison.diff.resources.contains_key("aws_s3_bucket.logs"));
    assert!(comparison
        .diff
        .resource_drifts
        .contains_key("aws_security_group.default"));
}
