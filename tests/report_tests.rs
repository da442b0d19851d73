use casescope::record::CaseRecord;
use casescope::report::{analyze, AnalyzeOpts};
use chrono::{NaiveDate, TimeZone, Utc};

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    description: &str,
    study_type: &str,
    dimensions: &str,
    keywords: &str,
    institution: &str,
    date: Option<(i32, u32, u32)>,
) -> CaseRecord {
    let mut r = CaseRecord::new(id);
    r.title = title.to_string();
    r.description = description.to_string();
    r.study_type = study_type.to_string();
    r.dimensions = dimensions.to_string();
    r.keywords = keywords.to_string();
    r.institution = institution.to_string();
    r.date = date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
    r
}

fn sample_corpus() -> Vec<CaseRecord> {
    vec![
        record(
            "cs-1",
            "Community solar adoption",
            "A survey of successful community solar programs with improved uptake",
            "field study",
            "Energy, Governance",
            "solar, community",
            "Delta University",
            Some((2024, 3, 1)),
        ),
        record(
            "cs-2",
            "Solar policy outcomes",
            "Regression analysis of solar incentive policies and their benefits",
            "field study",
            "Energy, Governance",
            "solar, policy",
            "Policy Research Institute",
            Some((2023, 1, 10)),
        ),
        record(
            "cs-3",
            "Rural sanitation pilots",
            "Mixed methods evaluation of sanitation pilots facing persistent barriers",
            "pilot study",
            "Health, Water",
            "sanitation",
            "",
            Some((2021, 7, 15)),
        ),
        record(
            "cs-4",
            "Transit ridership",
            "Interview series on declining transit ridership",
            "case study",
            "Transport",
            "transit",
            "",
            None,
        ),
        record("cs-5", "", "", "", "", "", "", None),
    ]
}

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

#[test]
fn report_covers_every_section() {
    let records = sample_corpus();
    let opts = AnalyzeOpts {
        cluster_count: 2,
        seed: Some(11),
        now: fixed_now(),
        ..AnalyzeOpts::default()
    };
    let report = analyze(&records, &opts);
    assert_eq!(report.summary.total_records, records.len());
    assert_eq!(report.predictions.len(), records.len());
    assert!(!report.clusters.is_empty());
    assert!(!report.patterns.is_empty());
    assert!(report.skipped.is_empty());
}

#[test]
fn predictions_are_keyed_one_per_record() {
    let records = sample_corpus();
    let opts = AnalyzeOpts {
        seed: Some(2),
        now: fixed_now(),
        ..AnalyzeOpts::default()
    };
    let report = analyze(&records, &opts);
    let mut ids: Vec<&str> = report.predictions.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["cs-1", "cs-2", "cs-3", "cs-4", "cs-5"]);
}

#[test]
fn a_failing_branch_degrades_without_taking_the_report_down() {
    let records = sample_corpus();
    let opts = AnalyzeOpts {
        cluster_count: 0,
        now: fixed_now(),
        ..AnalyzeOpts::default()
    };
    let report = analyze(&records, &opts);
    assert!(report.clusters.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].branch, "clusters");
    assert_eq!(report.predictions.len(), records.len());
    assert!(!report.patterns.is_empty());
}

#[test]
fn empty_corpus_produces_an_empty_but_valid_report() {
    let report = analyze(&[], &AnalyzeOpts::default());
    assert_eq!(report.summary.total_records, 0);
    assert!(report.clusters.is_empty());
    assert!(report.anomalies.is_empty());
    assert!(report.predictions.is_empty());
    assert!(report.patterns.is_empty());
    assert!(report.skipped.is_empty());
}

#[test]
fn summary_carries_the_corpus_date_range() {
    let records = sample_corpus();
    let opts = AnalyzeOpts {
        seed: Some(9),
        now: fixed_now(),
        ..AnalyzeOpts::default()
    };
    let report = analyze(&records, &opts);
    assert_eq!(report.summary.dated_records, 3);
    assert_eq!(report.summary.start_date.as_deref(), Some("2021-07-15"));
    assert_eq!(report.summary.end_date.as_deref(), Some("2024-03-01"));
}

#[test]
fn report_serializes_to_json() {
    let records = sample_corpus();
    let opts = AnalyzeOpts {
        seed: Some(5),
        now: fixed_now(),
        ..AnalyzeOpts::default()
    };
    let report = analyze(&records, &opts);
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"summary\""));
    assert!(json.contains("\"predictions\""));
    assert!(json.contains("\"clusters\""));
}
