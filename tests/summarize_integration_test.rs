//! Library-level tests for loading and rendering report summaries.

mod common;

use common::{create_report, fixture_path};
use indoc::indoc;
use lighthouse_summary::{render, render_error, summarize, summarize_value, SummaryError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_full_report_summary() {
    let summary = summarize(&fixture_path("full_report.json")).unwrap();

    assert_eq!(
        render(&summary),
        indoc! {"
            Lighthouse Scores:
            - Performance: 87
            - Accessibility: 93
            - Best Practices: 100
            - SEO: 28
            - PWA: N/A

            Key Metrics:
            - First Contentful Paint: 0.8 s
            - Largest Contentful Paint: 2.7 s
            - Total Blocking Time: 120 ms
            - Cumulative Layout Shift: 0.012
            - Speed Index: 1.9 s
        "}
    );
}

#[test]
fn test_partial_report_uses_placeholders() {
    let summary = summarize(&fixture_path("partial_report.json")).unwrap();

    assert_eq!(
        render(&summary),
        indoc! {"
            Lighthouse Scores:

            Key Metrics:
            - First Contentful Paint: 1.2 s
            - N/A: N/A
            - N/A: N/A
            - N/A: N/A
            - N/A: N/A
        "}
    );
}

#[test]
fn test_categories_follow_document_order() {
    let (_dir, path) = create_report(
        r#"{"categories": {
            "seo": {"title": "SEO", "score": 0.5},
            "performance": {"title": "Performance", "score": 0.25}
        }}"#,
    );
    let output = render(&summarize(&path).unwrap());
    let seo = output.find("- SEO: 50").unwrap();
    let performance = output.find("- Performance: 25").unwrap();
    assert!(seo < performance);
}

#[test]
fn test_missing_titles_render_placeholder() {
    let (_dir, path) = create_report(
        r#"{"categories": {"performance": {"score": 0.5}},
            "audits": {"speed-index": {"displayValue": "2.0 s"}}}"#,
    );
    let output = render(&summarize(&path).unwrap());
    assert!(output.contains("- N/A: 50\n"));
    assert!(output.ends_with("- N/A: 2.0 s\n"));
}

#[test]
fn test_mistyped_sections_are_empty() {
    let (_dir, path) = create_report(r#"{"categories": [], "audits": 7}"#);
    let output = render(&summarize(&path).unwrap());
    assert!(output.starts_with("Lighthouse Scores:\n\nKey Metrics:\n"));
    assert_eq!(output.matches("- N/A: N/A").count(), 5);
}

#[test]
fn test_missing_file_error_line() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let error = summarize(&temp_dir.path().join("lighthouse-report.json")).unwrap_err();
    assert!(matches!(error, SummaryError::Read { .. }));

    let line = render_error(&error);
    assert!(line.starts_with("Error analyzing report: failed to read "));
    assert_eq!(line.lines().count(), 1);
    assert!(!line.contains("Lighthouse Scores:"));
}

#[test]
fn test_malformed_file_error_line() {
    let error = summarize(&fixture_path("malformed_report.json")).unwrap_err();
    assert!(matches!(error, SummaryError::Parse { .. }));

    let line = render_error(&error);
    assert!(line.starts_with("Error analyzing report: failed to parse "));
    assert!(line.contains("as JSON"));
    assert_eq!(line.lines().count(), 1);
}

#[test]
fn test_array_root_error_line() {
    let (_dir, path) = create_report("[]");
    let error = summarize(&path).unwrap_err();
    assert!(render_error(&error).contains("does not contain a JSON object"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let path = fixture_path("full_report.json");
    let first = render(&summarize(&path).unwrap());
    let second = render(&summarize(&path).unwrap());
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_scores_in_unit_range_map_to_percent(score in 0.0f64..=1.0) {
        let document = json!({"categories": {"performance": {"title": "Performance", "score": score}}});
        let summary = summarize_value(&document).unwrap();
        let percent = summary.categories[0].percent().unwrap();
        prop_assert!((0..=100).contains(&percent));
        prop_assert_eq!(percent, (score * 100.0).trunc() as i64);
    }
}
