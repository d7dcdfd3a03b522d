/// Integration tests for the application layer
mod test_utilities;

use content_preview::rule_preview::services::debounce::DEFAULT_DEBOUNCE;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_utilities::mocks::*;
use content_preview::prelude::*;

fn three_rule_source() -> MockContentSource {
    MockContentSource::new()
        .with_rule("b", "KEY_B", "active")
        .with_rule("a", "KEY_A", "active")
        .with_rule("c", "KEY_C", "inactive")
        .with_hit_count("b|KEY_B", 5)
        .with_hit_count("c|KEY_C", 9)
}

fn plugins(rows: &[TableRow]) -> Vec<&str> {
    rows.iter().map(|row| row.plugin.as_str()).collect()
}

fn ceph_detail(node_id: Option<&str>) -> RuleDetail {
    let mut detail = json!({
        "rule_id": "ceph|CEPH_WARN",
        "plugin": "ceph",
        "error_key": "CEPH_WARN",
        "status": "active",
        "severity": "WARN",
        "description": "Ceph cluster reports HEALTH_WARN",
        "resolution": "Check the OSD state"
    });
    if let Some(id) = node_id {
        detail["node_id"] = json!(id);
    }
    serde_json::from_value(detail).unwrap()
}

fn ceph_hits() -> Vec<HitPayload> {
    vec![
        serde_json::from_value(json!({
            "__name": "host-a",
            "__source": "insights-client",
            "__date": "2021-06-01",
            "osd_down": 2
        }))
        .unwrap(),
        serde_json::from_value(json!({
            "__name": "host-b",
            "__source": "insights-client",
            "__date": "2021-06-02",
            "osd_down": 1
        }))
        .unwrap(),
    ]
}

#[test]
fn test_table_default_sort_is_plugin_ascending() {
    let use_case = PreviewTableUseCase::new(three_rule_source());
    let model = use_case.execute(TableRequest::default()).unwrap();

    assert_eq!(plugins(&model.rows), vec!["a", "b", "c"]);
    assert_eq!(model.sort_column, 2);
    assert_eq!(model.total_rules, 3);
}

#[test]
fn test_table_missing_hit_count_shows_zero() {
    let use_case = PreviewTableUseCase::new(three_rule_source());
    let model = use_case.execute(TableRequest::default()).unwrap();

    let hits: Vec<u64> = model.rows.iter().map(|row| row.hits).collect();
    assert_eq!(hits, vec![0, 5, 9]);
}

#[test]
fn test_table_query_and_sort_applied_together() {
    let use_case = PreviewTableUseCase::new(
        MockContentSource::new()
            .with_rule("bond", "BOND_DOWN", "active")
            .with_rule("ceph", "CEPH_WARN", "active")
            .with_rule("nfs", "NFS_STALE", "active"),
    );
    let request = TableRequest::new(SortState::new(SortKey::ErrorKey, SortDirection::Desc), "w");
    let model = use_case.execute(request).unwrap();

    assert_eq!(plugins(&model.rows), vec!["ceph", "bond"]);
    assert_eq!(model.query, "w");
}

#[test]
fn test_table_source_failure_propagates() {
    let use_case = PreviewTableUseCase::new(MockContentSource::failing());
    assert!(use_case.execute(TableRequest::default()).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_typed_query_narrows_rows_after_debounce() {
    let source = three_rule_source();
    let mut view = ContentTableView::new(DEFAULT_DEBOUNCE);
    view.set_data(source.rules().unwrap(), source.hit_counts().unwrap());
    assert_eq!(plugins(view.rows()), vec!["a", "b", "c"]);

    view.on_search_input("A");
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!view.sync_search());
    assert_eq!(view.rows().len(), 3);

    view.next_search_commit().await;
    assert_eq!(view.query(), "A");
    assert_eq!(plugins(view.rows()), vec!["a"]);
}

#[tokio::test(start_paused = true)]
async fn test_only_last_keystroke_commits() {
    let source = three_rule_source();
    let mut view = ContentTableView::new(DEFAULT_DEBOUNCE);
    view.set_data(source.rules().unwrap(), source.hit_counts().unwrap());

    view.on_search_input("b");
    tokio::time::sleep(Duration::from_millis(500)).await;
    view.on_search_input("c");
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!view.sync_search());

    tokio::time::sleep(Duration::from_millis(301)).await;
    assert!(view.sync_search());
    assert_eq!(plugins(view.rows()), vec!["c"]);
}

#[tokio::test]
async fn test_detail_with_kba_article() {
    let kba = MockKbaRepository::new().with_article("3211451", "Ceph HEALTH_WARN explained");
    let reporter = MockProgressReporter::new();
    let use_case = PreviewDetailUseCase::new(
        MockContentSource::new()
            .with_detail(ceph_detail(Some("3211451")))
            .with_hits("ceph|CEPH_WARN", ceph_hits()),
        kba,
        reporter.clone(),
    );

    let report = use_case
        .execute(DetailRequest::new("ceph|CEPH_WARN").with_selection(2))
        .await
        .unwrap();

    assert_eq!(report.title, "ceph|CEPH_WARN");
    assert!(!report.kba.loading);
    assert_eq!(
        report.kba.detail.unwrap().display_title(),
        Some("Ceph HEALTH_WARN explained")
    );
    assert_eq!(report.details.payload(), Some(json!({"osd_down": 1})));
    assert_eq!(
        report.detail_href.as_deref(),
        Some("https://access.redhat.com/node/3211451")
    );
    assert_eq!(reporter.get_messages().len(), 2);
}

#[tokio::test]
async fn test_detail_kba_rejection_still_renders() {
    let kba = MockKbaRepository::failing();
    let calls = kba.call_counter();
    let use_case = PreviewDetailUseCase::new(
        MockContentSource::new()
            .with_detail(ceph_detail(Some("3211451")))
            .with_hits("ceph|CEPH_WARN", ceph_hits()),
        kba,
        MockProgressReporter::new(),
    );

    let report = use_case
        .execute(DetailRequest::new("ceph|CEPH_WARN"))
        .await
        .unwrap();

    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert!(!report.kba.loading);
    assert!(report.kba.detail.is_none());
    assert_eq!(report.title, "ceph|CEPH_WARN");
    assert_eq!(report.severity_label.unwrap().text, "WARN");
    assert_eq!(report.hits.len(), 2);
}

#[tokio::test]
async fn test_detail_without_node_id_makes_no_request() {
    let kba = MockKbaRepository::new().with_article("1", "unused");
    let calls = kba.call_counter();
    let reporter = MockProgressReporter::new();
    let use_case = PreviewDetailUseCase::new(
        MockContentSource::new().with_detail(ceph_detail(None)),
        kba,
        reporter.clone(),
    );

    let report = use_case
        .execute(DetailRequest::new("ceph|CEPH_WARN"))
        .await
        .unwrap();

    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert!(!report.kba.loading);
    assert!(report.detail_href.is_none());
    assert!(report.hits.is_empty());
    assert!(reporter.get_messages().is_empty());
}

#[tokio::test]
async fn test_detail_free_style_override_wins() {
    let use_case = PreviewDetailUseCase::new(
        MockContentSource::new()
            .with_detail(ceph_detail(None))
            .with_hits("ceph|CEPH_WARN", ceph_hits()),
        MockKbaRepository::new(),
        MockProgressReporter::new(),
    );

    let report = use_case
        .execute(
            DetailRequest::new("ceph|CEPH_WARN")
                .with_selection(1)
                .with_free_style(r#"{"osd_down": 42}"#),
        )
        .await
        .unwrap();

    assert_eq!(report.details, ReportDetails::FreeStyle(json!({"osd_down": 42})));
    assert_eq!(report.free_style.validated, ValidatedState::Success);
    assert_eq!(report.selected_hit, 1);
}

#[tokio::test]
async fn test_detail_unknown_rule() {
    let use_case = PreviewDetailUseCase::new(
        MockContentSource::new(),
        MockKbaRepository::new(),
        MockProgressReporter::new(),
    );
    let err = use_case
        .execute(DetailRequest::new("missing|RULE"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Rule not found: missing|RULE"));
}

#[tokio::test]
async fn test_kba_lookup_result_dropped_with_view() {
    let kba = MockKbaRepository::new().with_article("9", "Article");
    let lookup = KbaLookup::new(kba.clone());

    let mut view = DetailView::new("ceph|CEPH_WARN");
    view.set_detail(ceph_detail(Some("9")));
    let view: SharedDetailView = Arc::new(Mutex::new(view));

    let handle = lookup.start(&view).unwrap();
    let weak = Arc::downgrade(&view);
    drop(view);
    handle.await.unwrap();

    assert!(weak.upgrade().is_none());
    assert_eq!(kba.call_count(), 1);
}

#[tokio::test]
async fn test_caching_repository_reuses_articles() {
    let kba = MockKbaRepository::new().with_article("9", "Article");
    let calls = kba.call_counter();
    let caching = CachingKbaRepository::new(kba);

    for _ in 0..3 {
        let doc = caching.fetch_kba("9").await.unwrap();
        assert_eq!(doc.unwrap().display_title(), Some("Article"));
    }
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_json_validator_cases() {
    assert_eq!(JsonValidator::validate(""), FreeStyleValidation::Empty);
    assert_eq!(
        JsonValidator::validate(r#"{"a":1}"#),
        FreeStyleValidation::Valid(json!({"a": 1}))
    );
    assert_eq!(JsonValidator::validate("{a:1}"), FreeStyleValidation::Invalid);
}

#[test]
fn test_projector_drops_reserved_keys() {
    let hit: HitPayload =
        serde_json::from_value(json!({"__name": "x", "__source": "y", "count": 5})).unwrap();
    assert_eq!(
        serde_json::Value::Object(HitProjector::project(&hit)),
        json!({"count": 5})
    );
}
