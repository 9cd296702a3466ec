use biocat_client::{
    ClientConfig, ClientError, ClientErrorCode, FakeCatalog, SearchOutcome, SearchPhase,
    SearchSession,
};
use biocat_model::SearchResponse;
use biocat_query::SearchFilters;
use biocat_view::SearchViewState;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

fn page(name: &str, total: u64) -> SearchResponse {
    serde_json::from_str(&format!(
        r#"{{
            "bioModelInfos": [
                {{
                    "bmId": 123456789,
                    "name": "{name}",
                    "ownerName": "Dr. Smith",
                    "ownerKey": 987654321,
                    "savedDate": "2024-01-15T10:30:00Z",
                    "annot": "",
                    "branchId": 1,
                    "modelKey": 456789123,
                    "simulations": 15,
                    "privacy": 1,
                    "groupUsers": ["researcher1", "researcher2"]
                }}
            ],
            "totalCount": {total}
        }}"#
    ))
    .expect("decode page")
}

fn empty_page() -> SearchResponse {
    serde_json::from_str(r#"{"bioModelInfos": [], "totalCount": 0}"#).expect("decode empty page")
}

fn named_filters(name: &str) -> SearchFilters {
    SearchFilters {
        name: name.to_string(),
        ..SearchFilters::default()
    }
}

#[tokio::test]
async fn successful_search_reaches_ready_with_raw_payload() {
    let fake = Arc::new(FakeCatalog::default());
    fake.push_ok(page("Cardiac Myocyte Calcium Dynamics", 42)).await;
    let session = SearchSession::new(fake.clone(), ClientConfig::default());

    let outcome = session.search(&named_filters("Calcium")).await;
    let snapshot = match outcome {
        SearchOutcome::Applied(snapshot) => snapshot,
        SearchOutcome::Superseded { seq } => panic!("unexpected superseded search {seq}"),
    };
    assert_eq!(snapshot.phase, SearchPhase::Ready);
    assert_eq!(snapshot.seq, 1);
    let response = snapshot.response.expect("response recorded");
    assert_eq!(response.total_count, 42);
    let raw = snapshot.raw.expect("raw payload recorded");
    assert_eq!(raw["totalCount"], 42);

    match session.view_state().await {
        SearchViewState::Results { view, .. } => {
            assert_eq!(view.shown_count, 1);
            assert_eq!(view.cards[0].privacy_label, "Private");
            assert_eq!(view.cards[0].shared_with.len(), 2);
        }
        other => panic!("expected results view, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn late_first_response_cannot_overwrite_second_search() {
    let fake = Arc::new(FakeCatalog::default());
    fake.push_ok_after(Duration::from_millis(200), page("First Search Result", 1))
        .await;
    fake.push_ok_after(Duration::from_millis(5), page("Second Search Result", 1))
        .await;
    let session = Arc::new(SearchSession::new(fake.clone(), ClientConfig::default()));

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.search(&named_filters("first")).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = session.search(&named_filters("second")).await;
    let first = first.await.expect("join first search");

    assert!(matches!(first, SearchOutcome::Superseded { seq: 1 }));
    let snapshot = match second {
        SearchOutcome::Applied(snapshot) => snapshot,
        SearchOutcome::Superseded { seq } => panic!("second search superseded at {seq}"),
    };
    assert_eq!(snapshot.seq, 2);
    assert_eq!(
        snapshot.response.expect("second response").bio_model_infos[0].name,
        "Second Search Result"
    );

    // The winner stays in place after the stale response drains.
    let settled = session.snapshot().await;
    assert_eq!(settled.phase, SearchPhase::Ready);
    assert_eq!(settled.seq, 2);
    assert_eq!(fake.calls(), 2);
}

#[tokio::test]
async fn timeout_surfaces_as_failure_and_clears_loading() {
    let fake = Arc::new(FakeCatalog::default());
    fake.push_ok_after(Duration::from_millis(500), page("Too Slow", 1)).await;
    let config = ClientConfig::default().with_timeout(Duration::from_millis(20));
    let session = SearchSession::new(fake, config);

    let outcome = session.search(&SearchFilters::default()).await;
    let snapshot = match outcome {
        SearchOutcome::Applied(snapshot) => snapshot,
        SearchOutcome::Superseded { seq } => panic!("unexpected superseded search {seq}"),
    };
    assert_eq!(snapshot.phase, SearchPhase::Failed);
    assert_eq!(snapshot.error.expect("timeout error").code, ClientErrorCode::Timeout);

    let view = session.view_state().await;
    assert!(view.is_terminal());
    assert!(matches!(view, SearchViewState::Failed(_)));
}

#[tokio::test]
async fn invalid_date_range_never_reaches_the_backend() {
    let fake = Arc::new(FakeCatalog::default());
    let session = SearchSession::new(fake.clone(), ClientConfig::default());

    let filters = SearchFilters {
        saved_low: NaiveDate::from_ymd_opt(2024, 3, 1),
        saved_high: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..SearchFilters::default()
    };
    let outcome = session.search(&filters).await;
    let snapshot = match outcome {
        SearchOutcome::Applied(snapshot) => snapshot,
        SearchOutcome::Superseded { seq } => panic!("unexpected superseded search {seq}"),
    };
    assert_eq!(snapshot.phase, SearchPhase::Failed);
    assert_eq!(
        snapshot.error.expect("validation error").code,
        ClientErrorCode::Validation
    );
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn zero_results_renders_no_results_not_failure() {
    let fake = Arc::new(FakeCatalog::default());
    fake.push_ok(empty_page()).await;
    let session = SearchSession::new(fake, ClientConfig::default());

    session.search(&SearchFilters::default()).await;
    match session.view_state().await {
        SearchViewState::NoResults { raw } => assert_eq!(raw["totalCount"], 0),
        other => panic!("expected no-results view, got {other:?}"),
    }
}

#[tokio::test]
async fn service_failure_is_distinct_from_zero_results() {
    let fake = Arc::new(FakeCatalog::default());
    fake.push_err(ClientError::new(
        ClientErrorCode::Status,
        "catalog query returned status 502 Bad Gateway",
    ))
    .await;
    let session = SearchSession::new(fake, ClientConfig::default());

    session.search(&SearchFilters::default()).await;
    match session.view_state().await {
        SearchViewState::Failed(notice) => {
            assert_eq!(notice.code, "status_error");
            assert!(notice.message.contains("502"));
        }
        other => panic!("expected failure view, got {other:?}"),
    }
}

#[tokio::test]
async fn retry_after_failure_recovers_the_session() {
    let fake = Arc::new(FakeCatalog::default());
    fake.push_err(ClientError::new(ClientErrorCode::Network, "connection reset"))
        .await;
    fake.push_ok(page("Recovered", 1)).await;
    let session = SearchSession::new(fake, ClientConfig::default());

    session.search(&SearchFilters::default()).await;
    assert_eq!(session.snapshot().await.phase, SearchPhase::Failed);

    session.search(&SearchFilters::default()).await;
    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.phase, SearchPhase::Ready);
    assert!(snapshot.error.is_none());
}
