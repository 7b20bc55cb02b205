//! ApiClient tests against a mocked backend.

use haven_core::{ApiClient, CoreError, ReportSubmission, RiskLevel};
use mockito::Matcher;
use serde_json::json;

async fn server_with(method: &str, path: &str, body: serde_json::Value) -> (mockito::ServerGuard, mockito::Mock) {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(method, path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;
    (server, mock)
}

fn reports(n: usize) -> serde_json::Value {
    let list: Vec<_> = (0..n).map(|i| json!({"id": i, "place": "Main St"})).collect();
    json!({ "reports": list })
}

#[tokio::test]
async fn helplines_are_parsed() {
    let (server, mock) = server_with(
        "GET",
        "/api/helplines",
        json!({"helplines": [
            {"name": "Police", "number": "100"},
            {"name": "Women Helpline", "number": "1091", "notes": "24x7"}
        ]}),
    )
    .await;

    let helplines = ApiClient::new(&server.url()).unwrap().helplines().await.unwrap();

    mock.assert_async().await;
    assert_eq!(helplines.len(), 2);
    assert_eq!(helplines[0].notes, None);
    assert_eq!(helplines[1].notes.as_deref(), Some("24x7"));
}

#[tokio::test]
async fn tips_default_to_empty() {
    let (server, _mock) = server_with("GET", "/api/tips", json!({})).await;
    let tips = ApiClient::new(&server.url()).unwrap().tips().await.unwrap();
    assert!(tips.is_empty());
}

#[tokio::test]
async fn risk_score_buckets_report_count() {
    for (count, expected) in [
        (0, RiskLevel::Good),
        (3, RiskLevel::Caution),
        (10, RiskLevel::HighRisk),
    ] {
        let (server, mock) = server_with("GET", "/api/reports", reports(count)).await;
        let score = ApiClient::new(&server.url()).unwrap().risk_score().await.unwrap();
        mock.assert_async().await;
        assert_eq!(score, expected, "{count} reports");
    }
}

#[tokio::test]
async fn submit_report_sends_form_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/report")
        .match_body(Matcher::Json(json!({
            "place": "Park gate",
            "description": "No lighting",
            "lat": 12.5,
            "lng": null
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let report = ReportSubmission::new("Park gate", "No lighting").with_coordinates(Some(12.5), None);
    ApiClient::new(&server.url())
        .unwrap()
        .submit_report(&report)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_report_surfaces_server_error() {
    let (server, _mock) = server_with(
        "POST",
        "/api/report",
        json!({"ok": false, "error": "place required"}),
    )
    .await;

    let err = ApiClient::new(&server.url())
        .unwrap()
        .submit_report(&ReportSubmission::new("x", "y"))
        .await
        .unwrap_err();

    match err {
        CoreError::Api { endpoint, message } => {
            assert_eq!(endpoint, "/api/report");
            assert_eq!(message, "place required");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_report_without_reason_uses_fallback() {
    let (server, _mock) = server_with("POST", "/api/report", json!({"ok": false})).await;
    let err = ApiClient::new(&server.url())
        .unwrap()
        .submit_report(&ReportSubmission::new("x", "y"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to submit"));
}

#[tokio::test]
async fn invalid_report_is_not_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/report")
        .expect(0)
        .create_async()
        .await;

    let err = ApiClient::new(&server.url())
        .unwrap()
        .submit_report(&ReportSubmission::new("", "y"))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, CoreError::Validation(_)));
}
