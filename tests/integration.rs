//! Integration tests for the billing engine.
//!
//! This test suite covers:
//! - Loading the sample data directory and rendering every invoice
//! - Per-genre fee and credit scenarios through the HTTP API
//! - Statement ordering in both renderings
//! - Error cases (unknown genre, missing play, malformed input)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use theater_billing::api::{AppState, create_router};
use theater_billing::config::DataLoader;
use theater_billing::{html_statement, statement};

// =============================================================================
// Test Helpers
// =============================================================================

fn data_path() -> &'static str {
    "./data"
}

fn create_router_for_test() -> Router {
    let loader = DataLoader::load(data_path()).expect("Failed to load data");
    create_router(AppState::new(loader.plays().clone()))
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body_bytes.to_vec())
}

async fn post_statement(router: Router, body: Value) -> (StatusCode, Value) {
    let (status, bytes) = post(router, "/statement", body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn create_request(customer: &str, performances: &[(&str, u32)]) -> Value {
    let performances: Vec<Value> = performances
        .iter()
        .map(|(play_id, audience)| json!({ "playID": play_id, "audience": audience }))
        .collect();

    json!({
        "invoice": {
            "customer": customer,
            "performances": performances
        }
    })
}

fn assert_line(result: &Value, index: usize, amount: u64, credits: u64) {
    let line = &result["statement"]["performances"][index];
    assert_eq!(line["amount"], amount, "amount of line {}", index);
    assert_eq!(line["volumeCredits"], credits, "credits of line {}", index);
}

// =============================================================================
// SECTION 1: Sample data
// =============================================================================

#[test]
fn test_sample_bigco_text_statement() {
    let loader = DataLoader::load(data_path()).unwrap();

    let text = statement(&loader.invoices()[0], loader.plays()).unwrap();

    assert_eq!(
        text,
        "청구 내역 (고객명: BigCo)\n\
         \x20 Hamlet: $650.00 (55석)\n\
         \x20 As You Like It: $580.00 (35석)\n\
         \x20 Othello: $500.00 (40석)\n\
         총액: $1,730.00\n\
         적립 포인트: 47점\n"
    );
}

#[test]
fn test_sample_bigco_html_statement() {
    let loader = DataLoader::load(data_path()).unwrap();

    let html = html_statement(&loader.invoices()[0], loader.plays()).unwrap();

    assert_eq!(
        html,
        "<h1>청구 내역 (고객명: BigCo)</h1>\n\
         <ul>\n\
         <li>Hamlet: $650.00 (55석)</li>\n\
         <li>As You Like It: $580.00 (35석)</li>\n\
         <li>Othello: $500.00 (40석)</li>\n\
         </ul>\n\
         <p>총액: <em>$1,730.00</em></p>\n\
         <p>적립 포인트: <em>47</em>점</p>\n"
    );
}

#[test]
fn test_sample_history_invoice() {
    let loader = DataLoader::load(data_path()).unwrap();

    let text = statement(&loader.invoices()[1], loader.plays()).unwrap();

    assert!(text.contains("  Henry V: $415.00 (21석)"));
    assert!(text.contains("  Hamlet: $400.00 (30석)"));
    assert!(text.contains("총액: $815.00"));
    assert!(text.contains("적립 포인트: 10점"));
}

// =============================================================================
// SECTION 2: Genre scenarios through the API
// =============================================================================

#[tokio::test]
async fn test_tragedy_at_and_above_threshold() {
    let request = create_request("BigCo", &[("hamlet", 30), ("hamlet", 31)]);

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_line(&result, 0, 40_000, 0);
    assert_line(&result, 1, 41_000, 1);
}

#[tokio::test]
async fn test_comedy_at_and_above_threshold() {
    let request = create_request("BigCo", &[("as-like", 20), ("as-like", 21)]);

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_line(&result, 0, 36_000, 4);
    assert_line(&result, 1, 46_800, 4);
}

#[tokio::test]
async fn test_history_at_and_above_threshold() {
    let request = create_request("BigCo", &[("henry-v", 20), ("henry-v", 21)]);

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_line(&result, 0, 40_000, 0);
    assert_line(&result, 1, 41_500, 10);
}

#[tokio::test]
async fn test_empty_audience_earns_base_fee_only() {
    let request = create_request("BigCo", &[("hamlet", 0), ("as-like", 0), ("henry-v", 0)]);

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_line(&result, 0, 40_000, 0);
    assert_line(&result, 1, 30_000, 0);
    assert_line(&result, 2, 10_000, 0);
    assert_eq!(result["statement"]["totalVolumeCredits"], 0);
}

#[tokio::test]
async fn test_two_performances_totals_and_order() {
    let request = create_request("BigCo", &[("hamlet", 31), ("as-like", 20)]);

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["statement"]["totalAmount"], 77_000);
    assert_eq!(result["statement"]["totalVolumeCredits"], 5);

    let text = result["text"].as_str().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "청구 내역 (고객명: BigCo)",
            "  Hamlet: $410.00 (31석)",
            "  As You Like It: $360.00 (20석)",
            "총액: $770.00",
            "적립 포인트: 5점",
        ]
    );
}

#[tokio::test]
async fn test_empty_invoice_has_zero_totals() {
    let request = create_request("Nobody", &[]);

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["statement"]["performances"], json!([]));
    assert_eq!(result["statement"]["totalAmount"], 0);
    assert_eq!(result["text"], "청구 내역 (고객명: Nobody)\n총액: $0.00\n적립 포인트: 0점\n");
}

#[tokio::test]
async fn test_html_endpoint_preserves_order() {
    let request = create_request("BigCo", &[("othello", 40), ("henry-v", 25), ("hamlet", 55)]);

    let (status, bytes) = post(create_router_for_test(), "/statement/html", request).await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(bytes).unwrap();
    let othello = html.find("<li>Othello").unwrap();
    let henry = html.find("<li>Henry V").unwrap();
    let hamlet = html.find("<li>Hamlet").unwrap();
    assert!(othello < henry && henry < hamlet);
}

// =============================================================================
// SECTION 3: Error cases
// =============================================================================

#[tokio::test]
async fn test_unknown_genre_from_request_catalog() {
    let mut request = create_request("BigCo", &[("hamlet", 55), ("rivals", 12)]);
    request["plays"] = json!({
        "hamlet": { "name": "Hamlet", "type": "tragedy" },
        "rivals": { "name": "The Rivals", "type": "farce" }
    });

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "UNKNOWN_GENRE");
    assert!(result["message"].as_str().unwrap().contains("farce"));
    assert!(result.get("statement").is_none());
}

#[tokio::test]
async fn test_missing_play_returns_400() {
    let request = create_request("BigCo", &[("macbeth", 40)]);

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "PLAY_NOT_FOUND");
    assert!(result["message"].as_str().unwrap().contains("macbeth"));
}

#[tokio::test]
async fn test_missing_audience_returns_validation_error() {
    let request = json!({
        "invoice": {
            "customer": "BigCo",
            "performances": [{ "playID": "hamlet" }]
        }
    });

    let (status, result) = post_statement(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("audience"));
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/statement/text")
                .body(Body::from(
                    serde_json::to_string(&create_request("BigCo", &[])).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(result["code"], "MISSING_CONTENT_TYPE");
}
