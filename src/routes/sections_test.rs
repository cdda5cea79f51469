use axum::body::Body;
use axum::http::{Request, header};
use serde_json::Value;
use tower::ServiceExt;

use super::*;
use crate::routes::app;
use crate::state::test_helpers::test_app_state;

async fn get(uri: &str) -> (StatusCode, String) {
    let response = app(test_app_state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_str(&body).unwrap_or(Value::Null))
}

#[test]
fn invalid_section_maps_to_not_found() {
    let err = ReportError::InvalidSection("x".into());
    assert_eq!(report_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_ok() {
    let (status, _) = get("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn index_renders_abstract() {
    let (status, html) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>Abstract</h2>"));
    assert!(html.contains("<a href=\"/sections/abstract\" aria-current=\"page\">"));
}

#[tokio::test]
async fn index_accepts_section_query() {
    let (status, html) = get("/?section=Data%20Sources").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>Data Sources</h2>"));
    assert!(html.contains("<td>114919</td>"));
}

#[tokio::test]
async fn index_unknown_query_is_not_found() {
    let (status, body) = get("/?section=Appendix").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "invalid section: Appendix");
}

#[tokio::test]
async fn index_duplicate_section_query_is_not_found() {
    let (status, body) = get("/?section=abstract&section=results").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.starts_with("invalid section: "));
}

#[tokio::test]
async fn pages_are_gzipped_when_accepted() {
    let response = app(test_app_state())
        .oneshot(
            Request::builder()
                .uri("/sections/results")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
}

#[tokio::test]
async fn pages_are_plain_without_accept_encoding() {
    let response = app(test_app_state())
        .oneshot(Request::builder().uri("/sections/results").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
}

#[tokio::test]
async fn section_page_renders_results_table() {
    let (status, html) = get("/sections/results").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>Results</h2>"));
    assert!(html.contains("<td>XGBoost</td>"));
    assert!(html.contains("<td>0.986644</td>"));
}

#[tokio::test]
async fn every_section_page_is_served() {
    for section in Section::ALL {
        let (status, html) = get(&format!("/sections/{}", section.slug())).await;
        assert_eq!(status, StatusCode::OK, "{section}");
        let selected = format!("<a href=\"/sections/{}\" aria-current=\"page\">", section.slug());
        assert!(html.contains(&selected), "{section} not marked selected");
    }
}

#[tokio::test]
async fn unknown_section_page_is_not_found() {
    let (status, body) = get("/sections/appendix").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("invalid section"));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn repeated_requests_return_identical_pages() {
    let (_, first) = get("/sections/abstract").await;
    let (_, _) = get("/sections/results").await;
    let (_, second) = get("/sections/abstract").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn api_lists_sections_in_order() {
    let (status, json) = get_json("/api/sections").await;
    assert_eq!(status, StatusCode::OK);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["slug"], "abstract");
    assert_eq!(entries[5]["label"], "Prior Art & Challenges");
    assert_eq!(entries[9]["slug"], "contributions-and-conclusions");
}

#[tokio::test]
async fn api_section_content_returns_blocks() {
    let (status, json) = get_json("/api/sections/data-sources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["label"], "Data Sources");
    let blocks = json["blocks"].as_array().unwrap();
    let table = blocks.iter().find(|b| b["type"] == "table").unwrap();
    assert_eq!(table["value"]["rows"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn api_unknown_section_is_not_found() {
    let (status, _) = get("/api/sections/appendix").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
