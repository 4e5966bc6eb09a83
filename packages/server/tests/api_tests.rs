//! Integration tests for the read-only JSON API.
//!
//! Requests go through the full router (CORS and tracing layers included)
//! with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::StatusCode;
use lead_core::domains::leads::ErrorKind;
use lead_core::kernel::{MockAI, MockBusinessData, TestDependencies};
use test_context::test_context;

use crate::common::{candidate, enrichment_json, TestHarness};

async fn record_errors(ctx: &TestHarness, count: usize) {
    for i in 0..count {
        ctx.store
            .record(ErrorKind::Pipeline, format!("error {i}"))
            .await;
    }
}

// =============================================================================
// /api/leads
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn leads_endpoint_starts_empty(ctx: &TestHarness) {
    let (status, body) = ctx.get_json("/api/leads").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leads"], serde_json::json!([]));
    assert_eq!(body["total_leads"], 0);
    assert_eq!(body["enriched_leads"], 0);
    assert!(body["last_update"].is_string());
}

#[tokio::test]
async fn leads_endpoint_returns_enriched_leads() {
    let deps = TestDependencies::new()
        .mock_business_data(
            MockBusinessData::new().with_candidates(vec![candidate("Acme, Inc.", "Widgets")]),
        )
        .mock_ai(MockAI::new().with_fenced_json(enrichment_json("Makes widgets", "Manufacturing")));
    let ctx = TestHarness::new(deps);
    ctx.pipeline().run_cycle().await;

    let (status, body) = ctx.get_json("/api/leads").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_leads"], 1);
    assert_eq!(body["enriched_leads"], 1);

    let lead = &body["leads"][0];
    assert_eq!(lead["company_name"], "Acme, Inc.");
    assert_eq!(lead["email"], "contact@acmeinc.com");
    assert_eq!(lead["description"], "Makes widgets");
    assert_eq!(lead["industry"], "Manufacturing");
    assert_eq!(lead["enriched"], true);
    assert!(lead["created_at"].is_string());
    assert!(lead["search_context"].is_object());
}

#[tokio::test]
async fn leads_endpoint_caps_at_most_recent_hundred() {
    let candidates = (0..105)
        .map(|i| candidate(&format!("Company {i}"), ""))
        .collect();
    let deps = TestDependencies::new()
        .mock_business_data(MockBusinessData::new().with_candidates(candidates));
    let ctx = TestHarness::new(deps);
    ctx.pipeline().run_cycle().await;

    let (_, body) = ctx.get_json("/api/leads").await;

    let leads = body["leads"].as_array().expect("leads array");
    assert_eq!(leads.len(), 100);
    assert_eq!(body["total_leads"], 105);
    assert_eq!(leads[0]["company_name"], "Company 5");
    assert_eq!(leads[99]["company_name"], "Company 104");
}

// =============================================================================
// /api/stats
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn stats_status_is_active_below_five_errors(ctx: &TestHarness) {
    record_errors(ctx, 4).await;

    let (status, body) = ctx.get_json("/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(4));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn stats_status_is_warning_at_five_errors(ctx: &TestHarness) {
    record_errors(ctx, 5).await;

    let (_, body) = ctx.get_json("/api/stats").await;

    assert_eq!(body["status"], "warning");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn stats_lists_five_most_recent_errors(ctx: &TestHarness) {
    record_errors(ctx, 8).await;

    let (_, body) = ctx.get_json("/api/stats").await;

    assert_eq!(
        body["errors"],
        serde_json::json!(["error 3", "error 4", "error 5", "error 6", "error 7"])
    );
    assert_eq!(body["total_leads"], 0);
    assert_eq!(body["enriched_leads"], 0);
}

// =============================================================================
// /api/errors
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn errors_endpoint_reports_exact_total(ctx: &TestHarness) {
    record_errors(ctx, 60).await;

    let (status, body) = ctx.get_json("/api/errors").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_errors"], 60);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 50);
    assert_eq!(errors[0], "error 10");
    assert_eq!(errors[49], "error 59");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn errors_endpoint_shows_no_data_entry(ctx: &TestHarness) {
    ctx.pipeline().run_cycle().await;

    let (_, body) = ctx.get_json("/api/errors").await;

    assert_eq!(body["total_errors"], 1);
    assert_eq!(
        body["errors"][0],
        "No new data retrieved from business-data provider"
    );
}

// =============================================================================
// /health and unknown routes
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_ok(ctx: &TestHarness) {
    let (status, body) = ctx.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_route_is_not_found(ctx: &TestHarness) {
    let (status, _) = ctx.get_json("/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
