//! Test harness wiring mock providers into a real pipeline, store and router.
//!
//! Nothing leaves the process: providers are the in-memory mocks from
//! `kernel::test_dependencies`, and HTTP requests go through the router with
//! `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lead_core::domains::leads::{LeadPipeline, LeadStore, PipelineSettings};
use lead_core::kernel::TestDependencies;
use lead_core::server::build_app;
use serde_json::Value;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Test harness owning mock providers and the store they feed.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     ctx.pipeline().run_cycle().await;
///     let (status, body) = ctx.get_json("/api/stats").await;
/// }
/// ```
pub struct TestHarness {
    /// Mock providers. Clones share state, so calls can be inspected here.
    pub deps: TestDependencies,
    pub store: LeadStore,
    pipeline: LeadPipeline,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new(TestDependencies::new())
    }

    async fn teardown(self) {
        // Store and mocks are dropped with the harness
    }
}

impl TestHarness {
    /// Harness around the given mocks, with no delay between leads.
    pub fn new(deps: TestDependencies) -> Self {
        init_tracing();

        let store = LeadStore::new();
        let pipeline = LeadPipeline::new(
            deps.build_deps(),
            store.clone(),
            PipelineSettings::immediate(),
        );

        Self {
            deps,
            store,
            pipeline,
        }
    }

    pub fn pipeline(&self) -> &LeadPipeline {
        &self.pipeline
    }

    pub fn app(&self) -> Router {
        build_app(self.store.clone())
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .app()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }
}

/// Respect RUST_LOG in tests. Run with: RUST_LOG=debug cargo test -- --nocapture
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
