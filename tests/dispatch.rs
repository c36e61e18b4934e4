//! Integration tests over the assembled router.
//!
//! Drives the real middleware pipeline and dispatch table in-process
//! with `tower::ServiceExt::oneshot`, swapping the lookup backend for a
//! programmable stand-in so failure and timeout paths are deterministic.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use postcode_lookup::config::AppConfig;
use postcode_lookup::http::server::{build_router, AppState};
use postcode_lookup::lookup::{BallotPayload, LookupBackend, LookupError, LookupQuery};
use postcode_lookup::observability::ErrorSink;
use postcode_lookup::render::{BasicRenderer, RenderError, Renderer, Template};
use postcode_lookup::routing::table::{POSTCODE_FORM_EN, ROUTES};
use postcode_lookup::sandbox::SandboxTable;
use postcode_lookup::Locale;

/// Programmable lookup backend for exercising every live-handler branch.
enum MockBehavior {
    Succeed(serde_json::Value),
    Fail,
    Hang,
}

struct MockBackend(MockBehavior);

#[async_trait]
impl LookupBackend for MockBackend {
    async fn lookup(&self, _query: &LookupQuery) -> Result<BallotPayload, LookupError> {
        match &self.0 {
            MockBehavior::Succeed(payload) => Ok(BallotPayload(payload.clone())),
            MockBehavior::Fail => Err(LookupError::Unavailable("connection refused".into())),
            MockBehavior::Hang => {
                // Far beyond the test lookup bound.
                tokio::time::sleep(Duration::from_secs(60)).await;
                Err(LookupError::Unavailable("unreachable".into()))
            }
        }
    }
}

/// Renderer that fails on every template, for driving the
/// unexpected-fault path.
struct BrokenRenderer;

impl Renderer for BrokenRenderer {
    fn render(
        &self,
        template: Template,
        _locale: Locale,
        _data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        Err(RenderError::MissingField(template, "description"))
    }
}

fn state(behavior: MockBehavior) -> AppState {
    let mut config = AppConfig::default();
    config.lookup.timeout_ms = 100;

    AppState {
        config: Arc::new(config),
        backend: Arc::new(MockBackend(behavior)),
        sandbox: Arc::new(SandboxTable::new()),
        renderer: Arc::new(BasicRenderer),
        error_sink: Arc::new(ErrorSink::disabled()),
    }
}

fn app(behavior: MockBehavior) -> Router {
    build_router(state(behavior))
}

async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn every_listed_route_reaches_a_handler() {
    let router = app(MockBehavior::Succeed(json!({ "dates": [] })));

    for entry in ROUTES {
        let uri = entry
            .path
            .replace("{postcode}", "AA1%201AA")
            .replace("{uprn}", "100000000001");
        let response = get(&router, &uri).await;
        assert_ne!(
            response.status(),
            StatusCode::NOT_FOUND,
            "route {} ({}) fell through to the fallback",
            entry.name,
            uri
        );
    }
}

#[tokio::test]
async fn unmatched_path_renders_not_found_page() {
    let router = app(MockBehavior::Fail);
    let response = get(&router, "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn root_redirects_to_english_postcode_form() {
    let router = app(MockBehavior::Fail);
    let response = get(&router, "/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        POSTCODE_FORM_EN
    );
}

#[tokio::test]
async fn failover_direct_and_backend_error_bodies_are_identical() {
    let router = app(MockBehavior::Fail);

    let direct = get(&router, "/failover").await;
    assert_eq!(direct.status(), StatusCode::OK);
    let direct_body = body_string(direct).await;

    let degraded = get(&router, "/polling-stations?postcode=AA1%201AA").await;
    assert_eq!(degraded.status(), StatusCode::OK);
    let degraded_body = body_string(degraded).await;

    assert_eq!(direct_body, degraded_body);
}

#[tokio::test]
async fn backend_timeout_serves_the_same_failover_body() {
    let hanging = app(MockBehavior::Hang);
    let via_timeout = get(&hanging, "/polling-stations?postcode=AA1%201AA").await;
    assert_eq!(via_timeout.status(), StatusCode::OK);
    let timeout_body = body_string(via_timeout).await;

    let direct = get(&hanging, "/failover").await;
    assert_eq!(timeout_body, body_string(direct).await);
}

#[tokio::test]
async fn live_lookup_success_renders_results() {
    let router = app(MockBehavior::Succeed(json!({
        "address_picker": false,
        "dates": [],
    })));
    let response = get(&router, "/polling-stations?postcode=AA1%201AA").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Your election information"));
}

#[tokio::test]
async fn blank_postcode_redirects_back_to_the_form() {
    let router = app(MockBehavior::Fail);
    let response = get(&router, "/polling-stations?postcode=%20%20").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        POSTCODE_FORM_EN
    );
}

#[tokio::test]
async fn welsh_sandbox_lookup_serves_no_local_ballots_in_welsh() {
    let router = app(MockBehavior::Fail);
    let response = get(&router, "/cy/sandbox/polling-stations?postcode=AA1%201AA").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_LANGUAGE).unwrap(),
        "cy"
    );
    let body = body_string(response).await;
    assert!(body.contains("lang=\"cy\""));
    assert!(body.contains("No local ballots"));
}

#[tokio::test]
async fn sandbox_uprn_value_is_ignored() {
    let router = app(MockBehavior::Fail);

    let first = body_string(get(&router, "/sandbox/polling-stations/CA1%201AB/100000000001").await).await;
    let second = body_string(get(&router, "/sandbox/polling-stations/CA1%201AB/999999999999").await).await;

    assert!(first.contains("candidate death"));
    assert_eq!(first, second);
}

#[tokio::test]
async fn sandbox_miss_renders_empty_state_with_success_status() {
    let router = app(MockBehavior::Fail);
    let response = get(&router, "/sandbox/polling-stations?postcode=ZZ9%209ZZ").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("no sandbox results"));
}

#[tokio::test]
async fn english_routes_carry_english_content_language() {
    let router = app(MockBehavior::Fail);
    let response = get(&router, "/sandbox/polling-stations?postcode=AA1%201AA").await;
    assert_eq!(
        response.headers().get(header::CONTENT_LANGUAGE).unwrap(),
        "en"
    );
}

#[tokio::test]
async fn uncoercible_query_surfaces_generic_server_error() {
    let sink = Arc::new(ErrorSink::with_dsn("https://key@ingest.example.io/0"));
    let mut state = state(MockBehavior::Fail);
    state.error_sink = sink.clone();
    let router = build_router(state);

    // A duplicated field cannot deserialize into PostcodeParams.
    let response = get(&router, "/polling-stations?postcode=a&postcode=b").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("Sorry, something went wrong"));
    assert!(!body.contains("deserialize"), "framework detail leaked to the user");
    assert_eq!(sink.forwarded_count(), 1);

    let response = get(&router, "/sandbox/polling-stations?postcode=a&postcode=b").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(sink.forwarded_count(), 2);
}

#[tokio::test]
async fn render_failure_surfaces_generic_server_error_and_hits_sink() {
    let sink = Arc::new(ErrorSink::with_dsn("https://key@ingest.example.io/0"));
    let mut state = state(MockBehavior::Fail);
    state.renderer = Arc::new(BrokenRenderer);
    state.error_sink = sink.clone();
    let router = build_router(state);

    let response = get(&router, POSTCODE_FORM_EN).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("Sorry, something went wrong"));
    assert_eq!(sink.forwarded_count(), 1);

    // The failover page is built outside the renderer seam and must
    // survive a broken renderer untouched.
    let failover = get(&router, "/failover").await;
    assert_eq!(failover.status(), StatusCode::OK);
}

#[tokio::test]
async fn forwarded_header_does_not_disturb_dispatch() {
    let router = app(MockBehavior::Fail);
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/sandbox/polling-stations?postcode=AA1%201AA")
                .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
