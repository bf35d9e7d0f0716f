use super::*;
use crate::config::{AUTH_TOKEN_KEY, USER_KEY};
use crate::session::{KeyValueStore, MemoryStore, RecordingNavigator};

struct Harness {
    backend: Arc<MemoryStore>,
    navigator: Arc<RecordingNavigator>,
    pipeline: Pipeline,
}

fn harness(entries: &[(&str, &str)], path: &str) -> Harness {
    let backend = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
    let navigator = Arc::new(RecordingNavigator::at(path));
    let session = SessionStore::new(backend.clone());
    let pipeline = Pipeline::authenticated(&ClientConfig::default(), session, navigator.clone());
    Harness { backend, navigator, pipeline }
}

fn logged_in(path: &str) -> Harness {
    harness(&[(AUTH_TOKEN_KEY, "tok-123"), (USER_KEY, r#"{"id":1}"#)], path)
}

// =============================================================
// Request stage
// =============================================================

#[test]
fn attaches_exact_stored_token() {
    let h = logged_in("/");
    let req = h.pipeline.prepare(RequestConfig::get("/api/products")).unwrap();
    assert_eq!(req.header(AUTHORIZATION), Some("Bearer tok-123"));
}

#[test]
fn leaves_headers_alone_without_token() {
    let h = harness(&[], "/");
    let req = h.pipeline.prepare(RequestConfig::get("/api/products")).unwrap();
    assert_eq!(req.header(AUTHORIZATION), None);
}

#[test]
fn keeps_caller_authorization_without_token() {
    let h = harness(&[], "/");
    let req = h
        .pipeline
        .prepare(RequestConfig::get("/api/products").with_header(AUTHORIZATION, "Basic xyz"))
        .unwrap();
    assert_eq!(req.header(AUTHORIZATION), Some("Basic xyz"));
}

#[test]
fn stored_token_replaces_caller_authorization() {
    let h = logged_in("/");
    let req = h
        .pipeline
        .prepare(RequestConfig::get("/api/products").with_header(AUTHORIZATION, "Basic xyz"))
        .unwrap();
    assert_eq!(req.header(AUTHORIZATION), Some("Bearer tok-123"));
}

#[test]
fn attaches_token_to_absolute_url_on_base_origin() {
    let h = logged_in("/");
    let req = h
        .pipeline
        .prepare(RequestConfig::get("http://localhost:8080/api/carts/current"))
        .unwrap();
    assert_eq!(req.header(AUTHORIZATION), Some("Bearer tok-123"));
}

#[test]
fn does_not_attach_token_to_foreign_origin() {
    let h = logged_in("/");
    let req = h
        .pipeline
        .prepare(RequestConfig::get("https://tracker.example.com/pixel"))
        .unwrap();
    assert_eq!(req.header(AUTHORIZATION), None);
}

#[test]
fn attaches_token_when_base_host_differs_only_in_case() {
    let h = logged_in("/");
    let req = h
        .pipeline
        .prepare(RequestConfig::get("http://LOCALHOST:8080/api/products"))
        .unwrap();
    assert_eq!(req.header(AUTHORIZATION), Some("Bearer tok-123"));
}

#[test]
fn does_not_attach_token_to_uppercase_scheme_foreign_url() {
    let h = logged_in("/");
    let req = h
        .pipeline
        .prepare(RequestConfig::get("HTTPS://api.partner.example/v1"))
        .unwrap();
    assert_eq!(req.header(AUTHORIZATION), None);
}

#[test]
fn protocol_relative_urls_are_judged_by_their_host() {
    let h = logged_in("/");
    let own = h.pipeline.prepare(RequestConfig::get("//localhost:8080/api/products")).unwrap();
    let foreign = h.pipeline.prepare(RequestConfig::get("//evil.example/api/products")).unwrap();
    assert_eq!(own.header(AUTHORIZATION), Some("Bearer tok-123"));
    assert_eq!(foreign.header(AUTHORIZATION), None);
}

#[test]
fn explicit_default_port_counts_as_base_origin() {
    let backend = Arc::new(MemoryStore::with_entries([(AUTH_TOKEN_KEY, "tok-123")]));
    let config = ClientConfig::with_base_url("http://localhost").unwrap();
    let pipeline = Pipeline::authenticated(&config, SessionStore::new(backend), Arc::new(RecordingNavigator::at("/")));
    let req = pipeline
        .prepare(RequestConfig::get("http://localhost:80/api/products"))
        .unwrap();
    assert_eq!(req.header(AUTHORIZATION), Some("Bearer tok-123"));
}

struct Reject;

impl RequestStage for Reject {
    fn prepare(&self, _request: RequestConfig) -> Result<RequestConfig, ApiError> {
        Err(ApiError::Stage("rejected".to_owned()))
    }
}

#[test]
fn first_failing_request_stage_aborts() {
    let pipeline = Pipeline::new().with_request_stage(Reject);
    let err = pipeline.prepare(RequestConfig::get("/x")).unwrap_err();
    assert_eq!(err, ApiError::Stage("rejected".to_owned()));
}

// =============================================================
// Response stage
// =============================================================

#[test]
fn unauthorized_clears_session_and_redirects_once() {
    let h = logged_in("/cart");
    let outcome = h.pipeline.observe(Err(ApiError::from_status(401, "")));
    assert_eq!(outcome.unwrap_err().status(), Some(401));
    assert!(!h.backend.contains(AUTH_TOKEN_KEY));
    assert!(!h.backend.contains(USER_KEY));
    assert_eq!(h.navigator.navigations(), vec!["/login".to_owned()]);
}

#[test]
fn unauthorized_on_login_page_clears_without_navigating() {
    let h = logged_in("/login");
    let outcome = h.pipeline.observe(Err(ApiError::from_status(401, "")));
    assert!(outcome.is_err());
    assert!(!h.backend.contains(AUTH_TOKEN_KEY));
    assert!(!h.backend.contains(USER_KEY));
    assert!(h.navigator.navigations().is_empty());
}

#[test]
fn concurrent_unauthorized_responses_are_idempotent() {
    let h = logged_in("/orders");
    let _ = h.pipeline.observe(Err(ApiError::from_status(401, "")));
    let _ = h.pipeline.observe(Err(ApiError::from_status(401, "")));
    assert!(!h.backend.contains(AUTH_TOKEN_KEY));
    // The first redirect lands on /login, so the second sees it and stays put.
    assert_eq!(h.navigator.navigations(), vec!["/login".to_owned()]);
}

#[test]
fn other_statuses_pass_through_untouched() {
    for status in [400, 403, 404, 500, 503] {
        let h = logged_in("/cart");
        let outcome = h.pipeline.observe(Err(ApiError::from_status(status, "nope")));
        assert_eq!(outcome.unwrap_err().status(), Some(status));
        assert_eq!(h.backend.get(AUTH_TOKEN_KEY).as_deref(), Some("tok-123"));
        assert!(h.backend.contains(USER_KEY));
        assert!(h.navigator.navigations().is_empty());
    }
}

#[test]
fn transport_errors_pass_through_untouched() {
    let h = logged_in("/cart");
    let outcome = h.pipeline.observe(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome.unwrap_err(), ApiError::Transport("offline".to_owned()));
    assert!(h.backend.contains(AUTH_TOKEN_KEY));
    assert!(h.navigator.navigations().is_empty());
}

#[test]
fn success_passes_through_unchanged() {
    let h = logged_in("/cart");
    let resp = ApiResponse::new(200, "[]");
    let outcome = h.pipeline.observe(Ok(resp.clone()));
    assert_eq!(outcome.unwrap(), resp);
    assert!(h.backend.contains(AUTH_TOKEN_KEY));
    assert!(h.navigator.navigations().is_empty());
}
