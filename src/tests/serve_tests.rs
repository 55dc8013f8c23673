// src/tests/serve_tests.rs

use crate::respond;
use crate::tests::utils::{body_string, content_type, test_directory};
use astra::{Body, ConnectionInfo, Request, Response};
use http::Method;

fn request(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn service_closure_matches_astra_signature() {
    let dir = test_directory();
    let service = move |req: Request, _info: ConnectionInfo| -> Response { respond(req, &dir) };
    fn assert_service<S: astra::Service>(_: &S) {}
    assert_service(&service);
}

#[test]
fn respond_passes_successes_through() {
    let dir = test_directory();
    let mut resp = respond(request("/healthz"), &dir);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(&mut resp), "ok");
}

#[test]
fn respond_renders_errors_as_pages() {
    let dir = test_directory();
    let mut resp = respond(request("/nowhere"), &dir);
    assert_eq!(resp.status(), 404);
    assert!(content_type(&resp).starts_with("text/html"));
    assert!(body_string(&mut resp).contains("Error 404"));
}
