// src/tests/router_tests/directory_tests.rs

use crate::tests::utils::{body_string, content_type, get, get_with, test_directory};

#[test]
fn unfiltered_page_lists_every_job() {
    let dir = test_directory();
    let mut resp = get(&dir, "/");

    assert_eq!(resp.status(), 200);
    assert!(content_type(&resp).starts_with("text/html"));
    assert_eq!(
        resp.headers().get("Accept-CH").unwrap(),
        "Sec-CH-Prefers-Reduced-Motion"
    );

    let body = body_string(&mut resp);
    assert!(body.contains("12 open roles"));
    assert!(body.contains(">12<"));
    // Mean of the twelve upper salary bounds, 458 000 / 12.
    assert!(body.contains("NOK 38\u{a0}167"));
    assert!(body.contains("Oslo, Oslo • 3 openings"));
    // Bergen and Trondheim both have two; Bergen appears first in the dataset.
    let bergen = body.find("Bergen, Vestland • 2 openings").unwrap();
    let trondheim = body.find("Trøndelag • 2 openings").unwrap();
    assert!(bergen < trondheim);
}

#[test]
fn keyword_search_narrows_results() {
    let dir = test_directory();
    let mut resp = get(&dir, "/?q=FORKLIFT");
    let body = body_string(&mut resp);

    assert!(body.contains("5 open roles"));
    assert!(body.contains("Port Warehouse Handler"));
    assert!(!body.contains("E-commerce Picker &amp; Packer"));
}

#[test]
fn combined_filters_and_singular_heading() {
    let dir = test_directory();
    let mut resp = get(&dir, "/?city=Oslo%2C+Oslo&shift=Night&tag=Forklift");
    let body = body_string(&mut resp);

    assert!(body.contains("1 open role<"));
    assert!(body.contains("Night Shift Warehouse Stocker"));
    assert!(body.contains(r#"<option value="Oslo, Oslo" selected>"#));
}

#[test]
fn empty_result_shows_guidance() {
    let dir = test_directory();
    let mut resp = get(&dir, "/?q=submarine");
    let body = body_string(&mut resp);

    assert!(body.contains("0 open roles"));
    assert!(body.contains("No matches with the current filters"));
    assert!(body.contains("No hubs with current filters."));
    assert!(body.contains("NOK 0"));
}

#[test]
fn salary_overlap_filter() {
    let dir = test_directory();
    // Only the Forus and Dokken roles reach 44 500 or more.
    let mut resp = get(&dir, "/?salary_min=44500");
    let body = body_string(&mut resp);

    assert!(body.contains("2 open roles"));
    assert!(body.contains("Dangerous Goods Warehouse Operator"));
    assert!(body.contains("Port Warehouse Handler"));
}

#[test]
fn reset_discards_earlier_parameters() {
    let dir = test_directory();
    let mut resp = get(&dir, "/?q=submarine&reset=1");
    let body = body_string(&mut resp);
    assert!(body.contains("12 open roles"));
}

#[test]
fn invalid_enum_is_bad_request() {
    let dir = test_directory();
    let mut resp = get(&dir, "/?shift=Weekend");
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("unknown shift"));
}

#[test]
fn reduced_motion_hint_disables_stagger() {
    let dir = test_directory();

    let mut animated = get(&dir, "/");
    assert!(body_string(&mut animated).contains("animation-delay: 60ms"));

    let mut still = get_with(&dir, "/", &[("Sec-CH-Prefers-Reduced-Motion", "reduce")]);
    let body = body_string(&mut still);
    assert!(!body.contains("animation-delay"));
    assert!(body.contains("12 open roles"));
}

#[test]
fn stylesheet_and_health() {
    let dir = test_directory();

    let css = get(&dir, "/static/main.css");
    assert_eq!(css.status(), 200);
    assert!(content_type(&css).starts_with("text/css"));

    let mut health = get(&dir, "/healthz");
    assert_eq!(health.status(), 200);
    assert_eq!(body_string(&mut health), "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let dir = test_directory();
    assert_eq!(get(&dir, "/admin").status(), 404);
}
