// src/tests/router_tests/export_tests.rs

use crate::tests::utils::{body_string, content_type, get, test_directory};

#[test]
fn export_returns_spreadsheet_attachment() {
    let dir = test_directory();
    let resp = get(&dir, "/export.xlsx?tag=Forklift");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        content_type(&resp),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(disposition.contains("stocker_jobs.xlsx"));
}

#[test]
fn export_link_carries_current_filters() {
    let dir = test_directory();
    let mut resp = get(&dir, "/?shift=Night&tag=Forklift");
    let body = body_string(&mut resp);
    assert!(body.contains(r#"href="/export.xlsx?shift=Night&amp;tag=Forklift""#));
}
