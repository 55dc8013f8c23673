// src/tests/router_tests/job_detail_tests.rs

use crate::domain::job::fixtures::job;
use crate::domain::JobDataset;
use crate::router::Directory;
use crate::tests::utils::{body_string, get, test_directory};

#[test]
fn detail_page_shows_full_lists() {
    let dir = test_directory();
    let mut resp = get(&dir, "/jobs/osl-alna-night-stocker");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Night Shift Warehouse Stocker"));
    // The card preview stops at three; the detail page lists all four.
    assert!(body.contains("Report damaged goods to the shift lead"));
    assert!(body.contains("02.05.2024 (12 days ago)"));
    assert!(body.contains(r#"src="https://logo.clearbit.com/asko.no""#));
}

#[test]
fn card_preview_truncates_lists() {
    let dir = test_directory();
    let mut resp = get(&dir, "/");
    let body = body_string(&mut resp);
    assert!(body.contains("Keep aisles clear and safe for truck traffic"));
    assert!(!body.contains("Report damaged goods to the shift lead"));
}

#[test]
fn unknown_job_is_not_found() {
    let dir = test_directory();
    let mut resp = get(&dir, "/jobs/does-not-exist");
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));
}

fn directory_with_ids(ids: &[&str]) -> Directory {
    let jobs = ids
        .iter()
        .map(|id| job(id, "Tromsø", "Troms", (30000, 34000)))
        .collect();
    Directory::new(JobDataset::new(jobs).unwrap())
}

#[test]
fn escaped_ids_resolve_to_their_job() {
    let dir = directory_with_ids(&["tromsø-1", "a b#1"]);

    for (path, href) in [
        ("/jobs/troms%C3%B8-1", r#"href="/jobs/troms%C3%B8-1""#),
        ("/jobs/a%20b%231", r#"href="/jobs/a%20b%231""#),
    ] {
        let mut home = get(&dir, "/");
        assert!(body_string(&mut home).contains(href), "{href}");

        let resp = get(&dir, path);
        assert_eq!(resp.status(), 200, "{path}");
    }
}

#[test]
fn undecodable_id_is_not_found() {
    let dir = directory_with_ids(&["tromsø-1"]);
    assert_eq!(get(&dir, "/jobs/troms%FF-1").status(), 404);
}
