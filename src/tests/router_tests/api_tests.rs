// src/tests/router_tests/api_tests.rs

use crate::tests::utils::{body_string, content_type, get, test_directory};
use serde_json::Value;

fn get_json(uri: &str) -> Value {
    let dir = test_directory();
    let mut resp = get(&dir, uri);
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "application/json");
    serde_json::from_str(&body_string(&mut resp)).unwrap()
}

#[test]
fn api_returns_state_summary_and_options() {
    let v = get_json("/api/jobs");

    assert_eq!(v["summary"]["total"], 12);
    assert_eq!(v["summary"]["averageSalary"], 38167);
    assert_eq!(v["summary"]["topCities"][0][0], "Oslo, Oslo");
    assert_eq!(v["summary"]["topCities"][0][1], 3);
    assert_eq!(v["salaryBounds"][0], 26000);
    assert_eq!(v["salaryBounds"][1], 47000);
    assert_eq!(v["filters"]["city"], "Any");
    assert_eq!(v["filters"]["salaryMin"], 26000);
    assert_eq!(v["jobs"].as_array().unwrap().len(), 12);

    let cities: Vec<&str> = v["options"]["cities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    let mut sorted = cities.clone();
    sorted.sort();
    assert_eq!(cities, sorted);
    assert_eq!(cities.len(), 8);
}

#[test]
fn api_options_ignore_current_filters() {
    let unfiltered = get_json("/api/jobs");
    let filtered = get_json("/api/jobs?city=Bergen%2C+Vestland");

    assert_eq!(filtered["summary"]["total"], 2);
    assert_eq!(filtered["options"], unfiltered["options"]);
}

#[test]
fn api_preserves_dataset_order() {
    let v = get_json("/api/jobs?tag=Forklift");
    let ids: Vec<&str> = v["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "osl-alna-night-stocker",
            "osl-cold-chain-stocker",
            "brg-dokken-port-handler",
            "svg-forus-dg-handler",
            "gen-gardermoen-cargo",
        ]
    );
}

#[test]
fn api_clamps_crossed_salary_bounds() {
    let v = get_json("/api/jobs?salary_min=40000&salary_max=30000");
    assert_eq!(v["filters"]["salaryMin"], 40000);
    assert_eq!(v["filters"]["salaryMax"], 40000);
}

#[test]
fn api_rejects_non_numeric_salary() {
    let dir = test_directory();
    assert_eq!(get(&dir, "/api/jobs?salary_max=many").status(), 400);
}
