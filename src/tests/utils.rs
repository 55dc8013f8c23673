use crate::domain::JobDataset;
use crate::router::{handle_on, Directory};
use astra::{Body, Response};
use chrono::NaiveDate;
use http::{Method, Request};
use std::io::Read;

/// Directory over the bundled production dataset.
pub fn test_directory() -> Directory {
    let dataset = JobDataset::bundled()
        .unwrap_or_else(|e| panic!("Bundled dataset failed to load: {e}"));
    Directory::new(dataset)
}

/// Fixed "today" so relative dates in rendered pages are stable.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
}

pub fn get(dir: &Directory, uri: &str) -> Response {
    get_with(dir, uri, &[])
}

pub fn get_with(dir: &Directory, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(Body::empty()).unwrap();

    match handle_on(req, dir, today()) {
        Ok(resp) => resp,
        Err(err) => crate::templates::html_error_response(err),
    }
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
