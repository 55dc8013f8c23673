// src/query.rs
//
// Binds URL query strings to the filter controller and back.

use crate::domain::{Choice, FilterController, FilterState, FilterUpdate};
use crate::errors::ServerError;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::str::FromStr;
use url::form_urlencoded;

/// Everything but RFC 3986 unreserved characters is escaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Decoded `key=value` pairs in request order. Repeated keys are kept.
pub fn parse_query(req: &astra::Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| {
            form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .unwrap_or_default()
}

/// Replays query pairs onto a fresh controller.
///
/// `tag` pairs accumulate into the required-tag list, `toggle` flips one tag,
/// `reset` drops everything seen so far. Unknown keys are ignored.
pub fn controller_from_query(
    salary_bounds: (u32, u32),
    pairs: &[(String, String)],
) -> Result<FilterController, ServerError> {
    let mut ctl = FilterController::new(salary_bounds);
    let mut tags: Vec<String> = Vec::new();

    for (key, value) in pairs {
        match key.as_str() {
            "q" => ctl.set_field(FilterUpdate::Search(value.clone())),
            "city" => ctl.set_field(FilterUpdate::City(text_choice(value))),
            "language" => ctl.set_field(FilterUpdate::Language(text_choice(value))),
            "type" => ctl.set_field(FilterUpdate::Type(parsed_choice(key, value)?)),
            "shift" => ctl.set_field(FilterUpdate::Shift(parsed_choice(key, value)?)),
            "salary_min" => ctl.set_field(FilterUpdate::SalaryMin(parse_amount(key, value)?)),
            "salary_max" => ctl.set_field(FilterUpdate::SalaryMax(parse_amount(key, value)?)),
            "tag" => {
                tags.push(value.clone());
                ctl.set_field(FilterUpdate::Tags(tags.clone()));
            }
            "toggle" => {
                ctl.toggle_tag(value);
                tags = ctl.state().tags.clone();
            }
            "reset" => {
                ctl.reset();
                tags.clear();
            }
            _ => {}
        }
    }

    Ok(ctl)
}

/// Canonical query string: only fields that differ from the initial snapshot.
pub fn to_query(state: &FilterState, salary_bounds: (u32, u32)) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    if !state.search.trim().is_empty() {
        out.append_pair("q", &state.search);
    }
    if let Some(city) = state.city.as_option() {
        out.append_pair("city", city);
    }
    if let Some(job_type) = state.job_type.as_option() {
        out.append_pair("type", job_type.label());
    }
    if let Some(shift) = state.shift.as_option() {
        out.append_pair("shift", shift.label());
    }
    if let Some(language) = state.language.as_option() {
        out.append_pair("language", language);
    }
    for tag in &state.tags {
        out.append_pair("tag", tag);
    }
    if state.salary_min != salary_bounds.0 {
        out.append_pair("salary_min", &state.salary_min.to_string());
    }
    if state.salary_max != salary_bounds.1 {
        out.append_pair("salary_max", &state.salary_max.to_string());
    }

    out.finish()
}

/// Same state with `tag` flipped, as a query string for chip links.
pub fn toggled_query(ctl: &FilterController, tag: &str) -> String {
    let mut next = ctl.clone();
    next.toggle_tag(tag);
    to_query(next.state(), next.salary_bounds())
}

/// `?query` or nothing, ready to append to a path.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Detail page link for a job id, escaped as a single path segment.
pub fn job_path(id: &str) -> String {
    format!("/jobs/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// Decodes the segment after `/jobs/`. `None` when it is not UTF-8.
pub fn job_id_from_segment(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|id| id.into_owned())
}

/// City and language selectors are kept exactly as sent.
fn text_choice(value: &str) -> Choice<String> {
    if value.is_empty() || value == "Any" {
        Choice::Any
    } else {
        Choice::Only(value.to_string())
    }
}

fn parsed_choice<T: FromStr<Err = String>>(key: &str, value: &str) -> Result<Choice<T>, ServerError> {
    match text_choice(value.trim()) {
        Choice::Any => Ok(Choice::Any),
        Choice::Only(v) => v
            .parse::<T>()
            .map(Choice::Only)
            .map_err(|e| ServerError::BadRequest(format!("{key}: {e}"))),
    }
}

fn parse_amount(key: &str, value: &str) -> Result<u32, ServerError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ServerError::BadRequest(format!("{key}: '{value}' is not a whole NOK amount")))
}
