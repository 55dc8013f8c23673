use crate::domain::{FilterContext, FilterController, FilterOptions, FilterState, Job, JobDataset, Summary};
use crate::errors::ServerError;
use crate::query::{controller_from_query, job_id_from_segment, parse_query};
use crate::responses::{html_response, json_response, text_response, ResultResp};
use crate::spreadsheets::export_jobs_xlsx;
use crate::templates::pages::{directory_page, job_detail_page, DirectoryVm};
use astra::Request;
use chrono::{Local, NaiveDate};
use serde::Serialize;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Read-only state shared by every request: the dataset and what derives from it.
pub struct Directory {
    pub dataset: JobDataset,
    pub context: FilterContext,
}

impl Directory {
    pub fn new(dataset: JobDataset) -> Self {
        let context = FilterContext {
            options: dataset.options(),
            salary_bounds: dataset.salary_bounds(),
        };
        Self { dataset, context }
    }

    fn controller(&self, req: &Request) -> Result<FilterController, ServerError> {
        controller_from_query(self.context.salary_bounds, &parse_query(req))
    }
}

/// Body of `/api/jobs`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiJobs<'a> {
    filters: &'a FilterState,
    summary: &'a Summary,
    options: &'a FilterOptions,
    salary_bounds: (u32, u32),
    jobs: &'a [&'a Job],
}

pub fn handle(req: Request, dir: &Directory) -> ResultResp {
    handle_on(req, dir, Local::now().date_naive())
}

/// Routing with an explicit "today" so relative dates are testable.
pub fn handle_on(req: Request, dir: &Directory, today: NaiveDate) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let ctl = dir.controller(&req)?;
            let outcome = ctl.apply(dir.dataset.jobs());
            log::debug!(
                "directory: {} of {} jobs match (filtered: {})",
                outcome.summary.total,
                dir.dataset.len(),
                !ctl.is_pristine()
            );
            html_response(directory_page(&DirectoryVm {
                controller: &ctl,
                context: &dir.context,
                outcome: &outcome,
                reduced_motion: prefers_reduced_motion(&req),
                today,
            }))
        }

        ("GET", "/api/jobs") => {
            let ctl = dir.controller(&req)?;
            let outcome = ctl.apply(dir.dataset.jobs());
            json_response(&ApiJobs {
                filters: ctl.state(),
                summary: &outcome.summary,
                options: &dir.context.options,
                salary_bounds: dir.context.salary_bounds,
                jobs: &outcome.jobs,
            })
        }

        ("GET", "/export.xlsx") => {
            let ctl = dir.controller(&req)?;
            let outcome = ctl.apply(dir.dataset.jobs());
            log::info!("exporting {} jobs to xlsx", outcome.jobs.len());
            export_jobs_xlsx(&outcome.jobs)
        }

        ("GET", "/static/main.css") => text_response("text/css; charset=utf-8", MAIN_CSS),

        ("GET", "/healthz") => text_response(mime::TEXT_PLAIN_UTF_8.as_ref(), "ok"),

        ("GET", p) if p.starts_with("/jobs/") => {
            let id = job_id_from_segment(&p["/jobs/".len()..]).ok_or(ServerError::NotFound)?;
            let job = dir.dataset.find(&id).ok_or(ServerError::NotFound)?;
            html_response(job_detail_page(job, today))
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Reads the `Sec-CH-Prefers-Reduced-Motion` client hint. Cosmetic only.
pub fn prefers_reduced_motion(req: &Request) -> bool {
    req.headers()
        .get("Sec-CH-Prefers-Reduced-Motion")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("reduce"))
        .unwrap_or(false)
}
