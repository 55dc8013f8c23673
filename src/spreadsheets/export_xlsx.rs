use crate::domain::Job;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, XlsxError};

const HEADERS: [&str; 11] = [
    "Title",
    "Organization",
    "Location",
    "Type",
    "Shift",
    "Language",
    "Salary Min (NOK)",
    "Salary Max (NOK)",
    "Tags",
    "Posted On",
    "Apply URL",
];

fn cell_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Builds the workbook bytes for a filtered job list.
pub fn jobs_workbook(jobs: &[&Job]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Jobs").map_err(cell_err("sheet name"))?;

    // Headers
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(cell_err(header))?;
    }

    // Rows
    for (i, job) in jobs.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, &job.title).map_err(cell_err("title"))?;
        worksheet
            .write_string(r, 1, &job.organization)
            .map_err(cell_err("organization"))?;
        worksheet
            .write_string(r, 2, job.location_label())
            .map_err(cell_err("location"))?;
        worksheet
            .write_string(r, 3, job.job_type.label())
            .map_err(cell_err("type"))?;
        worksheet
            .write_string(r, 4, job.shift.label())
            .map_err(cell_err("shift"))?;
        worksheet
            .write_string(r, 5, &job.language)
            .map_err(cell_err("language"))?;
        worksheet
            .write_number(r, 6, f64::from(job.salary_monthly_nok.min))
            .map_err(cell_err("salary min"))?;
        worksheet
            .write_number(r, 7, f64::from(job.salary_monthly_nok.max))
            .map_err(cell_err("salary max"))?;
        worksheet
            .write_string(r, 8, job.tags.join(", "))
            .map_err(cell_err("tags"))?;
        worksheet
            .write_string(r, 9, job.posted_on.format("%Y-%m-%d").to_string())
            .map_err(cell_err("posted on"))?;
        worksheet
            .write_string(r, 10, &job.apply_url)
            .map_err(cell_err("apply url"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_jobs_xlsx(jobs: &[&Job]) -> ResultResp {
    let buffer = jobs_workbook(jobs)?;
    xlsx_response(buffer, "stocker_jobs.xlsx")
}
