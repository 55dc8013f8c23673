use crate::domain::Job;
use crate::templates::{components::company_logo, desktop_layout, format::posted_relative};
use chrono::NaiveDate;
use maud::{html, Markup};

/// Full posting: every responsibility and requirement, not just the card preview.
pub fn job_detail_page(job: &Job, today: NaiveDate) -> Markup {
    desktop_layout(
        &job.title,
        html! {
            main class="container" {
                p { a href="/" { "← All openings" } }

                article class="glass-panel job-detail" {
                    div class="job-card-head" {
                        (company_logo(job))
                        div {
                            p class="eyebrow" { (job.organization) }
                            h1 { (job.title) }
                            p class="muted" {
                                (job.location_label()) " • " (job.job_type) " • " (job.shift) " shift"
                            }
                        }
                    }

                    p class="lead" { (job.description) }

                    dl class="facts" {
                        dt { "Salary" }
                        dd class="accent" { (job.salary_range) }
                        dt { "Language" }
                        dd { (job.language) }
                        dt { "Posted" }
                        dd { (job.posted_on.format("%d.%m.%Y")) " (" (posted_relative(job.posted_on, today)) ")" }
                    }

                    div class="two-col" {
                        section {
                            h2 { "Responsibilities" }
                            ul { @for item in &job.responsibilities { li { (item) } } }
                        }
                        section {
                            h2 { "Requirements" }
                            ul { @for item in &job.requirements { li { (item) } } }
                        }
                    }

                    div class="chips" {
                        @for tag in &job.tags {
                            a class="chip" href=(format!("/?tag={}", url::form_urlencoded::byte_serialize(tag.as_bytes()).collect::<String>())) { (tag) }
                        }
                    }

                    a class="btn btn-primary" href=(job.apply_url) target="_blank" rel="noopener noreferrer" {
                        "Apply now"
                    }
                }
            }
        },
    )
}
