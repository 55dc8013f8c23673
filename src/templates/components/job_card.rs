use crate::domain::Job;
use crate::query::job_path;
use crate::templates::format::posted_relative;
use chrono::NaiveDate;
use maud::{html, Markup};

const STAGGER_MS: usize = 60;
const PREVIEW_ITEMS: usize = 3;

/// Logo image, or a tinted square when the employer has none.
pub fn company_logo(job: &Job) -> Markup {
    html! {
        @match &job.company_logo {
            Some(src) => {
                img class="logo" src=(src) alt=(format!("{} logo", job.organization));
            }
            None => {
                div class="logo logo-placeholder" aria-hidden="true" {}
            }
        }
    }
}

pub fn job_card(job: &Job, index: usize, reduced_motion: bool, today: NaiveDate) -> Markup {
    let animation = (!reduced_motion).then(|| format!("animation-delay: {}ms", index * STAGGER_MS));

    html! {
        article.glass-panel.job-card.animate-in[!reduced_motion] style=[animation] {
            div class="job-card-head" {
                (company_logo(job))
                div {
                    p class="eyebrow" { (job.organization) }
                    h3 { a href=(job_path(&job.id)) { (job.title) } }
                    p class="muted" {
                        (job.location_label()) " • " (job.job_type) " • " (job.shift) " shift"
                    }
                }
            }

            p { (job.description) }

            div class="two-col" {
                div {
                    h4 { "Salary" }
                    p class="accent" { (job.salary_range) }
                }
                div {
                    h4 { "Language" }
                    p { (job.language) }
                }
            }

            div class="two-col" {
                div {
                    h4 { "Key responsibilities" }
                    ul {
                        @for item in job.responsibilities.iter().take(PREVIEW_ITEMS) {
                            li { (item) }
                        }
                    }
                }
                div {
                    h4 { "Requirements" }
                    ul {
                        @for item in job.requirements.iter().take(PREVIEW_ITEMS) {
                            li { (item) }
                        }
                    }
                }
            }

            div class="job-card-foot" {
                div class="chips" {
                    @for tag in &job.tags {
                        span class="chip" { (tag) }
                    }
                }
                a class="btn btn-primary" href=(job.apply_url) target="_blank" rel="noopener noreferrer" {
                    "Apply now"
                }
            }

            span class="posted" { "Posted " (posted_relative(job.posted_on, today)) }
        }
    }
}
