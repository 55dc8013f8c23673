// templates/pages/directory.rs

use crate::domain::{FilterContext, FilterController, FilterOutcome};
use crate::query::{to_query, with_query};
use crate::templates::{
    components::{card, filters_panel, job_card, resource_link, summary_panel},
    desktop_layout,
};
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct DirectoryVm<'a> {
    pub controller: &'a FilterController,
    pub context: &'a FilterContext,
    pub outcome: &'a FilterOutcome<'a>,
    pub reduced_motion: bool,
    pub today: NaiveDate,
}

pub fn directory_page(vm: &DirectoryVm) -> Markup {
    let count = vm.outcome.jobs.len();
    let query = to_query(vm.controller.state(), vm.controller.salary_bounds());

    desktop_layout(
        "Openings",
        html! {
            main class="container" {
                section class="glass-panel hero" {
                    div class="hero-copy" {
                        span class="pill" { "Norway stocker opportunities" }
                        h1 { "Find logistics and stocking roles across Norway's leading hubs" }
                        p class="lead" {
                            "Explore curated openings for warehouse, fulfilment, and distribution stockers. "
                            "Filter by city, shift pattern, language, and salary to match your goals, "
                            "then head straight to the employer application page."
                        }
                    }
                    (summary_panel(&vm.outcome.summary))
                }

                section class="directory" {
                    (filters_panel(vm.controller, vm.context))

                    div class="results" {
                        header {
                            h2 id="result-count" {
                                (count) " open role" @if count != 1 { "s" }
                            }
                            p class="muted" {
                                "Showing positions that match your filters. "
                                "Open a role for responsibilities, requirements, and next steps."
                            }
                            a class="small" href=(with_query("/export.xlsx", &query)) { "Download as spreadsheet" }
                        }

                        @for (index, job) in vm.outcome.jobs.iter().enumerate() {
                            (job_card(job, index, vm.reduced_motion, vm.today))
                        }

                        @if count == 0 {
                            div class="glass-panel empty-state" {
                                h3 { "No matches with the current filters" }
                                p {
                                    "Try expanding your salary range, removing some tags, or selecting "
                                    span class="accent" { "Any" }
                                    " for shift or language to see more opportunities."
                                }
                            }
                        }
                    }
                }

                section class="two-col" {
                    (card("Prepare for Norwegian logistics interviews", interview_tips()))
                    (card("Helpful resources", resources()))
                }
            }
        },
    )
}

fn interview_tips() -> Markup {
    html! {
        ul {
            li {
                strong { "Highlight safety culture: " }
                "Employers value documented HSE routines, forklift licenses, and food "
                "safety certificates. Bring proof on the day of interview."
            }
            li {
                strong { "Emphasise digital fluency: " }
                "Many warehouses rely on WMS, tablets, and automation dashboards. A short "
                "demo of your previous workflow can stand out."
            }
            li {
                strong { "Brush up on language basics: " }
                "Even when English is accepted, simple Norwegian phrases demonstrate "
                "commitment to the team."
            }
        }
    }
}

fn resources() -> Markup {
    html! {
        ul {
            (resource_link(
                "https://www.nav.no/en/home",
                "NAV arbeid: official Norwegian labour portal",
                "Search for logistics, lager, and distribution openings nationwide.",
            ))
            (resource_link(
                "https://arbeidsplassen.nav.no/stillinger",
                "Arbeidsplassen: job board curated by the Labour and Welfare Administration",
                "Filter by keyword \"lager\", \"stocker\" or \"logistikk\" for more leads.",
            ))
            (resource_link(
                "https://www.workindenmark.dk/find-a-job/job-search-tools/eures-portal",
                "EURES Norway: cross-border job support",
                "Access relocation advice, CV translation, and job fairs across the EEA.",
            ))
            (resource_link(
                "https://www.yrkesnorsk.no/",
                "Yrkesnorsk: workplace Norwegian training",
                "Learn vocabulary specific to warehousing, logistics, and transport.",
            ))
        }
    }
}
