use crate::domain::{FilterContext, FilterController, JobType, ShiftType};
use crate::query::{toggled_query, with_query};
use crate::templates::format::format_nok;
use maud::{html, Markup};

const SALARY_STEP: u32 = 500;

/// Filter form. Submits as GET to `/`, so every filter state is a URL.
pub fn filters_panel(ctl: &FilterController, ctx: &FilterContext) -> Markup {
    let state = ctl.state();
    let (floor, ceiling) = ctx.salary_bounds;

    html! {
        aside class="glass-panel filters" {
            header {
                h2 { "Filter opportunities" }
                p class="muted" { "Tailor the stocker roles to match your experience and preferences." }
            }

            form method="get" action="/" {
                label {
                    "Keyword search"
                    input type="text" name="q" placeholder="cold storage, forklift..." value=(state.search);
                }

                label {
                    "Location"
                    select name="city" {
                        option value="Any" { "Any location" }
                        @for city in &ctx.options.cities {
                            option value=(city) selected[state.city.as_option() == Some(city)] { (city) }
                        }
                    }
                }

                div class="two-col" {
                    label {
                        "Contract type"
                        select name="type" {
                            option value="Any" { "Any" }
                            @for t in JobType::ALL {
                                option value=(t) selected[state.job_type.as_option() == Some(&t)] { (t) }
                            }
                        }
                    }
                    label {
                        "Preferred shift"
                        select name="shift" {
                            option value="Any" { "Any" }
                            @for s in ShiftType::ALL {
                                option value=(s) selected[state.shift.as_option() == Some(&s)] { (s) }
                            }
                        }
                    }
                }

                label {
                    "Working language"
                    select name="language" {
                        option value="Any" { "Any" }
                        @for language in &ctx.options.languages {
                            option value=(language) selected[state.language.as_option() == Some(language)] { (language) }
                        }
                    }
                }

                fieldset class="salary" {
                    legend {
                        "Salary range (monthly NOK) "
                        span class="muted" { (format_nok(state.salary_min)) " – " (format_nok(state.salary_max)) }
                    }
                    input type="number" name="salary_min" aria-label="Minimum salary"
                        min=(floor) max=(ceiling) step=(SALARY_STEP) value=(state.salary_min);
                    input type="number" name="salary_max" aria-label="Maximum salary"
                        min=(floor) max=(ceiling) step=(SALARY_STEP) value=(state.salary_max);
                }

                @for tag in &state.tags {
                    input type="hidden" name="tag" value=(tag);
                }

                button type="submit" class="btn btn-primary" { "Apply filters" }
            }

            div {
                p class="label" { "Skill tags" }
                div class="chips" {
                    @for tag in &ctx.options.tags {
                        @let active = state.tags.contains(tag);
                        a.chip.chip-toggle.active[active]
                            href=(with_query("/", &toggled_query(ctl, tag)))
                            aria-pressed=(active)
                        { (tag) }
                    }
                }
            }

            a class="btn btn-ghost" href="/?reset=1" { "Reset filters" }
        }
    }
}
