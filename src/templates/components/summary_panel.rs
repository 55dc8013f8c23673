use crate::domain::Summary;
use crate::templates::format::format_nok;
use maud::{html, Markup};

/// "Quick market snapshot" box in the hero.
pub fn summary_panel(summary: &Summary) -> Markup {
    html! {
        div class="glass-panel snapshot" {
            h2 { "Quick market snapshot" }
            ul {
                li class="row" {
                    span { "Total curated roles" }
                    span class="accent" id="summary-total" { (format!("{:02}", summary.total)) }
                }
                li class="row" {
                    span { "Average top salary" }
                    span class="accent" id="summary-average" { "NOK " (format_nok(summary.average_salary)) }
                }
                li {
                    span { "Most active hubs" }
                    div class="muted small" {
                        @if summary.top_cities.is_empty() {
                            p { "No hubs with current filters." }
                        } @else {
                            @for (city, count) in &summary.top_cities {
                                p { (city) " • " (count) " openings" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_total_and_lists_hubs() {
        let summary = Summary {
            total: 4,
            top_cities: vec![("Oslo, Oslo".into(), 3), ("Bergen, Vestland".into(), 1)],
            average_salary: 38750,
        };
        let html = summary_panel(&summary).into_string();
        assert!(html.contains(">04<"));
        assert!(html.contains("NOK 38\u{a0}750"));
        assert!(html.contains("Oslo, Oslo • 3 openings"));
    }

    #[test]
    fn empty_summary_has_no_hubs() {
        let summary = Summary {
            total: 0,
            top_cities: vec![],
            average_salary: 0,
        };
        let html = summary_panel(&summary).into_string();
        assert!(html.contains(">00<"));
        assert!(html.contains("No hubs with current filters."));
    }
}
