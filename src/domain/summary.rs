// src/domain/summary.rs

use crate::domain::job::Job;
use serde::Serialize;
use std::collections::HashMap;

const TOP_CITIES: usize = 3;

/// Hero-panel snapshot of the filtered jobs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    /// Busiest location labels, most openings first. Equal counts keep
    /// the order in which the location was first encountered.
    pub top_cities: Vec<(String, usize)>,
    /// Mean of the salary upper bounds, rounded; 0 when nothing matched.
    pub average_salary: u32,
}

pub fn summarize(jobs: &[&Job]) -> Summary {
    // Grouped in first-seen order so the stable sort below keeps ties deterministic.
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for job in jobs {
        let label = job.location_label();
        match index.get(&label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push((label, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_CITIES);

    let sum: u64 = jobs
        .iter()
        .map(|j| u64::from(j.salary_monthly_nok.max))
        .sum();
    let divisor = jobs.len().max(1) as f64;
    let average_salary = (sum as f64 / divisor).round() as u32;

    Summary {
        total: jobs.len(),
        top_cities: counts,
        average_salary,
    }
}
