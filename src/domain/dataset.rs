// src/domain/dataset.rs

use crate::domain::job::Job;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Dataset compiled into the binary.
const BUNDLED_JOBS: &str = include_str!("../../data/jobs.json");

/// Integrity problems found while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset contains no jobs")]
    Empty,
    #[error("duplicate job id '{0}'")]
    DuplicateId(String),
    #[error("job '{id}' has salary min {min} above max {max}")]
    InvertedSalary { id: String, min: u32, max: u32 },
}

/// Distinct values offered by the filter pickers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
}

/// The fixed, ordered job collection. Read-only after construction.
#[derive(Debug, Clone)]
pub struct JobDataset {
    jobs: Vec<Job>,
}

impl JobDataset {
    /// Validates and wraps a job list.
    pub fn new(jobs: Vec<Job>) -> Result<Self, DatasetError> {
        if jobs.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.id.as_str()) {
                return Err(DatasetError::DuplicateId(job.id.clone()));
            }
            let salary = job.salary_monthly_nok;
            if salary.min > salary.max {
                return Err(DatasetError::InvertedSalary {
                    id: job.id.clone(),
                    min: salary.min,
                    max: salary.max,
                });
            }
        }

        Ok(Self { jobs })
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let jobs: Vec<Job> = serde_json::from_str(raw)?;
        Self::new(jobs)
    }

    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_JOBS)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn find(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Global (min of lower bounds, max of upper bounds).
    pub fn salary_bounds(&self) -> (u32, u32) {
        derive_salary_bounds(&self.jobs)
    }

    pub fn options(&self) -> FilterOptions {
        derive_options(&self.jobs)
    }
}

/// Salary slider bounds and reset target. `(0, 0)` for an empty slice;
/// `JobDataset` never holds one.
pub fn derive_salary_bounds(jobs: &[Job]) -> (u32, u32) {
    let min = jobs.iter().map(|j| j.salary_monthly_nok.min).min();
    let max = jobs.iter().map(|j| j.salary_monthly_nok.max).max();
    (min.unwrap_or(0), max.unwrap_or(0))
}

/// Sorted, distinct picker values computed from the whole dataset.
pub fn derive_options(jobs: &[Job]) -> FilterOptions {
    let cities: BTreeSet<String> = jobs.iter().map(Job::location_label).collect();
    let languages: BTreeSet<&str> = jobs.iter().map(|j| j.language.as_str()).collect();
    let tags: BTreeSet<&str> = jobs
        .iter()
        .flat_map(|j| j.tags.iter().map(String::as_str))
        .collect();

    FilterOptions {
        cities: cities.into_iter().collect(),
        languages: languages.into_iter().map(str::to_string).collect(),
        tags: tags.into_iter().map(str::to_string).collect(),
    }
}
