// src/domain/filter.rs

use crate::domain::job::{Job, JobType, ShiftType};
use serde::{Serialize, Serializer};

/// A picker selection: either "Any" or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Any,
    Only(T),
}

impl<T> Choice<T> {
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Choice::Any => None,
            Choice::Only(v) => Some(v),
        }
    }

    /// `Any` passes everything; otherwise defer to `f`.
    fn admits(&self, f: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(v) => f(v),
        }
    }
}

impl<T: ToString> Choice<T> {
    /// Value as rendered in `<select>` elements and query strings.
    pub fn label(&self) -> String {
        match self {
            Choice::Any => "Any".to_string(),
            Choice::Only(v) => v.to_string(),
        }
    }
}

impl<T: ToString> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Current user-selected constraints.
///
/// Construct through [`FilterController`](crate::domain::controller::FilterController)
/// so the salary bounds stay ordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search: String,
    pub city: Choice<String>,
    #[serde(rename = "type")]
    pub job_type: Choice<JobType>,
    pub shift: Choice<ShiftType>,
    pub language: Choice<String>,
    pub tags: Vec<String>,
    pub salary_min: u32,
    pub salary_max: u32,
}

impl FilterState {
    /// Everything open, salary spanning `bounds`.
    pub fn initial(bounds: (u32, u32)) -> Self {
        Self {
            search: String::new(),
            city: Choice::Any,
            job_type: Choice::Any,
            shift: Choice::Any,
            language: Choice::Any,
            tags: Vec::new(),
            salary_min: bounds.0,
            salary_max: bounds.1,
        }
    }

    /// True when `job` passes every active predicate.
    pub fn matches(&self, job: &Job) -> bool {
        self.matches_search(job)
            && self.city.admits(|city| job.location_label() == *city)
            && self.job_type.admits(|t| job.job_type == *t)
            && self.shift.admits(|s| job.shift == *s)
            && self
                .language
                .admits(|lang| job.language.to_lowercase().contains(&lang.to_lowercase()))
            && self.tags.iter().all(|tag| job.has_tag(tag))
            && job
                .salary_monthly_nok
                .overlaps(self.salary_min, self.salary_max)
    }

    fn matches_search(&self, job: &Job) -> bool {
        let term = self.search.trim();
        term.is_empty() || job.search_haystack().contains(&term.to_lowercase())
    }
}

/// Jobs passing `state`, in dataset order.
pub fn filter_jobs<'a>(jobs: &'a [Job], state: &FilterState) -> Vec<&'a Job> {
    jobs.iter().filter(|job| state.matches(job)).collect()
}
