// src/domain/controller.rs

use crate::domain::dataset::FilterOptions;
use crate::domain::filter::{filter_jobs, Choice, FilterState};
use crate::domain::job::{Job, JobType, ShiftType};
use crate::domain::summary::{summarize, Summary};

/// A single-field change to the filter state.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Search(String),
    City(Choice<String>),
    Type(Choice<JobType>),
    Shift(Choice<ShiftType>),
    Language(Choice<String>),
    Tags(Vec<String>),
    SalaryMin(u32),
    SalaryMax(u32),
}

/// Owns the filter state for one view and guards its invariants.
///
/// `salary_min <= salary_max` holds after every mutation: each bound is
/// clamped against the other when it is set.
#[derive(Debug, Clone)]
pub struct FilterController {
    state: FilterState,
    salary_bounds: (u32, u32),
}

impl FilterController {
    pub fn new(salary_bounds: (u32, u32)) -> Self {
        Self {
            state: FilterState::initial(salary_bounds),
            salary_bounds,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn salary_bounds(&self) -> (u32, u32) {
        self.salary_bounds
    }

    /// True when nothing deviates from the initial snapshot.
    pub fn is_pristine(&self) -> bool {
        self.state == FilterState::initial(self.salary_bounds)
    }

    pub fn set_field(&mut self, update: FilterUpdate) {
        let state = &mut self.state;
        match update {
            FilterUpdate::Search(search) => state.search = search,
            FilterUpdate::City(city) => state.city = city,
            FilterUpdate::Type(job_type) => state.job_type = job_type,
            FilterUpdate::Shift(shift) => state.shift = shift,
            FilterUpdate::Language(language) => state.language = language,
            FilterUpdate::Tags(tags) => state.tags = dedup_in_order(tags),
            FilterUpdate::SalaryMin(min) => state.salary_min = min.min(state.salary_max),
            FilterUpdate::SalaryMax(max) => state.salary_max = max.max(state.salary_min),
        }
    }

    /// Adds `tag` when absent (appended), removes it when present.
    pub fn toggle_tag(&mut self, tag: &str) {
        let tags = &mut self.state.tags;
        match tags.iter().position(|t| t == tag) {
            Some(i) => {
                tags.remove(i);
            }
            None => tags.push(tag.to_string()),
        }
    }

    pub fn reset(&mut self) {
        self.state = FilterState::initial(self.salary_bounds);
    }

    /// Runs the predicate engine and aggregator over `jobs`.
    pub fn apply<'a>(&self, jobs: &'a [Job]) -> FilterOutcome<'a> {
        let jobs = filter_jobs(jobs, &self.state);
        let summary = summarize(&jobs);
        FilterOutcome { jobs, summary }
    }
}

/// Everything a view needs after one recomputation.
#[derive(Debug)]
pub struct FilterOutcome<'a> {
    pub jobs: Vec<&'a Job>,
    pub summary: Summary,
}

/// Read-only picker data handed to views alongside the state.
#[derive(Debug, Clone)]
pub struct FilterContext {
    pub options: FilterOptions,
    pub salary_bounds: (u32, u32),
}

fn dedup_in_order(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
