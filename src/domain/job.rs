// src/domain/job.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employment form of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::FullTime, JobType::PartTime, JobType::Contract];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| format!("unknown job type '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftType {
    Day,
    Evening,
    Night,
    Rotational,
}

impl ShiftType {
    pub const ALL: [ShiftType; 4] = [
        ShiftType::Day,
        ShiftType::Evening,
        ShiftType::Night,
        ShiftType::Rotational,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::Day => "Day",
            ShiftType::Evening => "Evening",
            ShiftType::Night => "Night",
            ShiftType::Rotational => "Rotational",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShiftType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| format!("unknown shift '{s}'"))
    }
}

/// Closed monthly salary interval in NOK. Serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SalaryRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// True when the two closed intervals share at least one point.
    pub fn overlaps(&self, min: u32, max: u32) -> bool {
        self.max >= min && self.min <= max
    }
}

impl From<[u32; 2]> for SalaryRange {
    fn from([min, max]: [u32; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<SalaryRange> for [u32; 2] {
    fn from(range: SalaryRange) -> Self {
        [range.min, range.max]
    }
}

/// One curated posting as bundled in `data/jobs.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub city: String,
    pub region: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub shift: ShiftType,
    pub language: String,
    pub salary_range: String,
    pub salary_monthly_nok: SalaryRange,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub posted_on: NaiveDate,
    pub apply_url: String,
    #[serde(default)]
    pub company_logo: Option<String>,
}

impl Job {
    /// "City, Region", the label used by the location picker.
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }

    /// Lowercased text the keyword search runs against.
    pub fn search_haystack(&self) -> String {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.organization.as_str(),
            self.tags.join(" ").as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
