//! Filtering core: dataset, predicates, aggregation, and the state controller.
//!
//! ```text
//!   data/jobs.json
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ JobDataset │  validated, read-only; option sets + salary bounds
//!   └────────────┘
//!        │
//!        ▼
//!   ┌──────────────────┐   set_field / toggle_tag / reset
//!   │ FilterController │ ◄──────────────────────────────── query string
//!   └──────────────────┘
//!        │ filter_jobs
//!        ▼
//!   ┌──────────┐
//!   │ summarize │  total, top cities, average salary
//!   └──────────┘
//! ```

pub mod controller;
pub mod dataset;
pub mod filter;
pub mod job;
pub mod summary;

pub use controller::{FilterContext, FilterController, FilterOutcome, FilterUpdate};
pub use dataset::{FilterOptions, JobDataset};
pub use filter::{Choice, FilterState};
pub use job::{Job, JobType, ShiftType};
pub use summary::Summary;
