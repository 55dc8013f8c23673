pub mod card;
pub mod error;
pub mod filters_panel;
pub mod job_card;
pub mod summary_panel;

pub use card::{card, resource_link};
pub use error::html_error_response;
pub use filters_panel::filters_panel;
pub use job_card::{company_logo, job_card};
pub use summary_panel::summary_panel;
