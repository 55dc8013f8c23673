pub mod directory;
pub mod job_detail;

pub use directory::{directory_page, DirectoryVm};
pub use job_detail::job_detail_page;
