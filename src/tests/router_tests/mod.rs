mod api_tests;
mod directory_tests;
mod export_tests;
mod job_detail_tests;
