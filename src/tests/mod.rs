mod router_tests;
mod serve_tests;
mod utils;
