pub mod html;
pub mod json;
pub mod xlsx;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{html_response, text_response};
pub use json::json_response;
pub use xlsx::xlsx_response;
