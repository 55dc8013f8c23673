use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        other => other.to_string(),
    };
    render_error(status, &message)
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" {
                section class="glass-panel error-panel" {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to all openings" } }
                }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
