use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Header asking browsers to send `Sec-CH-Prefers-Reduced-Motion` next time.
const ACCEPT_CH: &str = "Sec-CH-Prefers-Reduced-Motion";

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header("Accept-CH", ACCEPT_CH)
        .header("Vary", ACCEPT_CH)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// Plain body with an explicit content type (stylesheet, health probe).
pub fn text_response(content_type: &str, body: impl Into<String>) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(body.into()))
        .map_err(|_| ServerError::InternalError)
}
