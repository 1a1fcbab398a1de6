use actix_web::http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

/// Reasons an htmx request cannot be decoded.
///
/// Both variants mean the client broke the htmx protocol, so they render as
/// `400 Bad Request` when returned from a handler or the middleware.
#[derive(Debug, Error)]
pub enum HtmxError {
    #[error("hx-request is true but hx-current-url is missing")]
    MalformedRequest,

    #[error("hx-current-url is not an absolute URL: {value:?}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl ResponseError for HtmxError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}
