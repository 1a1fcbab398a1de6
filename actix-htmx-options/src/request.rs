use actix_web::http::header::HeaderMap;
use log::trace;
use std::collections::HashMap;
use url::Url;

use crate::error::HtmxError;
use crate::headers::request::*;

/// Read access to incoming headers by lower-case name.
///
/// A header that is missing, or whose value is not valid text, reads as `None`.
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}

/// What htmx told us about the request it sent.
///
/// Only exists for requests carrying `HX-Request: true`; see
/// [`RequestOptions::decode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    /// The request came from an element using `hx-boost`.
    pub boosted: bool,
    /// The current URL of the browser.
    pub current_url: Url,
    /// The request restores history after a miss in the local history cache.
    pub history_restore_request: bool,
    /// The user's answer to an `hx-prompt`.
    ///
    /// Read from an Actix `HeaderMap`, an answer containing bytes outside
    /// visible ASCII (Latin-1 text, for one) is not valid text and reads as `None`.
    pub prompt: Option<String>,
    /// The `id` of the target element.
    pub target: Option<String>,
    /// The `id` of the triggered element.
    pub trigger: Option<String>,
    /// The `name` of the triggered element.
    pub trigger_name: Option<String>,
}

impl RequestOptions {
    /// Decodes the htmx request headers.
    ///
    /// Returns `Ok(None)` unless `hx-request` is exactly `"true"`. Once it is,
    /// `hx-current-url` must be present, non-empty and absolute.
    pub fn decode<H>(headers: &H) -> Result<Option<RequestOptions>, HtmxError>
    where
        H: HeaderSource + ?Sized,
    {
        if headers.header(HX_REQUEST) != Some("true") {
            return Ok(None);
        }

        let current_url = headers
            .header(HX_CURRENT_URL)
            .filter(|value| !value.is_empty())
            .ok_or(HtmxError::MalformedRequest)?;
        let current_url = Url::parse(current_url).map_err(|source| HtmxError::InvalidUrl {
            value: current_url.to_string(),
            source,
        })?;

        let owned = |name: &str| headers.header(name).map(str::to_string);

        let options = RequestOptions {
            boosted: headers.header(HX_BOOSTED) == Some("true"),
            current_url,
            history_restore_request: headers.header(HX_HISTORY_RESTORE_REQUEST) == Some("true"),
            prompt: owned(HX_PROMPT),
            target: owned(HX_TARGET),
            trigger: owned(HX_TRIGGER),
            trigger_name: owned(HX_TRIGGER_NAME),
        };

        trace!("decoded htmx request from {}", options.current_url);

        Ok(Some(options))
    }
}
