use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use crate::headers::response::*;

/// Write access to outgoing headers.
///
/// Setting a header replaces any value already stored under that name.
pub trait HeaderSink {
    fn set_header(&mut self, name: &'static str, value: &str);
}

impl HeaderSink for HeaderMap {
    fn set_header(&mut self, name: &'static str, value: &str) {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.insert(HeaderName::from_static(name), value);
            }
            Err(_) => warn!("Failed to parse {} header value: {}", name, value),
        }
    }
}

impl HeaderSink for HashMap<String, String> {
    fn set_header(&mut self, name: &'static str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

/// Swap strategies accepted by `HX-Reswap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapType {
    InnerHtml,
    OuterHtml,
    BeforeBegin,
    AfterBegin,
    BeforeEnd,
    AfterEnd,
    Delete,
    None,
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapType::InnerHtml => write!(f, "innerHTML"),
            SwapType::OuterHtml => write!(f, "outerHTML"),
            SwapType::BeforeBegin => write!(f, "beforebegin"),
            SwapType::AfterBegin => write!(f, "afterbegin"),
            SwapType::BeforeEnd => write!(f, "beforeend"),
            SwapType::AfterEnd => write!(f, "afterend"),
            SwapType::Delete => write!(f, "delete"),
            SwapType::None => write!(f, "none"),
        }
    }
}

/// htmx response headers to send back, one field per header.
///
/// Every field starts out absent. A present field is written as-is, an empty
/// string included; `refresh` is only written when `true`.
///
/// The builder methods are meant for options fixed at route registration,
/// see [`HtmxMiddleware::with_response`](crate::HtmxMiddleware::with_response).
/// Field names deserialize in camelCase, so static options can also come from
/// configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseOptions {
    /// Client-side redirect without a full page reload (`HX-Location`).
    pub location: Option<String>,
    /// Pushes a new URL into the history stack (`HX-Push-Url`).
    pub push_url: Option<String>,
    /// Client-side redirect to a new location (`HX-Redirect`).
    pub redirect: Option<String>,
    /// Full refresh of the page (`HX-Refresh`).
    pub refresh: bool,
    /// Replaces the current URL in the location bar (`HX-Replace-Url`).
    pub replace_url: Option<String>,
    /// How the response is swapped (`HX-Reswap`).
    pub reswap: Option<String>,
    /// CSS selector of a different swap target (`HX-Retarget`).
    pub retarget: Option<String>,
    /// CSS selector choosing the swapped part of the response (`HX-Reselect`).
    pub reselect: Option<String>,
    /// Client-side events to trigger (`HX-Trigger`).
    pub trigger: Option<String>,
    /// Events triggered after the settle step (`HX-Trigger-After-Settle`).
    pub trigger_after_settle: Option<String>,
    /// Events triggered after the swap step (`HX-Trigger-After-Swap`).
    pub trigger_after_swap: Option<String>,
}

impl ResponseOptions {
    pub fn new() -> ResponseOptions {
        ResponseOptions::default()
    }

    pub fn location(mut self, path: impl Into<String>) -> Self {
        self.location = Some(path.into());
        self
    }

    pub fn push_url(mut self, url: impl Into<String>) -> Self {
        self.push_url = Some(url.into());
        self
    }

    pub fn redirect(mut self, url: impl Into<String>) -> Self {
        self.redirect = Some(url.into());
        self
    }

    pub fn refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    pub fn replace_url(mut self, url: impl Into<String>) -> Self {
        self.replace_url = Some(url.into());
        self
    }

    pub fn reswap(mut self, swap: impl Into<String>) -> Self {
        self.reswap = Some(swap.into());
        self
    }

    pub fn reswap_with(self, swap: SwapType) -> Self {
        self.reswap(swap.to_string())
    }

    pub fn retarget(mut self, selector: impl Into<String>) -> Self {
        self.retarget = Some(selector.into());
        self
    }

    pub fn reselect(mut self, selector: impl Into<String>) -> Self {
        self.reselect = Some(selector.into());
        self
    }

    pub fn trigger(mut self, events: impl Into<String>) -> Self {
        self.trigger = Some(events.into());
        self
    }

    pub fn trigger_after_settle(mut self, events: impl Into<String>) -> Self {
        self.trigger_after_settle = Some(events.into());
        self
    }

    pub fn trigger_after_swap(mut self, events: impl Into<String>) -> Self {
        self.trigger_after_swap = Some(events.into());
        self
    }

    /// The headers [`encode`](ResponseOptions::encode) writes, in a stable order.
    pub fn header_pairs(&self) -> IndexMap<&'static str, &str> {
        let fields = [
            (HX_LOCATION, self.location.as_deref()),
            (HX_PUSH_URL, self.push_url.as_deref()),
            (HX_REDIRECT, self.redirect.as_deref()),
            (HX_REFRESH, self.refresh.then_some("true")),
            (HX_REPLACE_URL, self.replace_url.as_deref()),
            (HX_RESWAP, self.reswap.as_deref()),
            (HX_RETARGET, self.retarget.as_deref()),
            (HX_RESELECT, self.reselect.as_deref()),
            (HX_TRIGGER, self.trigger.as_deref()),
            (HX_TRIGGER_AFTER_SETTLE, self.trigger_after_settle.as_deref()),
            (HX_TRIGGER_AFTER_SWAP, self.trigger_after_swap.as_deref()),
        ];

        fields
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
            .collect()
    }

    /// Writes the present fields into `headers`.
    ///
    /// Headers for absent fields are left alone, whatever they already hold.
    pub fn encode<S>(&self, headers: &mut S)
    where
        S: HeaderSink + ?Sized,
    {
        for (name, value) in self.header_pairs() {
            headers.set_header(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(options: &ResponseOptions) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        options.encode(&mut headers);
        headers
    }

    #[test]
    fn test_redirect_only() {
        let headers = encoded(&ResponseOptions::new().redirect("https://example.com"));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers["hx-redirect"], "https://example.com");
    }

    #[test]
    fn test_default_writes_nothing() {
        assert!(encoded(&ResponseOptions::default()).is_empty());
    }

    #[test]
    fn test_every_field_maps_to_its_header() {
        let options = ResponseOptions {
            location: Some("/location".to_string()),
            push_url: Some("/push".to_string()),
            redirect: Some("/redirect".to_string()),
            refresh: true,
            replace_url: Some("/replace".to_string()),
            reswap: Some("outerHTML".to_string()),
            retarget: Some("#target".to_string()),
            reselect: Some("#select".to_string()),
            trigger: Some("standard".to_string()),
            trigger_after_settle: Some("settled".to_string()),
            trigger_after_swap: Some("swapped".to_string()),
        };

        let headers = encoded(&options);
        let expected = [
            ("hx-location", "/location"),
            ("hx-push-url", "/push"),
            ("hx-redirect", "/redirect"),
            ("hx-refresh", "true"),
            ("hx-replace-url", "/replace"),
            ("hx-reswap", "outerHTML"),
            ("hx-retarget", "#target"),
            ("hx-reselect", "#select"),
            ("hx-trigger", "standard"),
            ("hx-trigger-after-settle", "settled"),
            ("hx-trigger-after-swap", "swapped"),
        ];

        assert_eq!(headers.len(), expected.len());
        for (name, value) in expected {
            assert_eq!(headers.get(name).map(String::as_str), Some(value), "{name}");
        }
    }

    #[test]
    fn test_refresh_false_writes_nothing() {
        let headers = encoded(&ResponseOptions {
            refresh: false,
            ..ResponseOptions::default()
        });
        assert!(!headers.contains_key("hx-refresh"));

        let headers = encoded(&ResponseOptions::new().refresh());
        assert_eq!(headers["hx-refresh"], "true");
    }

    #[test]
    fn test_empty_string_is_present() {
        let headers = encoded(&ResponseOptions::new().push_url(""));
        assert_eq!(headers.get("hx-push-url").map(String::as_str), Some(""));
    }

    #[test]
    fn test_absent_fields_leave_existing_headers() {
        let mut headers = HashMap::new();
        headers.insert("hx-retarget".to_string(), "#keep".to_string());
        headers.insert("hx-trigger".to_string(), "old".to_string());

        ResponseOptions::new().trigger("new").encode(&mut headers);

        assert_eq!(headers["hx-retarget"], "#keep");
        assert_eq!(headers["hx-trigger"], "new");
    }

    #[test]
    fn test_encode_twice_is_stable() {
        let options = ResponseOptions::new()
            .reswap_with(SwapType::Delete)
            .retarget("#list")
            .refresh();

        assert_eq!(encoded(&options), encoded(&options));
    }

    #[test]
    fn test_header_pairs_order() {
        let options = ResponseOptions::new()
            .trigger_after_swap("swapped")
            .redirect("/r")
            .location("/l");

        let names: Vec<_> = options.header_pairs().keys().copied().collect();
        assert_eq!(names, ["hx-location", "hx-redirect", "hx-trigger-after-swap"]);
    }

    #[test]
    fn test_header_map_sink() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("hx-reselect"),
            HeaderValue::from_static("#existing"),
        );

        ResponseOptions::new()
            .replace_url("/replaced")
            .redirect("bad\nvalue")
            .encode(&mut headers);

        assert_eq!(headers.get("hx-replace-url").unwrap(), "/replaced");
        assert_eq!(headers.get("hx-reselect").unwrap(), "#existing");
        // illegal values are skipped rather than panicking
        assert!(headers.get("hx-redirect").is_none());
    }

    #[test]
    fn test_swap_type_display() {
        assert_eq!(SwapType::InnerHtml.to_string(), "innerHTML");
        assert_eq!(SwapType::OuterHtml.to_string(), "outerHTML");
        assert_eq!(SwapType::BeforeBegin.to_string(), "beforebegin");
        assert_eq!(SwapType::AfterBegin.to_string(), "afterbegin");
        assert_eq!(SwapType::BeforeEnd.to_string(), "beforeend");
        assert_eq!(SwapType::AfterEnd.to_string(), "afterend");
        assert_eq!(SwapType::Delete.to_string(), "delete");
        assert_eq!(SwapType::None.to_string(), "none");
    }

    #[test]
    fn test_deserialize_from_config() {
        let options: ResponseOptions = serde_json::from_str(
            r##"{ "pushUrl": "/todos", "refresh": true, "triggerAfterSettle": "loaded" }"##,
        )
        .unwrap();

        assert_eq!(
            options,
            ResponseOptions::new()
                .push_url("/todos")
                .refresh()
                .trigger_after_settle("loaded")
        );
    }
}
