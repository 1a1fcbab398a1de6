use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::HtmxError;
use crate::request::RequestOptions;
use crate::response::{HeaderSink, ResponseOptions, SwapType};

/// Per-request htmx state, available to handlers as an extractor.
///
/// [`HtmxMiddleware`](crate::HtmxMiddleware) creates one for every request
/// and writes the collected [`ResponseOptions`] once the handler returns.
/// Clones share the same response options.
///
/// Without the middleware the extractor still decodes the request, but
/// nothing writes the response options.
#[derive(Clone)]
pub struct Htmx {
    request: Option<Rc<RequestOptions>>,
    response: Rc<RefCell<ResponseOptions>>,
    fixed_headers: Rc<RefCell<HashSet<&'static str>>>,
}

impl Htmx {
    pub(crate) fn new(request: Option<RequestOptions>) -> Htmx {
        Htmx {
            request: request.map(Rc::new),
            response: Rc::new(RefCell::new(ResponseOptions::default())),
            fixed_headers: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    /// Writes options fixed at route registration.
    ///
    /// Middleware closest to the handler runs first, so a name already written
    /// by a narrower layer is skipped here.
    pub(crate) fn apply_fixed(&self, options: &ResponseOptions, headers: &mut HeaderMap) {
        let mut written = self.fixed_headers.borrow_mut();
        for (name, value) in options.header_pairs() {
            if written.insert(name) {
                headers.set_header(name, value);
            }
        }
    }

    pub(crate) fn from_request_head(req: &HttpRequest) -> Result<Htmx, HtmxError> {
        RequestOptions::decode(req.headers()).map(Htmx::new)
    }

    /// The decoded htmx headers, or `None` if htmx did not send this request.
    pub fn request(&self) -> Option<&RequestOptions> {
        self.request.as_deref()
    }

    pub fn is_htmx(&self) -> bool {
        self.request.is_some()
    }

    /// Mutates the response options directly.
    ///
    /// ```no_run
    /// # use actix_htmx_options::Htmx;
    /// # fn handler(htmx: Htmx) {
    /// htmx.set(|options| {
    ///     options.redirect = Some("https://htmx.org".to_string());
    ///     options.refresh = false;
    /// });
    /// # }
    /// ```
    pub fn set<F>(&self, f: F)
    where
        F: FnOnce(&mut ResponseOptions),
    {
        f(&mut self.response.borrow_mut());
    }

    /// A snapshot of the response options set so far.
    pub fn response(&self) -> ResponseOptions {
        self.response.borrow().clone()
    }

    pub fn location(&self, path: impl Into<String>) {
        self.response.borrow_mut().location = Some(path.into());
    }

    pub fn push_url(&self, url: impl Into<String>) {
        self.response.borrow_mut().push_url = Some(url.into());
    }

    pub fn redirect(&self, url: impl Into<String>) {
        self.response.borrow_mut().redirect = Some(url.into());
    }

    pub fn refresh(&self) {
        self.response.borrow_mut().refresh = true;
    }

    pub fn replace_url(&self, url: impl Into<String>) {
        self.response.borrow_mut().replace_url = Some(url.into());
    }

    /// Any `hx-swap` value, modifiers included (`"innerHTML swap:1s"`).
    pub fn reswap(&self, swap: impl Into<String>) {
        self.response.borrow_mut().reswap = Some(swap.into());
    }

    pub fn reswap_with(&self, swap: SwapType) {
        self.reswap(swap.to_string());
    }

    pub fn retarget(&self, selector: impl Into<String>) {
        self.response.borrow_mut().retarget = Some(selector.into());
    }

    pub fn reselect(&self, selector: impl Into<String>) {
        self.response.borrow_mut().reselect = Some(selector.into());
    }

    pub fn trigger(&self, events: impl Into<String>) {
        self.response.borrow_mut().trigger = Some(events.into());
    }

    pub fn trigger_after_settle(&self, events: impl Into<String>) {
        self.response.borrow_mut().trigger_after_settle = Some(events.into());
    }

    pub fn trigger_after_swap(&self, events: impl Into<String>) {
        self.response.borrow_mut().trigger_after_swap = Some(events.into());
    }
}

impl FromRequest for Htmx {
    type Error = Error;
    type Future = Ready<Result<Htmx, Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(htmx) = req.extensions().get::<Htmx>() {
            return ready(Ok(htmx.clone()));
        }

        ready(Htmx::from_request_head(req).map_err(Error::from))
    }
}
