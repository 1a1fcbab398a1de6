//! # actix-htmx-options
//!
//! `actix-htmx-options` decodes the headers htmx sends with each request into a
//! typed [`RequestOptions`], and writes typed [`ResponseOptions`] back as htmx
//! response headers once a handler has finished.
//!
//! ## Features
//!
//! - **Request decoding**: `HX-Request`, `HX-Current-URL`, `HX-Boosted`,
//!   `HX-History-Restore-Request`, `HX-Prompt`, `HX-Target`, `HX-Trigger` and
//!   `HX-Trigger-Name` become fields of [`RequestOptions`]
//! - **Response encoding**: every htmx response header is a field of [`ResponseOptions`]
//! - **Per-request or per-route**: set options from the handler through [`Htmx`],
//!   or fix them when registering a route with [`HtmxMiddleware::with_response`]
//! - **Framework-free core**: [`RequestOptions::decode`] and [`ResponseOptions::encode`]
//!   work on any [`HeaderSource`] / [`HeaderSink`]
//!
//! # Getting Started
//! Register [`HtmxMiddleware`] on your `App` and use the [`Htmx`] extractor in your handlers:
//!
//! ```no_run
//! use actix_htmx_options::{Htmx, HtmxMiddleware};
//! use actix_web::{web, App, HttpResponse, HttpServer, Responder};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         App::new()
//!             .wrap(HtmxMiddleware::new())
//!             .route("/", web::get().to(index))
//!     })
//!     .bind("127.0.0.1:8080")?
//!     .run()
//!     .await
//! }
//!
//! async fn index(htmx: Htmx) -> impl Responder {
//!     if htmx.is_htmx() {
//!         htmx.push_url("/");
//!         HttpResponse::Ok().body("<div>Partial content for htmx</div>")
//!     } else {
//!         HttpResponse::Ok().body("<html><body><div>Full page content</div></body></html>")
//!     }
//! }
//! ```

mod error;
pub mod headers;
mod htmx;
mod middleware;
mod request;
mod response;

pub use self::{
    error::HtmxError,
    htmx::Htmx,
    middleware::HtmxMiddleware,
    request::{HeaderSource, RequestOptions},
    response::{HeaderSink, ResponseOptions, SwapType},
};
