use crate::{Htmx, ResponseOptions};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use log::warn;
use std::future::{ready, Ready};
use std::rc::Rc;

/// A middleware for Actix Web that decodes htmx request headers and writes
/// htmx response headers.
///
/// Before the handler runs, the request headers are decoded into
/// [`RequestOptions`](crate::RequestOptions) and an [`Htmx`] handle is stored
/// in the request extensions for handlers to extract. After the handler
/// returns, the [`ResponseOptions`] collected on that handle are written to
/// the response. Responses to requests that htmx did not send are never
/// touched.
///
/// A request carrying `HX-Request: true` without a usable `HX-Current-URL`
/// is rejected with `400 Bad Request` before it reaches the handler.
///
/// # Example
///
/// ```no_run
/// use actix_web::{web, App, HttpServer, Responder, HttpResponse};
/// use actix_htmx_options::{Htmx, HtmxMiddleware, ResponseOptions};
///
/// #[actix_web::main]
/// async fn main() -> std::io::Result<()> {
///     HttpServer::new(|| {
///         App::new()
///             .wrap(HtmxMiddleware::new())
///             .route("/", web::get().to(index))
///             .service(
///                 web::resource("/saved")
///                     .wrap(HtmxMiddleware::with_response(
///                         ResponseOptions::new().trigger("saved"),
///                     ))
///                     .route(web::post().to(save)),
///             )
///     })
///     .bind("127.0.0.1:8080")?
///     .run()
///     .await
/// }
///
/// async fn index(htmx: Htmx) -> impl Responder {
///     match htmx.request() {
///         Some(request) => HttpResponse::Ok().body(format!(
///             "<div>Fragment for {}</div>",
///             request.current_url
///         )),
///         None => HttpResponse::Ok().body("<html><body>Full page</body></html>"),
///     }
/// }
///
/// async fn save(htmx: Htmx) -> impl Responder {
///     htmx.push_url("/saved");
///     HttpResponse::Ok().finish()
/// }
/// ```
///
/// # Fixed response options
///
/// [`HtmxMiddleware::with_response`] wraps a route, resource or scope with
/// options decided at registration time. They are written before the
/// handler's own options, so a field set by the handler wins. With several
/// `with_response` layers, the one closest to the handler wins: a scope's
/// options override the app's for the same header. When an outer
/// `HtmxMiddleware` already decoded the request, an inner one reuses its
/// [`Htmx`] handle and leaves writing the handler's options to the outer one.
#[derive(Clone, Default)]
pub struct HtmxMiddleware {
    response: Option<Rc<ResponseOptions>>,
}

impl HtmxMiddleware {
    pub fn new() -> HtmxMiddleware {
        HtmxMiddleware::default()
    }

    /// Writes `options` on every htmx response from the wrapped service.
    pub fn with_response(options: ResponseOptions) -> HtmxMiddleware {
        HtmxMiddleware {
            response: Some(Rc::new(options)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for HtmxMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = InnerHtmxMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(InnerHtmxMiddleware {
            service,
            response: self.response.clone(),
        }))
    }
}

#[doc(hidden)]
#[non_exhaustive]
pub struct InnerHtmxMiddleware<S> {
    service: S,
    response: Option<Rc<ResponseOptions>>,
}

impl<S, B> Service<ServiceRequest> for InnerHtmxMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let existing = req.extensions().get::<Htmx>().cloned();

        let (htmx, owned) = match existing {
            Some(htmx) => (htmx, false),
            None => match Htmx::from_request_head(req.request()) {
                Ok(htmx) => {
                    req.extensions_mut().insert(htmx.clone());
                    (htmx, true)
                }
                Err(err) => {
                    warn!("Rejected htmx request to {}: {}", req.path(), err);
                    return Box::pin(ready(Err(err.into())));
                }
            },
        };

        let fixed = self.response.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            if htmx.is_htmx() {
                if let Some(fixed) = fixed {
                    htmx.apply_fixed(&fixed, res.headers_mut());
                }
                if owned {
                    htmx.response().encode(res.headers_mut());
                }
            }

            Ok(res)
        })
    }
}
