use actix_htmx_options::{Htmx, HtmxMiddleware, ResponseOptions};
use actix_web::{web, App, HttpResponse, HttpServer, Responder};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(HtmxMiddleware::new())
            .route("/", web::get().to(index))
            .route("/get", web::get().to(fragment))
            .route("/post", web::post().to(lucky))
            .service(
                web::resource("/refresh")
                    .wrap(HtmxMiddleware::with_response(ResponseOptions::new().refresh()))
                    .route(web::post().to(|| async { HttpResponse::Ok().finish() })),
            )
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}

async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/html").body(
        r##"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="UTF-8" />
        <meta name="htmx-config" content='{"historyRestoreAsHxRequest": false}' />
        <script src="https://unpkg.com/htmx.org@2"></script>
        <title>Actix + htmx</title>
    </head>
    <body>
        <h1>Hello Actix + htmx!</h1>
        <button hx-get="/get" hx-target="#fragment" hx-swap="innerHTML">Load Fragment</button>
        <div id="fragment"><div>Initial Fragment</div></div>
        <button hx-post="/post">Feeling Lucky?</button>
        <button hx-post="/refresh">Refresh</button>
    </body>
</html>"##,
    )
}

async fn fragment(htmx: Htmx) -> impl Responder {
    match htmx.request() {
        Some(request) => HttpResponse::Ok().content_type("text/html").body(format!(
            r#"<div style="color: red;">This is a fragment loaded via htmx! location: {}</div>"#,
            request.current_url
        )),
        None => HttpResponse::Ok().body("Not an htmx request!"),
    }
}

async fn lucky(htmx: Htmx) -> impl Responder {
    htmx.redirect("https://actix.rs");
    HttpResponse::Ok().body("Redirecting to the Actix website...")
}
