use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

const FORM_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
const FORM_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/app.js"));

/// GET /pay - Donation form
pub async fn payment_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(FORM_HTML)
}

/// GET /pay/app.js - Form script (validation, submission, redirect)
pub async fn payment_script() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(FORM_JS)
}

/// Configure form routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/pay", web::get().to(payment_form))
        .route("/pay/app.js", web::get().to(payment_script));
}
