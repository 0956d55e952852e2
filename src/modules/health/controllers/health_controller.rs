use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
}

/// Static service descriptor served at `/`
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
}

/// Deployment environment reported by the health endpoint
#[derive(Debug, Clone)]
pub struct Environment(pub String);

/// GET /api/health - Liveness probe
///
/// Always `ok`; does not look at gateway credentials or reachability.
pub async fn health_check(environment: web::Data<Environment>) -> impl Responder {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        environment: environment.0.clone(),
    };

    HttpResponse::Ok().json(response)
}

/// GET / - Service descriptor
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        service: "Pesapal payment relay".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        endpoints: vec![
            "POST /api/pesapal/initiate".to_string(),
            "POST /api/pesapal/callback".to_string(),
            "GET /api/pesapal/callback".to_string(),
            "GET /api/health".to_string(),
            "GET /pay".to_string(),
            "GET /pay/app.js".to_string(),
        ],
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig, environment: &str) {
    cfg.app_data(web::Data::new(Environment(environment.to_string())))
        .route("/", web::get().to(index))
        .route("/api/health", web::get().to(health_check));
}
