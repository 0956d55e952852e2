// Pesapal Sandbox Helpers
//
// Local stand-in for the Pesapal API. Runs a real HTTP server (actix-test)
// that answers the two endpoints the relay calls and records what it was sent.

use actix_test::TestServer;
use actix_web::{web, App, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const SANDBOX_TOKEN: &str = "sandbox-bearer-token";
pub const SANDBOX_TRACKING_ID: &str = "b945e4af-80a5-4ec1-8706-e03f8332fb04";

/// How the sandbox answers
#[derive(Debug, Clone)]
pub enum GatewayScenario {
    /// Order response carries `redirect_url`
    RedirectUrl(String),
    /// Order response carries only `payment_url`
    PaymentUrlOnly(String),
    /// Order response carries neither URL
    NoPaymentUrl,
    /// Token endpoint answers HTTP 401
    TokenRejected,
    /// Token endpoint answers 200 with an embedded error object
    TokenErrorBody,
    /// Order endpoint answers HTTP 500
    OrderRejected,
}

/// An order submission as received by the sandbox
#[derive(Debug, Clone)]
pub struct RecordedOrder {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct RecordedCalls {
    token_requests: Arc<Mutex<Vec<Value>>>,
    orders: Arc<Mutex<Vec<RecordedOrder>>>,
}

#[derive(Clone)]
struct SandboxState {
    scenario: GatewayScenario,
    calls: RecordedCalls,
}

/// Running Pesapal sandbox; stops when dropped
pub struct PesapalSandbox {
    server: TestServer,
    calls: RecordedCalls,
}

impl PesapalSandbox {
    /// Start a sandbox on a random local port
    pub fn start(scenario: GatewayScenario) -> Self {
        let calls = RecordedCalls::default();
        let state = SandboxState {
            scenario,
            calls: calls.clone(),
        };

        let server = actix_test::start(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .route("/Auth/RequestToken", web::post().to(request_token))
                .route(
                    "/Transactions/SubmitOrderDetails",
                    web::post().to(submit_order),
                )
        });

        Self { server, calls }
    }

    /// Base URL to use as `PESAPAL_API_URL`
    pub fn api_url(&self) -> String {
        self.server.url("/").trim_end_matches('/').to_string()
    }

    pub fn token_requests(&self) -> Vec<Value> {
        self.calls.token_requests.lock().unwrap().clone()
    }

    pub fn orders(&self) -> Vec<RecordedOrder> {
        self.calls.orders.lock().unwrap().clone()
    }
}

async fn request_token(state: web::Data<SandboxState>, body: web::Json<Value>) -> HttpResponse {
    state
        .calls
        .token_requests
        .lock()
        .unwrap()
        .push(body.into_inner());

    match state.scenario {
        GatewayScenario::TokenRejected => HttpResponse::Unauthorized().json(json!({
            "error": {
                "error_type": "api_error",
                "code": "invalid_consumer_key_or_secret_provided",
                "message": "Invalid consumer key or secret provided"
            },
            "status": "401"
        })),
        GatewayScenario::TokenErrorBody => HttpResponse::Ok().json(json!({
            "token": null,
            "error": {
                "error_type": "api_error",
                "code": "invalid_consumer_key_or_secret_provided",
                "message": "Invalid consumer key or secret provided"
            },
            "status": "500"
        })),
        _ => HttpResponse::Ok().json(json!({
            "token": SANDBOX_TOKEN,
            "expiryDate": "2026-10-19T12:05:00.000Z",
            "error": null,
            "status": "200",
            "message": "Request processed successfully"
        })),
    }
}

async fn submit_order(
    req: HttpRequest,
    state: web::Data<SandboxState>,
    body: web::Json<Value>,
) -> HttpResponse {
    let authorization = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let body = body.into_inner();
    let reference = body["order_details"]["order_reference"].clone();

    state.calls.orders.lock().unwrap().push(RecordedOrder {
        authorization,
        body,
    });

    match &state.scenario {
        GatewayScenario::RedirectUrl(url) => HttpResponse::Ok().json(json!({
            "order_tracking_id": SANDBOX_TRACKING_ID,
            "merchant_reference": reference,
            "redirect_url": url,
            "error": null,
            "status": "200"
        })),
        GatewayScenario::PaymentUrlOnly(url) => HttpResponse::Ok().json(json!({
            "order_tracking_id": SANDBOX_TRACKING_ID,
            "merchant_reference": reference,
            "payment_url": url,
            "status": "200"
        })),
        GatewayScenario::NoPaymentUrl => HttpResponse::Ok().json(json!({
            "order_tracking_id": SANDBOX_TRACKING_ID,
            "merchant_reference": reference,
            "status": "200"
        })),
        GatewayScenario::OrderRejected => HttpResponse::InternalServerError().json(json!({
            "error": {"code": "internal_error", "message": "Something went wrong"},
            "status": "500"
        })),
        GatewayScenario::TokenRejected | GatewayScenario::TokenErrorBody => {
            HttpResponse::Unauthorized().finish()
        }
    }
}
