use super::super::models::{InitiatePaymentRequest, InitiatePaymentResponse};
use super::super::services::PaymentInitiator;
use crate::core::Result;
use crate::middleware::RequestIdValue;
use actix_web::{post, web, HttpResponse};
use tracing::Instrument;

/// Start a payment and hand back the hosted payment page URL
///
/// POST /api/pesapal/initiate
///
/// # Request Body
/// * `phoneNumber` - Payer phone number in gateway format (required)
/// * `amount` - Amount in KES (required)
/// * `recipientNumber` - Optional, ignored
///
/// # Returns
/// * `200 OK` - `{success, reference, paymentUrl, message}`
/// * `400 Bad Request` - Missing fields or malformed JSON
/// * `500 Internal Server Error` - Gateway call failed or returned no URL
#[post("/initiate")]
pub async fn initiate_payment(
    body: web::Json<InitiatePaymentRequest>,
    initiator: web::Data<PaymentInitiator>,
    request_id: Option<web::ReqData<RequestIdValue>>,
) -> Result<HttpResponse> {
    let span = tracing::info_span!(
        "initiate_payment",
        request_id = request_id.as_ref().map(|id| id.0.as_str()).unwrap_or("-")
    );
    let payment = initiator
        .initiate(body.into_inner())
        .instrument(span)
        .await?;

    Ok(HttpResponse::Ok().json(InitiatePaymentResponse::from(payment)))
}
