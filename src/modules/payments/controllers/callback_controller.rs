use super::super::services::{CallbackReceiver, SIGNATURE_HEADER};
use crate::core::NotificationError;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use serde::Serialize;

/// Largest notification body the receiver will look at
pub const MAX_NOTIFICATION_BYTES: usize = 256 * 1024;

/// Acknowledgement returned for every notification
#[derive(Debug, Serialize)]
pub struct CallbackAck {
    pub success: bool,
}

fn acknowledge() -> HttpResponse {
    HttpResponse::Ok().json(CallbackAck { success: true })
}

fn signature(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok())
}

/// Collect the body up to `limit` bytes.
///
/// An oversized body is still read to the end and discarded, so the
/// acknowledgement goes out on a connection in a clean state.
async fn read_body(
    mut payload: web::Payload,
    limit: usize,
) -> Result<web::BytesMut, NotificationError> {
    let mut body = web::BytesMut::new();
    let mut received = 0usize;
    let mut failure = None;

    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => return Err(NotificationError::MalformedPayload(e.to_string())),
        };
        received += chunk.len();

        if received > limit {
            failure = Some(NotificationError::PayloadTooLarge(limit));
            body.clear();
        } else if failure.is_none() {
            body.extend_from_slice(&chunk);
        }
    }

    match failure {
        Some(error) => Err(error),
        None => Ok(body),
    }
}

/// Receive a payment status notification from Pesapal
///
/// POST /api/pesapal/callback
///
/// The body is read from the raw payload so that malformed or oversized
/// bodies are handled by the receiver instead of an extractor. Always
/// `200 {"success": true}`.
#[post("/callback")]
pub async fn receive_callback(
    req: HttpRequest,
    payload: web::Payload,
    receiver: web::Data<CallbackReceiver>,
) -> HttpResponse {
    match read_body(payload, MAX_NOTIFICATION_BYTES).await {
        Ok(body) => receiver.receive_body(signature(&req), &body),
        Err(error) => receiver.reject(error),
    };
    acknowledge()
}

/// Query-string variant of the notification
///
/// GET /api/pesapal/callback?OrderTrackingId=..&OrderMerchantReference=..
#[get("/callback")]
pub async fn receive_callback_query(
    req: HttpRequest,
    receiver: web::Data<CallbackReceiver>,
) -> HttpResponse {
    receiver.receive_query(signature(&req), req.query_string());
    acknowledge()
}
