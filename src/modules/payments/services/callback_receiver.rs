use rust_decimal::Decimal;
use tracing::{info, warn};

use super::super::models::{CallbackQuery, OrderStatus, PaymentOrder, StatusNotification};
use super::signature::SignatureVerifier;
use crate::core::{Currency, NotificationError};

/// What the receiver made of one notification
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationOutcome {
    Completed {
        reference: String,
        amount: Option<Decimal>,
    },
    Failed {
        reference: String,
    },
    Pending {
        reference: String,
    },
    /// Parsed, but carries a status with no handling (or none at all)
    Unrecognised {
        reference: String,
        status: Option<String>,
    },
    /// Not processed; still acknowledged to the sender
    Rejected {
        error: NotificationError,
    },
}

impl NotificationOutcome {
    /// One-line summary used for the log entry
    pub fn summary(&self) -> String {
        match self {
            NotificationOutcome::Completed { reference, amount } => format!(
                "Payment successful: {} - {} {}",
                reference,
                Currency::KES,
                amount.map(|a| a.to_string()).unwrap_or_else(|| "unknown".to_string())
            ),
            NotificationOutcome::Failed { reference } => format!("Payment failed: {}", reference),
            NotificationOutcome::Pending { reference } => format!("Payment pending: {}", reference),
            NotificationOutcome::Unrecognised { reference, status } => format!(
                "Payment notification with unrecognised status {}: {}",
                status.as_deref().unwrap_or("<none>"),
                reference
            ),
            NotificationOutcome::Rejected { error } => {
                format!("Payment notification not processed: {}", error)
            }
        }
    }
}

/// Receives asynchronous status notifications from the gateway.
///
/// Notifications are logged and dropped; no order state exists to update, so
/// the reference in the payload is the only link back to the initiated
/// payment. Every entry point returns an outcome rather than an error: the
/// sender always gets an acknowledgement.
#[derive(Debug, Clone, Default)]
pub struct CallbackReceiver {
    verifier: Option<SignatureVerifier>,
}

impl CallbackReceiver {
    pub fn new(ipn_secret: Option<String>) -> Self {
        Self {
            verifier: ipn_secret.map(SignatureVerifier::new),
        }
    }

    /// Handle a JSON notification body (`POST`)
    pub fn receive_body(&self, signature: Option<&str>, body: &[u8]) -> NotificationOutcome {
        let outcome = self.verify(signature, body).and_then(|_| {
            serde_json::from_slice::<StatusNotification>(body)
                .map_err(|e| NotificationError::MalformedPayload(e.to_string()))
        });

        self.settle(outcome)
    }

    /// Handle a query-string notification (`GET`); the signature covers the
    /// raw query string
    pub fn receive_query(&self, signature: Option<&str>, query: &str) -> NotificationOutcome {
        let outcome = self.verify(signature, query.as_bytes()).and_then(|_| {
            actix_web::web::Query::<CallbackQuery>::from_query(query)
                .map(|q| StatusNotification::from(q.into_inner()))
                .map_err(|e| NotificationError::MalformedPayload(e.to_string()))
        });

        self.settle(outcome)
    }

    /// Record a notification that could not be read at all
    pub fn reject(&self, error: NotificationError) -> NotificationOutcome {
        self.settle(Err(error))
    }

    fn verify(&self, signature: Option<&str>, payload: &[u8]) -> Result<(), NotificationError> {
        match &self.verifier {
            Some(verifier) => verifier.verify(signature, payload),
            None => Ok(()),
        }
    }

    fn settle(
        &self,
        notification: Result<StatusNotification, NotificationError>,
    ) -> NotificationOutcome {
        match notification {
            Ok(notification) => self.process(notification),
            Err(error) => {
                let outcome = NotificationOutcome::Rejected { error };
                warn!("{}", outcome.summary());
                outcome
            }
        }
    }

    /// Classify a parsed notification and log it
    pub fn process(&self, notification: StatusNotification) -> NotificationOutcome {
        info!(
            order_tracking_id = ?notification.order_tracking_id,
            order_status = ?notification.order_status,
            order_amount = ?notification.order_amount,
            order_reference = ?notification.order_reference,
            "Pesapal callback received"
        );

        if let Some(reference) = notification
            .order_reference
            .as_deref()
            .filter(|r| !PaymentOrder::is_reference(r))
        {
            warn!(order_reference = %reference, "Notification reference was not issued by this relay");
        }

        let reference = notification
            .order_reference
            .unwrap_or_else(|| "<unknown reference>".to_string());

        let outcome = match notification.order_status {
            Some(OrderStatus::Completed) => NotificationOutcome::Completed {
                reference,
                amount: notification.order_amount,
            },
            Some(OrderStatus::Failed) => NotificationOutcome::Failed { reference },
            Some(OrderStatus::Pending) => NotificationOutcome::Pending { reference },
            Some(OrderStatus::Other(status)) => NotificationOutcome::Unrecognised {
                reference,
                status: Some(status),
            },
            None => NotificationOutcome::Unrecognised {
                reference,
                status: None,
            },
        };

        match &outcome {
            NotificationOutcome::Failed { .. } | NotificationOutcome::Unrecognised { .. } => {
                warn!(order_tracking_id = ?notification.order_tracking_id, "{}", outcome.summary())
            }
            _ => info!(order_tracking_id = ?notification.order_tracking_id, "{}", outcome.summary()),
        }

        outcome
    }
}
