use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Completed,
    Failed,
    Pending,
    /// Any status the relay has no handling for
    Other(String),
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "COMPLETED" => OrderStatus::Completed,
            "FAILED" => OrderStatus::Failed,
            "PENDING" => OrderStatus::Pending,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Completed => write!(f, "COMPLETED"),
            OrderStatus::Failed => write!(f, "FAILED"),
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Other(other) => write!(f, "{}", other),
        }
    }
}

/// Asynchronous status notification (IPN) delivered by the gateway
///
/// All fields are optional: the sender is untrusted and the receiver has to
/// cope with whatever arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusNotification {
    #[serde(rename = "OrderTrackingId")]
    pub order_tracking_id: Option<String>,
    #[serde(rename = "OrderStatus")]
    pub order_status: Option<OrderStatus>,
    #[serde(rename = "OrderAmount")]
    pub order_amount: Option<Decimal>,
    #[serde(rename = "OrderReference")]
    pub order_reference: Option<String>,
}

/// Query-string form of a notification (`GET /api/pesapal/callback`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    #[serde(rename = "OrderTrackingId")]
    pub order_tracking_id: Option<String>,
    #[serde(rename = "OrderStatus")]
    pub order_status: Option<String>,
    #[serde(rename = "OrderReference")]
    pub order_reference: Option<String>,
    #[serde(rename = "OrderMerchantReference")]
    pub order_merchant_reference: Option<String>,
    #[serde(rename = "OrderNotificationType")]
    pub order_notification_type: Option<String>,
}

impl From<CallbackQuery> for StatusNotification {
    fn from(query: CallbackQuery) -> Self {
        Self {
            order_tracking_id: query.order_tracking_id,
            order_status: query.order_status.map(OrderStatus::from),
            order_amount: None,
            order_reference: query.order_reference.or(query.order_merchant_reference),
        }
    }
}
