use crate::core::{AppError, Currency, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prefix of every locally generated payment reference
pub const REFERENCE_PREFIX: &str = "KSH30";

/// Description shown on the hosted payment page
pub const ORDER_DESCRIPTION: &str = "Support donation";

/// Domain used to derive the placeholder subscriber email the gateway requires
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "pesapal.local";

/// Body of `POST /api/pesapal/initiate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentRequest {
    pub phone_number: Option<String>,
    pub amount: Option<Decimal>,
    /// Accepted for compatibility with the form; not forwarded to the gateway
    pub recipient_number: Option<String>,
}

/// A validated payment attempt, alive only for the duration of one request
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrder {
    pub reference: String,
    pub phone_number: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub description: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl PaymentOrder {
    /// Validate a request and derive the order fields from it.
    ///
    /// Phone number and amount are both required. A blank phone number counts
    /// as missing, and so does an amount that is not positive once rounded to
    /// the currency scale.
    pub fn from_request(request: InitiatePaymentRequest, now: DateTime<Utc>) -> Result<Self> {
        let phone_number = request
            .phone_number
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());
        let currency = Currency::KES;
        let amount = request
            .amount
            .map(|amount| currency.round(amount))
            .filter(|amount| *amount > Decimal::ZERO);

        let (phone_number, amount) = match (phone_number, amount) {
            (Some(phone_number), Some(amount)) => (phone_number, amount),
            _ => return Err(AppError::validation("Missing required fields")),
        };

        Ok(Self {
            reference: Self::reference_at(now.timestamp_millis()),
            email: format!("{}@{}", phone_number, PLACEHOLDER_EMAIL_DOMAIN),
            phone_number,
            amount,
            currency,
            description: ORDER_DESCRIPTION.to_string(),
            created_at: now,
        })
    }

    /// Reference for an order created at the given unix time in milliseconds
    pub fn reference_at(timestamp_millis: i64) -> String {
        format!("{}-{}", REFERENCE_PREFIX, timestamp_millis)
    }

    /// Whether a string has the shape of a reference produced by this relay
    pub fn is_reference(candidate: &str) -> bool {
        candidate
            .strip_prefix(REFERENCE_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .map(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false)
    }
}

/// Result of a successful initiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatedPayment {
    pub reference: String,
    pub payment_url: String,
    pub order_tracking_id: Option<String>,
}

/// Success body of `POST /api/pesapal/initiate`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentResponse {
    pub success: bool,
    pub reference: String,
    pub payment_url: String,
    pub message: String,
}

impl From<InitiatedPayment> for InitiatePaymentResponse {
    fn from(payment: InitiatedPayment) -> Self {
        Self {
            success: true,
            reference: payment.reference,
            payment_url: payment.payment_url,
            message: "Redirecting to payment...".to_string(),
        }
    }
}
