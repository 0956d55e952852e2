use super::super::models::PaymentOrder;
use super::gateway_trait::{GatewayToken, OrderSubmission, PaymentGateway};
use crate::config::PesapalConfig;
use crate::core::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pesapal payment gateway client
///
/// Two calls per payment: `Auth/RequestToken` for a bearer token, then
/// `Transactions/SubmitOrderDetails` for the hosted payment page URL.
pub struct PesapalClient {
    client: Client,
    consumer_key: String,
    consumer_secret: String,
    base_url: String,
    callback_url: String,
}

impl PesapalClient {
    pub fn new(config: &PesapalConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &PesapalConfig) -> Self {
        Self {
            client,
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            callback_url: config.callback_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build the `SubmitOrderDetails` body for an order
    pub fn order_body<'a>(&'a self, order: &'a PaymentOrder) -> SubmitOrderBody<'a> {
        SubmitOrderBody {
            order_details: OrderDetails {
                order_type: "MERCHANT",
                order_ts: order.created_at.timestamp(),
                order_amount: order.amount,
                order_currency: order.currency.to_string(),
                order_description: &order.description,
                order_reference: &order.reference,
                billing_address: BillingAddress {
                    phone_number: &order.phone_number,
                    country_code: order.currency.country_code(),
                },
                subscriber_email: &order.email,
            },
            redirect_mode: "REDIRECT",
            ipn_notifications_url: &self.callback_url,
        }
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    consumer_key: &'a str,
    consumer_secret: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    error: Option<PesapalError>,
}

#[derive(Deserialize)]
struct OrderResponse {
    #[serde(flatten)]
    submission: OrderSubmission,
    #[serde(default)]
    error: Option<PesapalError>,
}

/// Error object Pesapal embeds in otherwise successful HTTP responses
#[derive(Debug, Deserialize)]
struct PesapalError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl PesapalError {
    fn describe(&self) -> String {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => format!("{} ({})", message, code),
            (None, Some(message)) => message.clone(),
            (Some(code), None) => code.clone(),
            (None, None) => "unspecified error".to_string(),
        }
    }
}

/// Wire format of `Transactions/SubmitOrderDetails`
#[derive(Debug, Serialize)]
pub struct SubmitOrderBody<'a> {
    pub order_details: OrderDetails<'a>,
    pub redirect_mode: &'static str,
    pub ipn_notifications_url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct OrderDetails<'a> {
    pub order_type: &'static str,
    pub order_ts: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_amount: Decimal,
    pub order_currency: String,
    pub order_description: &'a str,
    pub order_reference: &'a str,
    pub billing_address: BillingAddress<'a>,
    pub subscriber_email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct BillingAddress<'a> {
    pub phone_number: &'a str,
    pub country_code: &'static str,
}

/// Turn a gateway response into `T`, or a descriptive gateway error
async fn read_json<T: DeserializeOwned>(response: Response, call: &str) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::gateway(format!("Failed to read Pesapal {} response: {}", call, e)))?;

    if !status.is_success() {
        return Err(AppError::gateway(format!(
            "Pesapal {} failed - HTTP {} ({})",
            call,
            status.as_u16(),
            body
        )));
    }

    serde_json::from_str(&body)
        .map_err(|e| AppError::gateway(format!("Failed to parse Pesapal {} response: {}", call, e)))
}

fn request_error(call: &str, e: reqwest::Error) -> AppError {
    if e.is_connect() || e.is_timeout() {
        AppError::gateway(format!(
            "Pesapal gateway unavailable during {}: {} ({})",
            call,
            if e.is_timeout() {
                "timeout"
            } else {
                "connection failed"
            },
            e
        ))
    } else {
        AppError::gateway(format!("Pesapal {} request failed: {}", call, e))
    }
}

#[async_trait]
impl PaymentGateway for PesapalClient {
    async fn request_token(&self) -> Result<GatewayToken> {
        let response = self
            .client
            .post(self.endpoint("Auth/RequestToken"))
            .header("Accept", "application/json")
            .json(&TokenRequest {
                consumer_key: &self.consumer_key,
                consumer_secret: &self.consumer_secret,
            })
            .send()
            .await
            .map_err(|e| request_error("token", e))?;

        let token: TokenResponse = read_json(response, "token").await?;

        if let Some(error) = token.error {
            return Err(AppError::gateway(format!(
                "Pesapal token request rejected: {}",
                error.describe()
            )));
        }

        match token.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                debug!("Pesapal token acquired");
                Ok(GatewayToken::new(token))
            }
            None => Err(AppError::gateway("Pesapal token response did not contain a token")),
        }
    }

    async fn submit_order(
        &self,
        token: &GatewayToken,
        order: &PaymentOrder,
    ) -> Result<OrderSubmission> {
        let response = self
            .client
            .post(self.endpoint("Transactions/SubmitOrderDetails"))
            .bearer_auth(token.as_str())
            .header("Accept", "application/json")
            .json(&self.order_body(order))
            .send()
            .await
            .map_err(|e| request_error("order", e))?;

        let order_response: OrderResponse = read_json(response, "order").await?;

        if let Some(error) = order_response.error {
            return Err(AppError::gateway(format!(
                "Pesapal order rejected: {}",
                error.describe()
            )));
        }

        debug!(
            reference = %order.reference,
            order_tracking_id = ?order_response.submission.order_tracking_id,
            "Pesapal order submitted"
        );

        Ok(order_response.submission)
    }

    fn name(&self) -> &str {
        "pesapal"
    }
}
