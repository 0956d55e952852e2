use super::super::models::PaymentOrder;
use crate::core::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Payment gateway operations needed to send a customer to a hosted payment page
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Exchange the consumer credentials for a short-lived bearer token
    async fn request_token(&self) -> Result<GatewayToken>;

    /// Submit an order using a token from [`PaymentGateway::request_token`]
    async fn submit_order(&self, token: &GatewayToken, order: &PaymentOrder)
        -> Result<OrderSubmission>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Opaque bearer token issued by the gateway
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayToken(String);

impl GatewayToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for GatewayToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GatewayToken(***)")
    }
}

/// Gateway answer to an order submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderSubmission {
    #[serde(default)]
    pub order_tracking_id: Option<String>,
    #[serde(default)]
    pub merchant_reference: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub payment_url: Option<String>,
}

impl OrderSubmission {
    /// Hosted payment page URL: `redirect_url`, else `payment_url`.
    /// Empty strings count as absent.
    pub fn payment_url(&self) -> Option<&str> {
        [&self.redirect_url, &self.payment_url]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .map(str::trim)
            .find(|url| !url.is_empty())
    }
}
