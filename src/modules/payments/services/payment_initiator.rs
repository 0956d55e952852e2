use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use super::super::models::{InitiatePaymentRequest, InitiatedPayment, PaymentOrder};
use super::gateway_trait::PaymentGateway;
use crate::core::{AppError, Result};

/// Sends a customer from the donation form to the gateway's hosted payment page
///
/// Stateless: nothing about the order outlives the call.
#[derive(Clone)]
pub struct PaymentInitiator {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentInitiator {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Validate the request, then authenticate and submit the order.
    ///
    /// The two gateway calls are sequential; either failing, or an order
    /// response without a usable URL, is an [`AppError::Gateway`].
    pub async fn initiate(&self, request: InitiatePaymentRequest) -> Result<InitiatedPayment> {
        let order = PaymentOrder::from_request(request, Utc::now())?;

        info!(
            gateway = %self.gateway.name(),
            reference = %order.reference,
            amount = %order.amount,
            currency = %order.currency,
            "Initiating payment"
        );

        match self.submit(&order).await {
            Ok(payment) => {
                info!(
                    reference = %payment.reference,
                    order_tracking_id = ?payment.order_tracking_id,
                    "Payment initiated"
                );
                Ok(payment)
            }
            Err(e) => {
                error!(
                    gateway = %self.gateway.name(),
                    reference = %order.reference,
                    error = %e,
                    "Failed to initiate payment"
                );
                Err(e)
            }
        }
    }

    async fn submit(&self, order: &PaymentOrder) -> Result<InitiatedPayment> {
        let token = self.gateway.request_token().await?;
        let submission = self.gateway.submit_order(&token, order).await?;

        let payment_url = submission
            .payment_url()
            .ok_or_else(|| AppError::gateway("Failed to get payment URL from Pesapal"))?
            .to_string();

        Ok(InitiatedPayment {
            reference: order.reference.clone(),
            payment_url,
            order_tracking_id: submission.order_tracking_id,
        })
    }
}
