//! Pesapal payment relay
//!
//! Turns a phone number from the donation form into a Pesapal hosted payment
//! page, and acknowledges the gateway's asynchronous status notifications.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;
use std::sync::Arc;

use config::Config;
use modules::payments::{CallbackReceiver, PaymentGateway, PaymentInitiator, PesapalClient};

// Re-export commonly used types
pub use modules::health;
pub use modules::payments;
pub use modules::ui;

/// Build the route configuration for the whole service.
///
/// Components are constructed once here and cloned into each worker; the
/// returned closure is what `App::configure` expects.
pub fn configure_app(
    config: Arc<Config>,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    let gateway: Arc<dyn PaymentGateway> = Arc::new(PesapalClient::new(&config.pesapal));
    configure_app_with_gateway(config, gateway)
}

/// Same as [`configure_app`] with a caller-supplied gateway
pub fn configure_app_with_gateway(
    config: Arc<Config>,
    gateway: Arc<dyn PaymentGateway>,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    let initiator = PaymentInitiator::new(gateway);
    let receiver = CallbackReceiver::new(config.pesapal.ipn_secret.clone());

    move |cfg: &mut web::ServiceConfig| {
        health::configure(cfg, &config.app.env);
        payments::configure(cfg, initiator.clone(), receiver.clone());
        ui::configure(cfg);
    }
}
