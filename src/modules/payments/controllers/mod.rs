pub mod callback_controller;
pub mod payment_controller;

use super::services::{CallbackReceiver, PaymentInitiator};
use crate::middleware::json_error_handler;
use actix_web::web;

pub use callback_controller::{receive_callback, receive_callback_query, CallbackAck};
pub use payment_controller::initiate_payment;

/// Configure the `/api/pesapal` routes
pub fn configure(
    cfg: &mut web::ServiceConfig,
    initiator: PaymentInitiator,
    receiver: CallbackReceiver,
) {
    cfg.service(
        web::scope("/api/pesapal")
            .app_data(web::Data::new(initiator))
            .app_data(web::Data::new(receiver))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(initiate_payment)
            .service(receive_callback)
            .service(receive_callback_query),
    );
}
