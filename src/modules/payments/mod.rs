pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{
    InitiatePaymentRequest, InitiatePaymentResponse, InitiatedPayment, OrderStatus, PaymentOrder,
    StatusNotification,
};
pub use services::{CallbackReceiver, PaymentGateway, PaymentInitiator, PesapalClient};
