pub mod payment_order;
pub mod status_notification;

pub use payment_order::{
    InitiatePaymentRequest, InitiatePaymentResponse, InitiatedPayment, PaymentOrder,
};
pub use status_notification::{CallbackQuery, OrderStatus, StatusNotification};
