pub mod callback_receiver;
pub mod gateway_trait;
pub mod payment_initiator;
pub mod pesapal;
pub mod signature;

pub use callback_receiver::{CallbackReceiver, NotificationOutcome};
pub use gateway_trait::{GatewayToken, OrderSubmission, PaymentGateway};
pub use payment_initiator::PaymentInitiator;
pub use pesapal::PesapalClient;
pub use signature::{SignatureVerifier, SIGNATURE_HEADER};
