// Test Data Factory
//
// Request bodies for the relay's endpoints.

use serde_json::{json, Value};

pub const TEST_PHONE: &str = "254712345678";
pub const TEST_RECIPIENT: &str = "254746630940";

pub struct TestDataFactory;

impl TestDataFactory {
    /// Body the donation form sends
    pub fn initiate_payload() -> Value {
        json!({
            "phoneNumber": TEST_PHONE,
            "amount": 30,
            "recipientNumber": TEST_RECIPIENT
        })
    }

    /// Gateway notification body
    pub fn callback_payload(status: &str, reference: &str, amount: u32) -> Value {
        json!({
            "OrderTrackingId": "b945e4af-80a5-4ec1-8706-e03f8332fb04",
            "OrderStatus": status,
            "OrderAmount": amount,
            "OrderReference": reference
        })
    }
}
