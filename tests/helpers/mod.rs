// Test Helper Modules
//
// Shared infrastructure for integration tests. Each test binary pulls this in
// with `#[path = "../helpers/mod.rs"] mod helpers;` and uses a subset of it.
//
// Example:
//   #[actix_web::test]
//   async fn test_health() {
//       let sandbox = PesapalSandbox::start(GatewayScenario::NoPaymentUrl);
//       let srv = spawn_app(test_config(&sandbox.api_url()));
//       let response = srv.get("/api/health").send().await.unwrap();
//       assert_ok(&response);
//   }

#![allow(dead_code)]

pub mod assertions;
pub mod gateway_sandbox;
pub mod test_data;
pub mod test_server;

// Re-export commonly used types and functions
pub use assertions::*;
pub use gateway_sandbox::*;
pub use test_data::*;
pub use test_server::*;
