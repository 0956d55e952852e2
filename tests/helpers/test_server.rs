// Test Server Helpers
//
// Spawns the relay on a real HTTP test server using actix-test, configured
// from an in-memory variable map instead of the process environment.

use actix_web::App;
use pesarelay::config::Config;
use pesarelay::configure_app;
use pesarelay::middleware::{cors, RequestId};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;

pub use actix_test::TestServer;

pub const TEST_CALLBACK_URL: &str = "https://relay.test/api/pesapal/callback";

/// Configuration pointing the relay at `api_url`
pub fn test_config(api_url: &str) -> Config {
    test_config_with(api_url, &[])
}

/// Configuration with extra or overriding variables; an empty value unsets
/// a variable.
pub fn test_config_with(api_url: &str, overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("APP_ENV", "test"),
        ("PESAPAL_CONSUMER_KEY", "test-consumer-key"),
        ("PESAPAL_CONSUMER_SECRET", "test-consumer-secret"),
        ("PESAPAL_API_URL", api_url),
        ("CALLBACK_URL", TEST_CALLBACK_URL),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    Config::from_source(|key| vars.get(key).cloned()).expect("test configuration must be valid")
}

/// Spawn the full relay (routes, CORS, request ids) on a random port
pub fn spawn_app(config: Config) -> TestServer {
    let cors_config = config.cors.clone();
    let routes = configure_app(Arc::new(config));

    actix_test::start(move || {
        App::new()
            .wrap(cors(&cors_config))
            .wrap(RequestId)
            .configure(routes.clone())
    })
}

/// Find a port with nothing listening on it
pub fn find_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to any available port")
        .local_addr()
        .expect("Failed to get local address")
        .port()
}

/// API URL that refuses connections
pub fn unreachable_api_url() -> String {
    format!("http://127.0.0.1:{}", find_available_port())
}
