use crate::core::{AppError, Result};

pub const PRODUCTION_API_URL: &str = "https://pay.pesapal.com/api";
pub const SANDBOX_API_URL: &str = "https://demo.pesapal.com/api";
pub const PLACEHOLDER_CALLBACK_URL: &str = "https://your-domain.vercel.app/api/pesapal/callback";

/// Credentials and endpoints for the Pesapal gateway
#[derive(Debug, Clone)]
pub struct PesapalConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub api_url: String,
    pub callback_url: String,
    /// Shared secret for HMAC verification of inbound notifications.
    /// Verification is skipped when unset.
    pub ipn_secret: Option<String>,
}

impl PesapalConfig {
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let sandbox = lookup("PESAPAL_ENV")
            .map(|env| env.eq_ignore_ascii_case("sandbox"))
            .unwrap_or(false);
        let default_api_url = if sandbox {
            SANDBOX_API_URL
        } else {
            PRODUCTION_API_URL
        };

        Self {
            consumer_key: lookup("PESAPAL_CONSUMER_KEY").unwrap_or_default(),
            consumer_secret: lookup("PESAPAL_CONSUMER_SECRET").unwrap_or_default(),
            api_url: lookup("PESAPAL_API_URL")
                .unwrap_or_else(|| default_api_url.to_string())
                .trim_end_matches('/')
                .to_string(),
            callback_url: lookup("CALLBACK_URL")
                .unwrap_or_else(|| PLACEHOLDER_CALLBACK_URL.to_string()),
            ipn_secret: lookup("PESAPAL_IPN_SECRET"),
        }
    }

    /// Missing values the relay can start without, but which will make the
    /// gateway reject requests.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.consumer_key.is_empty() {
            warnings.push("PESAPAL_CONSUMER_KEY not set; token requests will fail".to_string());
        }
        if self.consumer_secret.is_empty() {
            warnings.push("PESAPAL_CONSUMER_SECRET not set; token requests will fail".to_string());
        }
        if self.callback_url == PLACEHOLDER_CALLBACK_URL {
            warnings.push(format!(
                "CALLBACK_URL not set; notifications will go to {}",
                PLACEHOLDER_CALLBACK_URL
            ));
        }
        if self.ipn_secret.is_none() {
            warnings.push(
                "PESAPAL_IPN_SECRET not set; callback signatures will not be verified".to_string(),
            );
        }

        warnings
    }

    pub fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(AppError::Configuration(format!(
                "PESAPAL_API_URL must be an http(s) URL, got {}",
                self.api_url
            )));
        }

        Ok(())
    }
}
