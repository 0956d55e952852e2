use crate::core::Result;
use std::env;

pub mod pesapal;
pub mod server;

pub use pesapal::PesapalConfig;
pub use server::ServerConfig;

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is not set
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5000",
    "http://127.0.0.1:3000",
    "https://*.vercel.app",
];

/// Main application configuration
///
/// Built once at startup and shared read-only with every component.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub pesapal: PesapalConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Exact origins, or `scheme://*.domain` wildcard subdomain patterns
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_format: match lookup("LOG_FORMAT") {
                    Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
                    _ => LogFormat::Pretty,
                },
            },
            server: ServerConfig::from_source(lookup)?,
            pesapal: PesapalConfig::from_source(lookup),
            cors: CorsConfig {
                allowed_origins: match lookup("CORS_ALLOWED_ORIGINS") {
                    Some(raw) => raw
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect(),
                    None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
                },
            },
        };

        Ok(config)
    }

    /// Validate configuration. Only malformed values fail; missing
    /// credentials are reported through [`Config::warnings`].
    pub fn validate(&self) -> Result<()> {
        self.pesapal.validate()
    }

    /// Human-readable warnings for values the relay can run without
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = self.pesapal.warnings();

        if self.cors.allowed_origins.is_empty() {
            warnings.push(
                "CORS_ALLOWED_ORIGINS is empty; browsers on other origins will be refused"
                    .to_string(),
            );
        }

        warnings
    }
}
