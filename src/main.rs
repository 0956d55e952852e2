use actix_web::{App, HttpServer};
use anyhow::Context;
use pesarelay::config::{Config, LogFormat};
use pesarelay::middleware::{cors, RequestId};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pesarelay=debug,actix_web=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(config.app.log_format);

    config
        .validate()
        .context("Configuration validation failed")?;
    for warning in config.warnings() {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Starting Pesapal payment relay");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Pesapal API: {}", config.pesapal.api_url);
    tracing::info!("Callback URL: {}", config.pesapal.callback_url);

    let bind_address = config.server.bind_address();
    let cors_config = config.cors.clone();
    let routes = pesarelay::configure_app(Arc::new(config));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_config))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(routes.clone())
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server running on http://{}", bind_address);

    server.await?;
    Ok(())
}
