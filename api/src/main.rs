use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use cg_api::{create_app, AppState};
use cg_core::services::AuthService;
use cg_infra::{CodeStoreBackend, MessagingGateway, WhatsAppGatewayClient};
use cg_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!(
        "Starting CodeGate API Server ({:?} environment)",
        config.environment
    );

    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; signing session tokens with the development secret");
    }

    let store = CodeStoreBackend::from_config(&config.cache)
        .await
        .context("Failed to initialize the code store")?;
    info!("Using {} code store", store.name());

    let gateway = WhatsAppGatewayClient::new(config.messaging.clone())
        .context("Failed to build the messaging gateway client")?;

    // Non-fatal: the channel may come up after the API does
    if gateway.check_ready().await {
        info!("Messaging channel at {} is ready", gateway.base_url());
    } else {
        warn!(
            "Messaging channel at {} is not ready; code requests will fail until it is",
            gateway.base_url()
        );
    }

    let auth_service = AuthService::from_config(Arc::new(gateway), Arc::new(store), &config.auth)
        .context("Invalid authentication configuration")?;
    let app_state = web::Data::new(AppState::new(Arc::new(auth_service)));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    Ok(())
}
