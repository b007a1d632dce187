use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use cinema_api::adapters::{LoggingPaymentGateway, LoggingSeatReservation};
use cinema_api::{app, AppState};
use cinema_order::PurchaseCoordinator;
use cinema_store::app_config::Config;
use cinema_store::ConfigDiscountService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_api=debug,cinema_order=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting box office on port {}", config.server.port);

    let discounts = ConfigDiscountService::new(&config.discounts);
    tracing::info!("Loaded {} discount codes", discounts.len());

    let coordinator = PurchaseCoordinator::new(
        Arc::new(LoggingSeatReservation),
        Arc::new(LoggingPaymentGateway),
    )
    .with_pricing(config.pricing())
    .with_discount_service(Arc::new(discounts));

    let app = app(AppState::new(coordinator));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
