use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use storefront_loyalty::config::{AppConfig, ConfigError};
use storefront_loyalty::error::AppError;
use storefront_loyalty::loyalty::{LoyaltyEngine, LoyaltyService};
use storefront_loyalty::storefront::Catalog;
use storefront_loyalty::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = LoyaltyEngine::new(config.scoring).map_err(ConfigError::from)?;
    let loyalty_service = Arc::new(LoyaltyService::new(engine, Catalog::standard()));

    let app = with_service_routes(loyalty_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "storefront loyalty service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
