use crate::cli::ServeArgs;
use crate::infra::{seeded_service, AppState};
use crate::routes::with_platform_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use smarthire::config::AppConfig;
use smarthire::error::AppError;
use smarthire::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
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

    // tokio intervals reject a zero period
    let sweep_every = config.platform.toast_ttl.max(Duration::from_millis(100));
    let (service, toasts) = seeded_service(config.platform.clone());
    let sweeper = toasts.spawn_sweeper(sweep_every);

    let app = with_platform_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        demo_company = %config.platform.demo_company,
        "smarthire platform ready"
    );

    let served = axum::serve(listener, app).await;
    sweeper.abort();
    served?;
    Ok(())
}
