use metrics_exporter_prometheus::PrometheusHandle;
use smarthire::config::PlatformConfig;
use smarthire::notifications::ToastQueue;
use smarthire::recruitment::{InMemoryRepository, RecruitmentService};
use smarthire::session::SessionStore;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type ApiService = RecruitmentService<InMemoryRepository, ToastQueue>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Seeded in-memory platform plus the toast queue its pages report through.
pub(crate) fn seeded_service(platform: PlatformConfig) -> (Arc<ApiService>, Arc<ToastQueue>) {
    let toasts = Arc::new(ToastQueue::new(platform.toast_ttl));
    let service = RecruitmentService::new(
        Arc::new(InMemoryRepository::seeded()),
        toasts.clone(),
        SessionStore::new(),
        platform,
    );
    (Arc::new(service), toasts)
}

pub(crate) fn parse_millis(raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse::<u64>()
        .map_err(|err| format!("failed to parse '{raw}' as milliseconds ({err})"))
}
