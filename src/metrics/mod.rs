use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

pub fn setup_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    const RENDER_SECONDS: &[f64] = &[
        0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25,
    ];

    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("nametag_render_seconds".to_string()),
            RENDER_SECONDS,
        )?
        .install_recorder()
}

#[derive(Clone)]
pub struct Metrics {
    pub prometheus_handle: PrometheusHandle,
}

impl Metrics {
    pub fn new(prometheus_handle: PrometheusHandle) -> Self {
        Self { prometheus_handle }
    }

    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

/// Counts one nametag served in the given delivery mode and records how long
/// rendering and composition took.
pub fn record_nametag_rendered(mode: &'static str, duration: Duration) {
    metrics::increment_counter!("nametags_rendered_total", "mode" => mode);
    metrics::histogram!("nametag_render_seconds", duration.as_secs_f64(), "mode" => mode);
}

/// Counts a request for a template that does not exist.
pub fn record_template_fallback() {
    metrics::increment_counter!("template_fallbacks_total");
}

pub fn record_render_error() {
    metrics::increment_counter!("nametag_render_errors_total");
}
