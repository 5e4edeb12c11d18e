//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with OpenTelemetry integration, wiring
//! the complete pipeline from `tracing` macros to file export.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in exported trace resources.
const SERVICE_NAME: &str = "zlibrarian";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Spans are filtered by the configured trace level (default `"info"`),
/// exported through OpenTelemetry, serialized to OTLP JSON, and written to
/// `zlibrarian-otlp.json` in the sandbox data directory with rotation.
///
/// Observability is optional: if the data directory cannot be created the
/// function returns silently, and repeated calls are safe (only the first
/// subscriber installation takes effect).
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let trace_file = data_dir.join("zlibrarian-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
