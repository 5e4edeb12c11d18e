//! OpenTelemetry-based observability with file-based trace export.
//!
//! Distributed tracing infrastructure for the plugin, using OTLP JSON with
//! file-based exporting. The plugin sandbox has no reachable collector, so
//! traces go to rotated JSON files for offline analysis:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON files
//! ```
//!
//! Traces land in `~/.local/share/zellij/zlibrarian/zlibrarian-otlp.json`,
//! rotating at 10 MB with 3 backups retained. The trace level comes from the
//! `trace_level` plugin configuration option (default `"info"`).
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Custom tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
