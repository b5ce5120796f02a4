//! Library exports for reuse in binaries and tests.
/// Gateway client for the NLP inference backend.
pub mod api;
/// App directory resolution.
pub mod app_dirs;
/// Static benchmark dataset and chart math.
pub mod benchmarks;
/// Persisted application settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent and bounded body reads.
pub mod http_client;
/// Tracing setup with per-launch log files.
pub mod logging;
/// Client-only page scrape heuristic.
pub mod scrape;
/// Pure text-splicing helpers.
pub mod textops;
