//! Metrics collection and exposition.
//!
//! # Metrics
//! - `security_headers_added_total` (counter): headers added, by header
//! - `security_headers_removed_total` (counter): headers stripped, by header

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const HEADERS_ADDED_TOTAL: &str = "security_headers_added_total";
pub const HEADERS_REMOVED_TOTAL: &str = "security_headers_removed_total";

/// Start the Prometheus exporter on `addr`. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

pub fn record_header_added(header: &str) {
    counter!(HEADERS_ADDED_TOTAL, "header" => header.to_owned()).increment(1);
}

pub fn record_header_removed(header: &str) {
    counter!(HEADERS_REMOVED_TOTAL, "header" => header.to_owned()).increment(1);
}
