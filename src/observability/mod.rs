//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! middleware / policy builder produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (header added/removed counters)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
