//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing, timeout)
//!     → middleware/security_headers.rs (policy applied to the response)
//!     → probe handler
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use middleware::{RouterExt, SecurityHeadersLayer};
pub use server::HttpServer;
