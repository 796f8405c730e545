//! Security header middleware for axum/tower services.
//!
//! Builds a [`Policy`] of headers to add and headers to strip, either
//! programmatically through [`PolicyBuilder`] or from configuration, and
//! applies it to every response through [`SecurityHeadersLayer`].
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use security_headers::{PolicyBuilder, RouterExt};
//!
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "ok" }))
//!     .security_headers(
//!         PolicyBuilder::new()
//!             .add_no_sniff()
//!             .add_frame_deny_options()
//!             .add_max_age_with_sub_domain(31_536_000)
//!             .remove_server(),
//!     );
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod policy;

pub use config::{AppConfig, HeadersConfig};
pub use http::{HttpServer, RouterExt, SecurityHeadersLayer};
pub use policy::{Policy, PolicyBuilder};
