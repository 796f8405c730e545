//! Security header middleware.
//!
//! # Responsibilities
//! - Add every policy header the response does not already carry
//! - Strip every header the policy removes
//! - Pass inner service errors through untouched
//!
//! # Design Decisions
//! - First writer wins: an existing header is never overwritten
//! - Names and values are converted to `http` types once, at layer
//!   construction; entries `http` cannot represent are skipped with a warning

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request, Response};
use axum::Router;
use tower::{Layer, Service};

use crate::config::HeadersConfig;
use crate::observability::metrics;
use crate::policy::{Policy, PolicyBuilder};

/// A [`Policy`] converted to `http` header types.
#[derive(Debug, Default)]
struct CompiledPolicy {
    added: Vec<(HeaderName, Vec<HeaderValue>)>,
    removed: Vec<HeaderName>,
}

impl CompiledPolicy {
    fn compile(policy: &Policy) -> Self {
        let mut added = Vec::with_capacity(policy.added().len());
        for (name, values) in policy.added() {
            let Some(header) = header_name(name) else {
                continue;
            };
            let values: Vec<HeaderValue> = values
                .iter()
                .filter_map(|value| match HeaderValue::from_str(value) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!(header = %name, value = %value, "Skipping unrepresentable header value");
                        None
                    }
                })
                .collect();
            if !values.is_empty() {
                added.push((header, values));
            }
        }

        let removed = policy
            .removed()
            .iter()
            .filter_map(|name| header_name(name))
            .collect();

        Self { added, removed }
    }

    fn apply(&self, headers: &mut HeaderMap) {
        for (name, values) in &self.added {
            if headers.contains_key(name) {
                continue;
            }
            for value in values {
                headers.append(name.clone(), value.clone());
            }
            metrics::record_header_added(name.as_str());
        }

        for name in &self.removed {
            if headers.contains_key(name) {
                headers.remove(name);
                metrics::record_header_removed(name.as_str());
            }
        }
    }
}

fn header_name(name: &str) -> Option<HeaderName> {
    match HeaderName::from_bytes(name.as_bytes()) {
        Ok(header) => Some(header),
        Err(_) => {
            tracing::warn!(header = %name, "Skipping unrepresentable header name");
            None
        }
    }
}

/// Applies a [`Policy`] to every response of the wrapped service.
#[derive(Clone, Debug)]
pub struct SecurityHeadersLayer {
    policy: Arc<CompiledPolicy>,
}

impl SecurityHeadersLayer {
    pub fn new(policy: Arc<Policy>) -> Self {
        let compiled = CompiledPolicy::compile(&policy);
        tracing::info!(
            added = compiled.added.len(),
            removed = compiled.removed.len(),
            "Security header policy installed"
        );
        Self {
            policy: Arc::new(compiled),
        }
    }

    pub fn from_builder(builder: PolicyBuilder) -> Self {
        Self::new(builder.build())
    }

    pub fn from_config(config: &HeadersConfig) -> Self {
        Self::from_builder(PolicyBuilder::new().add_from_configuration(config))
    }
}

impl From<Arc<Policy>> for SecurityHeadersLayer {
    fn from(policy: Arc<Policy>) -> Self {
        Self::new(policy)
    }
}

impl From<PolicyBuilder> for SecurityHeadersLayer {
    fn from(builder: PolicyBuilder) -> Self {
        Self::from_builder(builder)
    }
}

impl From<&HeadersConfig> for SecurityHeadersLayer {
    fn from(config: &HeadersConfig) -> Self {
        Self::from_config(config)
    }
}

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeadersService {
            inner,
            policy: Arc::clone(&self.policy),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SecurityHeadersService<S> {
    inner: S,
    policy: Arc<CompiledPolicy>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for SecurityHeadersService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let policy = Arc::clone(&self.policy);
        let future = self.inner.call(request);

        Box::pin(async move {
            let mut response = future.await?;
            policy.apply(response.headers_mut());
            Ok(response)
        })
    }
}

/// Registers the security header middleware on an axum [`Router`].
pub trait RouterExt {
    fn security_headers(self, layer: impl Into<SecurityHeadersLayer>) -> Self;
}

impl<S> RouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn security_headers(self, layer: impl Into<SecurityHeadersLayer>) -> Self {
        self.layer(layer.into())
    }
}
