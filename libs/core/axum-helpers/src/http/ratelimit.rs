//! Global per-client-address rate limiting.

use crate::errors::AppError;
use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorError,
    GovernorLayer,
};

/// Fixed request budget per client address per window.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(15 * 60),
        }
    }
}

/// Wrap a router with the global rate-limit layer.
///
/// The budget is expressed to the limiter as a replenish period of
/// `window / max_requests` with a burst of `max_requests`, which admits at
/// most `max_requests` calls from one address in any window-sized span.
/// Standard `x-ratelimit-*` headers are attached to responses; requests
/// over budget receive the 429 error envelope.
///
/// Client addresses come from forwarding headers when present, otherwise
/// from the peer address — the server must therefore be started with
/// connect info (see `create_production_app`).
pub fn with_rate_limit(router: Router, config: &RateLimitConfig) -> Router {
    let max_requests = config.max_requests.max(1);
    let period = config.window.div_f64(f64::from(max_requests));

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .period(period)
            .burst_size(max_requests)
            .use_headers()
            .finish()
            .expect("rate limit period and burst size must be non-zero"),
    );

    // The limiter keeps per-address state; evict idle entries periodically
    // so memory stays bounded.
    let limiter = governor_conf.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    router.layer(GovernorLayer::new(governor_conf).error_handler(rate_limit_error))
}

fn rate_limit_error(error: GovernorError) -> Response {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            let mut response = AppError::TooManyRequests(
                "Too many requests, please try again later".to_string(),
            )
            .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
                .headers_mut()
                .insert("retry-after", HeaderValue::from(wait_time));
            response
        }
        GovernorError::UnableToExtractKey => AppError::Internal(
            "Unable to determine client address for rate limiting".to_string(),
        )
        .into_response(),
        GovernorError::Other { msg, .. } => {
            AppError::Internal(msg.unwrap_or_else(|| "Rate limiter failure".to_string()))
                .into_response()
        }
    }
}
