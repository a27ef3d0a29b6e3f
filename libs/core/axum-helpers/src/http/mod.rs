//! HTTP-level middleware: CORS, security headers, rate limiting.

pub mod cors;
pub mod ratelimit;
pub mod security;

pub use cors::{create_cors_layer, create_permissive_cors_layer};
pub use ratelimit::{with_rate_limit, RateLimitConfig};
pub use security::security_headers;
