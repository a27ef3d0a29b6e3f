//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`response`]**: the uniform success envelope
//! - **[`errors`]**: error taxonomy and the terminal error-to-HTTP mapping
//! - **[`extractors`]**: validated body/query/path-id extractors
//! - **[`http`]**: CORS, security headers, rate limiting
//! - **[`server`]**: router assembly, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::http::{create_permissive_cors_layer, RateLimitConfig};
//! use axum_helpers::server::{create_production_app, create_router, ShutdownCoordinator};
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(
//!         "/api",
//!         api_routes,
//!         create_permissive_cors_layer(),
//!         &RateLimitConfig::default(),
//!     );
//!
//!     let (coordinator, _rx) = ShutdownCoordinator::new();
//!     create_production_app(router, "0.0.0.0:3000", coordinator,
//!         Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

// Re-export envelope types
pub use response::ApiResponse;

// Re-export error types
pub use errors::{set_deployment_mode, AppError, DeploymentMode, ErrorBody};

// Re-export extractors
pub use extractors::{IdPath, ValidatedBody, ValidatedQuery};

// Re-export HTTP middleware
pub use http::{
    create_cors_layer, create_permissive_cors_layer, security_headers, with_rate_limit,
    RateLimitConfig,
};

// Re-export server types
pub use server::{create_production_app, create_router, ShutdownCoordinator};
