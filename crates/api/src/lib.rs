//! # Dealboard API
//!
//! HTTP layer - router, response emitter and application wiring.
//!
//! This crate contains:
//! - The axum router and report dispatch
//! - The JSON response emitter (CORS and cache headers)
//! - Application context (dependency injection)
//! - The `dealboard` server binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the production adapters into `ReportService`

pub mod context;
pub mod response;
pub mod routes;

// Re-export for convenience
pub use context::AppContext;
pub use response::ResponseEmitter;
pub use routes::router;
