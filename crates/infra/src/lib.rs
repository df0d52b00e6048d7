//! # Dealboard Infrastructure
//!
//! Implementations of the ports defined in `dealboard-core`, plus the
//! process-level plumbing the server needs.
//!
//! This crate contains:
//! - The Bitrix24 REST client (`CrmSource`)
//! - The file-backed report cache (`ReportCache`)
//! - The system clock (`Clock`)
//! - Configuration loading, tracing setup and the request audit log
//!
//! All I/O lives here; `dealboard-core` stays pure.

pub mod cache;
pub mod clock;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

pub use cache::FileReportCache;
pub use clock::SystemClock;
pub use errors::InfraError;
pub use http::HttpClient;
pub use integrations::bitrix::BitrixClient;
pub use observability::{init_tracing, AuditEntry, RequestAuditLog};
