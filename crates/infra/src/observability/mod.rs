//! Observability: structured logging and the request audit log
//!
//! Diagnostic output goes through `tracing` (see [`logging`]). The audit log
//! is a separate, always-on record of inbound requests kept in dated files
//! (see [`audit`]).

pub mod audit;
pub mod logging;

pub use audit::{AuditEntry, RequestAuditLog};
pub use logging::init_tracing;
