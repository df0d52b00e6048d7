//! # Dealboard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the CRM source, report cache and clock
//! - The report builders: pure functions from CRM records to report results
//! - `ReportService`, which wires cache lookups, CRM fetches and builders
//!
//! ## Architecture Principles
//! - Only depends on `dealboard-domain`
//! - No HTTP, filesystem, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod reports;

// Infrastructure ports
pub mod cache_ports;
pub mod clock_ports;
pub mod crm_ports;

pub use cache_ports::ReportCache;
pub use clock_ports::Clock;
pub use crm_ports::CrmSource;
pub use reports::service::{RenderedReport, ReportParams, ReportService, ReportSettings};
