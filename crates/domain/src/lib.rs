//! # Dealboard Domain
//!
//! Business domain types and models for Dealboard.
//!
//! This crate contains:
//! - CRM record types (Deal, Employee, Department) decoded from Bitrix24
//! - Report result types serialized by the HTTP layer
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Bitrix field codes, deal-type codes and static lookup tables
//!
//! ## Architecture
//! - No dependencies on other Dealboard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod lookups;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
