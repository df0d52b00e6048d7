//! Report builders
//!
//! Each builder is a pure function from CRM records and a reference date to
//! a report value. Fetching, caching and "today" live in [`service`].

pub mod dashboard;
pub mod last_transactions;
pub mod overall_deals;
pub mod rankings;
pub mod sales_teams;
pub mod service;

use std::collections::HashMap;

use dealboard_domain::Employee;

pub use dashboard::build_dashboard;
pub use last_transactions::build_last_transactions;
pub use overall_deals::build_overall_deals;
pub use rankings::build_agent_rankings;
pub use sales_teams::build_sales_teams;

/// Employee id → trimmed full name.
pub(crate) fn names_by_id(employees: &[Employee]) -> HashMap<u64, String> {
    employees.iter().map(|employee| (employee.id, employee.full_name())).collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
