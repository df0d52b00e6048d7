//! Report result types
//!
//! These are serialized verbatim as HTTP response bodies, so field names
//! follow the JSON contract the dashboard frontend reads (a mix of
//! snake_case and camelCase, per report).

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::impl_code_conversions;

/// The reports exposed over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    AgentRankings,
    Dashboard,
    LastTransactions,
    OverallDeals,
    SalesTeams,
}

impl_code_conversions!(ReportKind {
    AgentRankings => "agent_rankings",
    Dashboard => "dashboard",
    LastTransactions => "last_transactions",
    OverallDeals => "overall_deals",
    SalesTeams => "sales_teams",
});

impl ReportKind {
    pub const ALL: [Self; 5] = [
        Self::AgentRankings,
        Self::Dashboard,
        Self::LastTransactions,
        Self::OverallDeals,
        Self::SalesTeams,
    ];
}

/* -------------------------------------------------------------------------- */
/* Agent rankings */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAgent {
    pub agent: String,
    pub gross_commission: f64,
}

/// Ranked agents for one month; rank is position + 1.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRanking {
    /// Three-letter lowercase month (`"mar"`).
    pub month: &'static str,
    pub agents: Vec<RankedAgent>,
}

/// Serialized as `{ "jan": { "1": {..}, "2": {..} }, "feb": {}, .. }` with
/// months in calendar order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentRankings {
    pub months: Vec<MonthRanking>,
}

impl AgentRankings {
    #[must_use]
    pub fn month(&self, month: &str) -> Option<&MonthRanking> {
        self.months.iter().find(|m| m.month == month)
    }
}

impl Serialize for AgentRankings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.months.len()))?;
        for month in &self.months {
            map.serialize_entry(month.month, &RankedList(&month.agents))?;
        }
        map.end()
    }
}

struct RankedList<'a>(&'a [RankedAgent]);

impl Serialize for RankedList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (idx, agent) in self.0.iter().enumerate() {
            map.serialize_entry(&(idx + 1).to_string(), agent)?;
        }
        map.end()
    }
}

/* -------------------------------------------------------------------------- */
/* Dashboard */
/* -------------------------------------------------------------------------- */

/// Closed-deal totals for one developer in one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeveloperMonthStats {
    /// Full month name (`"March"`).
    pub month: String,
    #[serde(skip)]
    pub month_number: u32,
    pub developer: String,
    pub closed_deals: u32,
    pub property_price: f64,
    pub total_commission: f64,
    pub agent_commission: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DealTypeDistribution {
    #[serde(rename = "Off-Plan")]
    pub off_plan: u32,
    #[serde(rename = "Secondary")]
    pub secondary: u32,
    #[serde(rename = "Rental")]
    pub rental: u32,
    #[serde(rename = "Unknown")]
    pub unknown: u32,
}

impl DealTypeDistribution {
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.off_plan + self.secondary + self.rental + self.unknown
    }
}

/// A developer's share of total property price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeveloperShare {
    pub developer: String,
    pub property_price: f64,
    /// Percent of the grand total, two decimals; 0 when the total is 0.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub developer_stats: Vec<DeveloperMonthStats>,
    pub deal_type_distribution: DealTypeDistribution,
    pub developer_property_price_distribution: Vec<DeveloperShare>,
}

/* -------------------------------------------------------------------------- */
/* Last transactions */
/* -------------------------------------------------------------------------- */

/// Latest closed deal of one sales agent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastTransaction {
    pub agent: String,
    pub joining_date: Option<String>,
    pub last_deal_date: Option<String>,
    pub project: String,
    pub amount: f64,
    pub gross_comms: f64,
    pub months_without_closing: u32,
}

/* -------------------------------------------------------------------------- */
/* Overall deals */
/* -------------------------------------------------------------------------- */

/// One row of the recent-deals table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRow {
    pub date: String,
    pub deal_type: String,
    pub project_name: String,
    pub unit_no: String,
    pub developer_name: String,
    pub property_type: String,
    pub no_of_br: i64,
    pub client_name: String,
    pub agent_name: String,
    pub property_price: f64,
    #[serde(rename = "grossCommissionInclVAT")]
    pub gross_commission_incl_vat: f64,
    pub gross_commission: f64,
    pub vat: f64,
    pub agent_commission: f64,
    pub lead_source: String,
}

/* -------------------------------------------------------------------------- */
/* Sales teams */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: String,
    /// `None` marks the department head.
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTeam {
    pub team_name: String,
    pub head: Option<String>,
    pub members: Vec<TeamMember>,
}
