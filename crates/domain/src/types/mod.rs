//! Domain types and models

pub mod crm;
pub mod query;
pub mod reports;

pub use crm::{Deal, Department, Employee};
pub use query::{Fetched, ListQuery, SortDirection};
pub use reports::{
    AgentRankings, DashboardReport, DealRow, DealTypeDistribution, DeveloperMonthStats,
    DeveloperShare, LastTransaction, MonthRanking, RankedAgent, ReportKind, SalesTeam,
    TeamMember,
};
