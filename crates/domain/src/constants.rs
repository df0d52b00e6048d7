//! Application constants
//!
//! Centralized location for domain-level constants: defaults, Bitrix field
//! codes and categorical codes.

// Configuration defaults
pub const DEFAULT_CACHE_EXPIRY_SECS: u64 = 300;
pub const DEFAULT_CACHE_NAMESPACE: &str = "x10-management-dashboard";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMEZONE: &str = "Asia/Dubai";
pub const DEFAULT_REQUEST_LOG_DIR: &str = "logs";
pub const DEFAULT_RANKING_TOP_N: usize = 5;
pub const DEFAULT_OVERALL_DEALS_LIMIT: usize = 10;

// Placeholders
pub const UNKNOWN_AGENT: &str = "Unknown Agent";
pub const UNKNOWN_DEVELOPER: &str = "Unknown";
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Bitrix REST method names.
pub mod methods {
    pub const DEAL_LIST: &str = "crm.deal.list";
    pub const USER_GET: &str = "user.get";
    pub const DEPARTMENT_GET: &str = "department.get";
}

/// Bitrix deal, user and department field codes.
pub mod fields {
    pub const ID: &str = "ID";
    pub const TITLE: &str = "TITLE";
    pub const STAGE_ID: &str = "STAGE_ID";
    pub const CLOSED: &str = "CLOSED";
    pub const DATE_CREATE: &str = "DATE_CREATE";
    pub const CLOSE_DATE: &str = "CLOSEDATE";
    pub const OPPORTUNITY: &str = "OPPORTUNITY";
    pub const ASSIGNED_BY_ID: &str = "ASSIGNED_BY_ID";
    pub const SOURCE_ID: &str = "SOURCE_ID";
    pub const TEAM: &str = "UF_TEAM";

    pub const RANKING_COMMISSION: &str = "UF_CRM_6800C17742B22";
    pub const DEAL_TYPE: &str = "UF_CRM_67FF84E2C3A4A";
    pub const DEVELOPER: &str = "UF_CRM_67FF84E2B934F";
    pub const TOTAL_COMMISSION: &str = "UF_CRM_67FF84E2B45F2";
    pub const AGENT_COMMISSION: &str = "UF_CRM_67FF84E2BE481";
    pub const PROJECT: &str = "UF_CRM_67FF84E2C8AB6";
    pub const COMMISSION_PERCENT: &str = "UF_CRM_67FF84E2CD927";
    pub const CLIENT_NAME: &str = "UF_CRM_67FF84E299077";
    pub const UNIT_NO: &str = "UF_CRM_67FF941757D73";
    pub const PROPERTY_PRICE: &str = "UF_CRM_67FF84E2D7CCA";
    pub const PROPERTY_TYPE: &str = "UF_CRM_67FF84E2DCC09";
    pub const BEDROOMS: &str = "UF_CRM_67FF84E2E1D1A";
    pub const VAT: &str = "UF_CRM_67FF84E2ECBF3";

    pub const NAME: &str = "NAME";
    pub const LAST_NAME: &str = "LAST_NAME";
    pub const WORK_POSITION: &str = "WORK_POSITION";
    pub const DEPARTMENT: &str = "UF_DEPARTMENT";
    pub const EMPLOYMENT_DATE: &str = "UF_EMPLOYMENT_DATE";
    pub const HEAD: &str = "UF_HEAD";
}

// Deal type enum values (UF_CRM_67FF84E2C3A4A)
pub const DEAL_TYPE_OFF_PLAN: i64 = 4694;
pub const DEAL_TYPE_SECONDARY: i64 = 4695;
pub const DEAL_TYPE_RENTAL: i64 = 4696;

pub const MONTH_ABBREVIATIONS: [&str; 12] =
    ["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"];
