//! CRM records as returned by the Bitrix24 REST API
//!
//! Field names follow the Bitrix codes; see [`crate::constants::fields`].
//! Only the fields the reports read are modelled, everything else in the
//! payload is ignored.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::bitrix_values::{
    lenient_f64, lenient_i64, lenient_id, lenient_id_list, lenient_opt_id, lenient_string,
    scalar_or_first,
};
use crate::utils::dates::parse_bitrix_datetime;

/// A deal (`crm.deal.list`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(rename = "ID", deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(rename = "TITLE", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "STAGE_ID", default, deserialize_with = "lenient_string")]
    pub stage_id: Option<String>,
    /// `"Y"` once the deal reached a final stage.
    #[serde(rename = "CLOSED", default, deserialize_with = "lenient_string")]
    pub closed: Option<String>,
    #[serde(rename = "DATE_CREATE", default, deserialize_with = "lenient_string")]
    pub date_create: Option<String>,
    #[serde(rename = "CLOSEDATE", default, deserialize_with = "lenient_string")]
    pub close_date: Option<String>,
    /// Property price.
    #[serde(rename = "OPPORTUNITY", default, deserialize_with = "lenient_f64")]
    pub opportunity: Option<f64>,
    #[serde(rename = "ASSIGNED_BY_ID", default, deserialize_with = "lenient_opt_id")]
    pub assigned_by_id: Option<u64>,
    #[serde(rename = "SOURCE_ID", default, deserialize_with = "lenient_string")]
    pub source_id: Option<String>,

    #[serde(rename = "UF_CRM_6800C17742B22", default, deserialize_with = "lenient_f64")]
    pub ranking_commission: Option<f64>,
    /// Raw deal-type enum value, see [`crate::constants::DEAL_TYPE_OFF_PLAN`].
    #[serde(rename = "UF_CRM_67FF84E2C3A4A", default, deserialize_with = "lenient_string")]
    pub deal_type: Option<String>,
    #[serde(rename = "UF_CRM_67FF84E2B934F", default, deserialize_with = "lenient_string")]
    pub developer: Option<String>,
    #[serde(rename = "UF_CRM_67FF84E2B45F2", default, deserialize_with = "lenient_f64")]
    pub total_commission: Option<f64>,
    #[serde(rename = "UF_CRM_67FF84E2BE481", default, deserialize_with = "lenient_f64")]
    pub agent_commission: Option<f64>,
    #[serde(rename = "UF_CRM_67FF84E2C8AB6", default, deserialize_with = "lenient_string")]
    pub project: Option<String>,
    #[serde(rename = "UF_CRM_67FF84E2CD927", default, deserialize_with = "lenient_f64")]
    pub commission_percent: Option<f64>,
    #[serde(rename = "UF_CRM_67FF84E299077", default, deserialize_with = "lenient_string")]
    pub client_name: Option<String>,
    #[serde(rename = "UF_CRM_67FF941757D73", default, deserialize_with = "lenient_string")]
    pub unit_no: Option<String>,
    #[serde(rename = "UF_CRM_67FF84E2D7CCA", default, deserialize_with = "lenient_f64")]
    pub property_price: Option<f64>,
    #[serde(rename = "UF_CRM_67FF84E2DCC09", default, deserialize_with = "scalar_or_first")]
    pub property_type: Option<String>,
    #[serde(rename = "UF_CRM_67FF84E2E1D1A", default, deserialize_with = "lenient_i64")]
    pub bedrooms: Option<i64>,
    #[serde(rename = "UF_CRM_67FF84E2ECBF3", default, deserialize_with = "lenient_f64")]
    pub vat: Option<f64>,
}

impl Deal {
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.as_deref() == Some("Y")
    }

    #[must_use]
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.date_create.as_deref().and_then(parse_bitrix_datetime)
    }

    #[must_use]
    pub fn closed_at(&self) -> Option<NaiveDateTime> {
        self.close_date.as_deref().and_then(parse_bitrix_datetime)
    }

    /// Deal type as an integer code; blanks count as 0.
    #[must_use]
    pub fn deal_type_code(&self) -> i64 {
        self.deal_type
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or_default()
    }

    /// Project enum id, when set.
    #[must_use]
    pub fn project_code(&self) -> Option<i64> {
        self.project.as_deref().and_then(|raw| raw.trim().parse::<i64>().ok())
    }
}

/// An employee (`user.get`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "ID", deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(rename = "NAME", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "LAST_NAME", default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(rename = "WORK_POSITION", default, deserialize_with = "lenient_string")]
    pub work_position: Option<String>,
    #[serde(rename = "UF_DEPARTMENT", default, deserialize_with = "lenient_id_list")]
    pub departments: Vec<u64>,
    #[serde(rename = "UF_EMPLOYMENT_DATE", default, deserialize_with = "lenient_string")]
    pub employment_date: Option<String>,
}

impl Employee {
    /// `NAME LAST_NAME`, trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    #[must_use]
    pub fn belongs_to(&self, department_id: u64) -> bool {
        self.departments.contains(&department_id)
    }
}

/// A department (`department.get`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "ID", deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(rename = "NAME", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Employee id of the department head.
    #[serde(rename = "UF_HEAD", default, deserialize_with = "lenient_opt_id")]
    pub head_id: Option<u64>,
}
