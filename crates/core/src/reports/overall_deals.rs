//! Flat table of the most recent deals

use dealboard_domain::lookups::lead_source_label;
use dealboard_domain::{Deal, DealRow, Employee};

use super::names_by_id;

/// One row per deal, in input order, at most `limit` rows.
///
/// Enum-valued fields (deal type, project, developer) are passed through as
/// their raw codes; the frontend owns those labels.
#[must_use]
pub fn build_overall_deals(deals: &[Deal], employees: &[Employee], limit: usize) -> Vec<DealRow> {
    let names = names_by_id(employees);

    deals
        .iter()
        .take(limit)
        .map(|deal| {
            let text = |value: &Option<String>| value.clone().unwrap_or_default();
            let gross = deal.total_commission.unwrap_or_default();

            DealRow {
                date: deal
                    .created_at()
                    .map(|created| created.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                deal_type: text(&deal.deal_type),
                project_name: text(&deal.project),
                unit_no: text(&deal.unit_no),
                developer_name: text(&deal.developer),
                property_type: text(&deal.property_type),
                no_of_br: deal.bedrooms.unwrap_or_default(),
                client_name: text(&deal.client_name),
                agent_name: deal
                    .assigned_by_id
                    .and_then(|id| names.get(&id).cloned())
                    .unwrap_or_default(),
                property_price: deal.property_price.unwrap_or_default(),
                gross_commission_incl_vat: gross,
                gross_commission: gross,
                vat: deal.vat.unwrap_or_default(),
                agent_commission: deal.agent_commission.unwrap_or_default(),
                lead_source: lead_source_label(deal.source_id.as_deref()).to_string(),
            }
        })
        .collect()
}
