//! Yearly dashboard: developer stats, deal-type mix and developer shares

use std::collections::HashMap;

use chrono::Datelike;
use dealboard_domain::constants::{
    DEAL_TYPE_OFF_PLAN, DEAL_TYPE_RENTAL, DEAL_TYPE_SECONDARY, UNKNOWN_DEVELOPER,
};
use dealboard_domain::utils::dates::month_name;
use dealboard_domain::{
    DashboardReport, Deal, DealTypeDistribution, DeveloperMonthStats, DeveloperShare,
};

use super::round2;

/// Build the dashboard over deals created in `year`.
///
/// Deals without a parsable creation date, or created in another year, are
/// ignored by all three sections.
#[must_use]
pub fn build_dashboard(deals: &[Deal], year: i32) -> DashboardReport {
    let in_year: Vec<(u32, &Deal)> = deals
        .iter()
        .filter_map(|deal| {
            let created = deal.created_at()?;
            (created.year() == year).then_some((created.month(), deal))
        })
        .collect();

    DashboardReport {
        developer_stats: developer_stats(&in_year),
        deal_type_distribution: deal_type_distribution(in_year.iter().map(|(_, deal)| *deal)),
        developer_property_price_distribution: developer_shares(
            in_year.iter().map(|(_, deal)| *deal),
        ),
    }
}

fn developer_of(deal: &Deal) -> &str {
    match deal.developer.as_deref() {
        Some(developer) if !developer.is_empty() => developer,
        _ => UNKNOWN_DEVELOPER,
    }
}

fn developer_stats(deals: &[(u32, &Deal)]) -> Vec<DeveloperMonthStats> {
    let mut rows: Vec<DeveloperMonthStats> = Vec::new();
    let mut index: HashMap<(u32, String), usize> = HashMap::new();

    for (month, deal) in deals {
        let developer = developer_of(deal);
        let slot = *index.entry((*month, developer.to_string())).or_insert_with(|| {
            rows.push(DeveloperMonthStats {
                month: month_name(*month).to_string(),
                month_number: *month,
                developer: developer.to_string(),
                closed_deals: 0,
                property_price: 0.0,
                total_commission: 0.0,
                agent_commission: 0.0,
            });
            rows.len() - 1
        });

        if deal.is_closed() {
            let row = &mut rows[slot];
            row.closed_deals += 1;
            row.property_price += deal.opportunity.unwrap_or_default();
            row.total_commission += deal.total_commission.unwrap_or_default();
            row.agent_commission += deal.agent_commission.unwrap_or_default();
        }
    }

    // Rows are grouped by month in the order months were first seen.
    let mut month_order: Vec<u32> = Vec::new();
    for row in &rows {
        if !month_order.contains(&row.month_number) {
            month_order.push(row.month_number);
        }
    }
    let mut grouped = Vec::with_capacity(rows.len());
    for month in month_order {
        grouped.extend(rows.iter().filter(|row| row.month_number == month).cloned());
    }
    grouped
}

fn deal_type_distribution<'a>(deals: impl Iterator<Item = &'a Deal>) -> DealTypeDistribution {
    let mut distribution = DealTypeDistribution::default();
    for deal in deals {
        match deal.deal_type_code() {
            DEAL_TYPE_OFF_PLAN => distribution.off_plan += 1,
            DEAL_TYPE_SECONDARY => distribution.secondary += 1,
            DEAL_TYPE_RENTAL => distribution.rental += 1,
            _ => distribution.unknown += 1,
        }
    }
    distribution
}

fn developer_shares<'a>(deals: impl Iterator<Item = &'a Deal>) -> Vec<DeveloperShare> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut grand_total = 0.0;

    for deal in deals {
        let developer = developer_of(deal);
        let price = deal.opportunity.unwrap_or_default();
        match totals.iter_mut().find(|(name, _)| name == developer) {
            Some((_, total)) => *total += price,
            None => totals.push((developer.to_string(), price)),
        }
        grand_total += price;
    }

    totals
        .into_iter()
        .map(|(developer, property_price)| DeveloperShare {
            percentage: if grand_total > 0.0 {
                round2(property_price / grand_total * 100.0)
            } else {
                0.0
            },
            developer,
            property_price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    fn deal(id: u64, created: &str, developer: Option<&str>, price: f64, closed: bool) -> Deal {
        Deal {
            id,
            date_create: Some(created.to_string()),
            developer: developer.map(str::to_string),
            opportunity: Some(price),
            closed: Some(if closed { "Y" } else { "N" }.into()),
            total_commission: Some(price / 50.0),
            agent_commission: Some(price / 100.0),
            ..Deal::default()
        }
    }

    #[test]
    fn open_deals_create_rows_but_add_nothing() {
        let deals = vec![
            deal(1, "2025-03-01T10:00:00+04:00", Some("88"), 1_000.0, false),
            deal(2, "2025-03-05T10:00:00+04:00", Some("88"), 2_000.0, true),
            deal(3, "2025-03-07T10:00:00+04:00", None, 500.0, false),
        ];

        let report = build_dashboard(&deals, 2025);
        assert_eq!(report.developer_stats.len(), 2);

        let first = &report.developer_stats[0];
        assert_eq!(first.month, "March");
        assert_eq!(first.developer, "88");
        assert_eq!(first.closed_deals, 1);
        assert!((first.property_price - 2_000.0).abs() < f64::EPSILON);
        assert!((first.total_commission - 40.0).abs() < f64::EPSILON);

        let unknown = &report.developer_stats[1];
        assert_eq!(unknown.developer, UNKNOWN_DEVELOPER);
        assert_eq!(unknown.closed_deals, 0);
        assert!(unknown.property_price.abs() < f64::EPSILON);
    }

    #[test]
    fn rows_group_by_month_in_first_seen_order() {
        let deals = vec![
            deal(1, "2025-05-01T10:00:00+04:00", Some("A"), 1.0, true),
            deal(2, "2025-02-01T10:00:00+04:00", Some("B"), 1.0, true),
            deal(3, "2025-05-02T10:00:00+04:00", Some("B"), 1.0, true),
        ];

        let report = build_dashboard(&deals, 2025);
        let keys: Vec<_> = report
            .developer_stats
            .iter()
            .map(|row| (row.month.as_str(), row.developer.as_str()))
            .collect();
        assert_eq!(keys, [("May", "A"), ("May", "B"), ("February", "B")]);
    }

    #[test]
    fn classifies_deal_types() {
        let mut deals: Vec<Deal> = ["4694", "4695", "4696", "4696", "", "17"]
            .iter()
            .enumerate()
            .map(|(idx, code)| Deal {
                deal_type: Some((*code).to_string()),
                ..deal(idx as u64, "2025-01-10", Some("A"), 1.0, true)
            })
            .collect();
        deals.push(Deal { deal_type: None, ..deal(99, "2025-01-10", Some("A"), 1.0, true) });

        let report = build_dashboard(&deals, 2025);
        assert_eq!(
            serde_json::to_value(report.deal_type_distribution).unwrap(),
            json!({ "Off-Plan": 1, "Secondary": 1, "Rental": 2, "Unknown": 3 })
        );
    }

    #[test]
    fn shares_are_percentages_of_grand_total() {
        let deals = vec![
            deal(1, "2025-01-10", Some("A"), 200.0, true),
            deal(2, "2025-02-10", Some("B"), 100.0, false),
            deal(3, "2025-02-11", Some("A"), 100.0, true),
        ];

        let shares = build_dashboard(&deals, 2025).developer_property_price_distribution;
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].developer, "A");
        assert!((shares[0].property_price - 300.0).abs() < f64::EPSILON);
        assert!((shares[0].percentage - 75.0).abs() < f64::EPSILON);
        assert!((shares[1].percentage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ignores_deals_outside_the_year() {
        let deals = vec![
            deal(1, "2024-12-31T23:00:00+04:00", Some("A"), 10.0, true),
            deal(2, "garbage", Some("A"), 10.0, true),
        ];

        let report = build_dashboard(&deals, 2025);
        assert!(report.developer_stats.is_empty());
        assert_eq!(report.deal_type_distribution.total(), 0);
        assert!(report.developer_property_price_distribution.is_empty());
    }

    proptest! {
        #[test]
        fn zero_grand_total_gives_zero_percentages(developers in prop::collection::vec("[A-D]", 1..20)) {
            let deals: Vec<Deal> = developers
                .iter()
                .enumerate()
                .map(|(idx, developer)| deal(idx as u64, "2025-06-01", Some(developer), 0.0, true))
                .collect();

            let report = build_dashboard(&deals, 2025);
            prop_assert!(!report.developer_property_price_distribution.is_empty());
            for share in &report.developer_property_price_distribution {
                prop_assert!(share.percentage.abs() < f64::EPSILON);
            }
            prop_assert_eq!(report.clone(), build_dashboard(&deals, 2025));
        }
    }
}
