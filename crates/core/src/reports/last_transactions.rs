//! Latest closed deal per sales employee

use std::collections::HashMap;

use chrono::NaiveDate;
use dealboard_domain::lookups::project_name;
use dealboard_domain::utils::dates::whole_months_between;
use dealboard_domain::{Deal, Employee, LastTransaction};

/// One row per employee with at least one deal, in employee order.
///
/// The row describes the deal with the latest close date. Deals whose close
/// date is missing or unparsable rank below every dated deal; among equal
/// dates the first deal wins.
#[must_use]
pub fn build_last_transactions(
    deals: &[Deal],
    employees: &[Employee],
    today: NaiveDate,
) -> Vec<LastTransaction> {
    let mut by_assignee: HashMap<u64, Vec<&Deal>> = HashMap::new();
    for deal in deals {
        if let Some(assignee) = deal.assigned_by_id {
            by_assignee.entry(assignee).or_default().push(deal);
        }
    }

    employees
        .iter()
        .filter_map(|employee| {
            let deals = by_assignee.get(&employee.id)?;
            let latest = latest_closed(deals)?;
            Some(transaction_row(employee, latest, today))
        })
        .collect()
}

fn latest_closed<'a>(deals: &[&'a Deal]) -> Option<&'a Deal> {
    let mut best: Option<(&Deal, Option<chrono::NaiveDateTime>)> = None;
    for &deal in deals {
        let closed_at = deal.closed_at();
        match best {
            // `None < Some(_)`, so undated deals only win when nothing is dated.
            Some((_, best_at)) if closed_at <= best_at => {}
            _ => best = Some((deal, closed_at)),
        }
    }
    best.map(|(deal, _)| deal)
}

fn transaction_row(employee: &Employee, deal: &Deal, today: NaiveDate) -> LastTransaction {
    let amount = deal.opportunity.unwrap_or_default();
    let percent = deal.commission_percent.unwrap_or_default();

    LastTransaction {
        agent: employee.full_name(),
        joining_date: employee.employment_date.clone(),
        last_deal_date: deal.close_date.clone(),
        project: project_name(deal.project_code()).to_string(),
        amount,
        gross_comms: amount * percent / 100.0,
        months_without_closing: deal
            .closed_at()
            .map_or(0, |closed| whole_months_between(closed.date(), today)),
    }
}
