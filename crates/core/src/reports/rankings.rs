//! Monthly agent rankings by gross commission

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use dealboard_domain::constants::{MONTH_ABBREVIATIONS, UNKNOWN_AGENT};
use dealboard_domain::{AgentRankings, Deal, Employee, MonthRanking, RankedAgent};

use super::names_by_id;

/// Rank agents per month of `today`'s year, January through `today`'s month.
///
/// Only closed deals created in that window count. Each month keeps the
/// `top_n` agents by summed ranking commission, descending; ties keep the
/// order in which agents were first seen.
#[must_use]
pub fn build_agent_rankings(
    deals: &[Deal],
    employees: &[Employee],
    today: NaiveDate,
    top_n: usize,
) -> AgentRankings {
    let names = names_by_id(employees);
    let current_month = today.month() as usize;

    // Per month: agent totals in first-seen order plus an index into them.
    let mut buckets: Vec<(Vec<(Option<u64>, f64)>, HashMap<Option<u64>, usize>)> =
        vec![(Vec::new(), HashMap::new()); current_month];

    for deal in deals.iter().filter(|deal| deal.is_closed()) {
        let Some(created) = deal.created_at() else {
            continue;
        };
        if created.year() != today.year() {
            continue;
        }
        let month = created.month() as usize;
        if month > current_month {
            continue;
        }

        let (totals, index) = &mut buckets[month - 1];
        let commission = deal.ranking_commission.unwrap_or_default();
        let slot = *index.entry(deal.assigned_by_id).or_insert_with(|| {
            totals.push((deal.assigned_by_id, 0.0));
            totals.len() - 1
        });
        totals[slot].1 += commission;
    }

    let months = buckets
        .into_iter()
        .enumerate()
        .map(|(idx, (mut totals, _))| {
            // `sort_by` is stable, so equal totals keep first-seen order.
            totals.sort_by(|a, b| b.1.total_cmp(&a.1));
            totals.truncate(top_n);
            MonthRanking {
                month: MONTH_ABBREVIATIONS[idx],
                agents: totals
                    .into_iter()
                    .map(|(assignee, gross_commission)| RankedAgent {
                        agent: assignee
                            .and_then(|id| names.get(&id).cloned())
                            .unwrap_or_else(|| UNKNOWN_AGENT.to_string()),
                        gross_commission,
                    })
                    .collect(),
            }
        })
        .collect();

    AgentRankings { months }
}
