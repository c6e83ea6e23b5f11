use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::timeline::TimelinePeriod;
use crate::domain::transaction::TransactionRecord;

/// Resamples the baseline and modified transaction tables onto one shared
/// monthly axis. Each table's costs are summed per calendar month (keyed by
/// the last day of the month); the axis runs from the earliest to the latest
/// month across both tables with zero-filled gaps. Two empty inputs yield an
/// empty timeline.
pub fn align_timelines(
    baseline: &[TransactionRecord],
    modified: &[TransactionRecord],
) -> Vec<TimelinePeriod> {
    let baseline_totals = monthly_totals(baseline);
    let modified_totals = monthly_totals(modified);

    let first = [baseline_totals.keys().next(), modified_totals.keys().next()]
        .into_iter()
        .flatten()
        .min()
        .copied();
    let Some(first) = first else {
        return Vec::new();
    };
    let last = [
        baseline_totals.keys().next_back(),
        modified_totals.keys().next_back(),
    ]
    .into_iter()
    .flatten()
    .max()
    .copied()
    .unwrap_or(first);

    let mut periods = Vec::new();
    let mut period_end = first;
    loop {
        periods.push(TimelinePeriod {
            period_end,
            baseline_cost: baseline_totals.get(&period_end).copied().unwrap_or(0.0),
            modified_cost: modified_totals.get(&period_end).copied().unwrap_or(0.0),
        });
        if period_end == last {
            break;
        }
        period_end = month_end(period_end + Duration::days(1));
    }
    periods
}

fn monthly_totals(records: &[TransactionRecord]) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(month_end(record.date)).or_insert(0.0) += record.cost;
    }
    totals
}

/// Last day of the month containing `date`.
fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is a valid date")
        - Duration::days(1)
}
