//! Dashboard aggregation over already-fetched collections.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{month_abbrev, parse_timestamp};
use crate::models::{Client, Order, Record};
use crate::status::is_pending;

/// The `n` records with the largest `key`, missing keys counting as zero.
///
/// Ties keep their original relative order.
pub fn top_n<'a, T, F>(records: &'a [T], key: F, n: usize) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<Decimal>,
{
    let mut ranked: Vec<(Decimal, &T)> = records
        .iter()
        .map(|record| (key(record).unwrap_or(Decimal::ZERO), record))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().take(n).map(|(_, record)| record).collect()
}

pub fn top_clients_by_balance(clients: &[Client], n: usize) -> Vec<&Client> {
    top_n(clients, |c| c.balance, n)
}

/// Newest records first; undated or unparsable timestamps sort last.
pub fn most_recent(records: &[Record], n: usize) -> Vec<&Record> {
    let mut dated: Vec<(Option<NaiveDateTime>, &Record)> = records
        .iter()
        .map(|record| (record.timestamp().and_then(|ts| parse_timestamp(ts).ok()), record))
        .collect();

    dated.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    dated.into_iter().take(n).map(|(_, record)| record).collect()
}

/// Headline numbers for a set of orders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderKpis {
    pub order_count: usize,
    pub revenue: Decimal,
    pub average_order_value: Decimal,
    pub pending_count: usize,
}

impl OrderKpis {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut revenue = Decimal::ZERO;
        let mut order_count = 0usize;
        let mut pending_count = 0usize;

        for order in orders {
            order_count += 1;
            revenue += order.total.unwrap_or_default();
            if order.status.as_deref().is_some_and(is_pending) {
                pending_count += 1;
            }
        }

        let average_order_value = if order_count == 0 {
            Decimal::ZERO
        } else {
            (revenue / Decimal::from(order_count)).round_dp(2)
        };

        Self {
            order_count,
            revenue,
            average_order_value,
            pending_count,
        }
    }
}

/// Order revenue for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// `YYYY-MM`, sortable.
    pub month: String,
    /// Short display label, e.g. `ene 2024`.
    pub label: String,
    pub total: Decimal,
}

/// Revenue per month in chronological order. Orders without a usable
/// timestamp are left out.
pub fn monthly_revenue(orders: &[Order]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();

    for order in orders {
        let Some(ts) = order
            .created_at
            .as_deref()
            .and_then(|raw| parse_timestamp(raw).ok())
        else {
            continue;
        };
        *buckets.entry((ts.year(), ts.month())).or_default() += order.total.unwrap_or_default();
    }

    buckets
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal {
            month: format!("{year:04}-{month:02}"),
            label: format!("{} {year}", month_abbrev(month)),
            total,
        })
        .collect()
}
