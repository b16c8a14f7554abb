//! The fixed display format used by the form and the history table

use crate::core::invoice::Invoice;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

/// Symbol used when no configuration overrides it
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₪";

/// `symbol` followed by `value` with two decimals, e.g. `₪1250.00`
pub fn format_amount(value: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, value)
}

/// Day-first date without padding, e.g. `7.3.2025`, taken in the
/// timestamp's own zone.
///
/// A `DateTime<Utc>` therefore shows the UTC calendar day; use
/// [`format_local_date`] for the day on the user's clock.
pub fn format_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    timestamp.format("%-d.%-m.%Y").to_string()
}

/// [`format_date`] after converting to the system's local zone
pub fn format_local_date(timestamp: &DateTime<Utc>) -> String {
    format_date(&timestamp.with_timezone(&Local))
}

/// Persisted invoices ordered for the history table: highest number first.
///
/// The sort is stable, so invoices sharing a number keep their stored order.
pub fn history_order(invoices: &[Invoice]) -> Vec<&Invoice> {
    let mut rows: Vec<&Invoice> = invoices.iter().collect();
    rows.sort_by(|a, b| b.invoice_number.cmp(&a.invoice_number));
    rows
}
