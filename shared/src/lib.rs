//! Core of the clientdesk dashboard: record types, display formatting,
//! client-side filtering and the derived state the table views render from.
//!
//! Everything here is pure and framework independent so it can be exercised
//! with plain `cargo test` outside the browser.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod sequence;
pub mod status;
pub mod view_state;

pub use aggregate::{MonthlyTotal, OrderKpis, most_recent, monthly_revenue, top_clients_by_balance, top_n};
pub use error::FormatError;
pub use filter::{FilterCriteria, Filterable, MATCH_ALL, Selector, distinct_values, filter_records};
pub use format::{
    PLACEHOLDER, format_amount_or_placeholder, format_count, format_currency, format_date,
    format_date_time, format_optional, initials, normalize_no_dice,
};
pub use models::*;
pub use sequence::{RequestSequence, RequestTicket};
pub use status::{Tone, is_pending, status_tone};
pub use view_state::ViewState;
