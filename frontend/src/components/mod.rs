pub mod data_table;
pub mod filter_bar;
pub mod kpi;
pub mod layout;
pub mod pagination;
pub mod status_badge;

pub use data_table::{Column, DataTable};
pub use filter_bar::{FilterBar, use_filters};
pub use kpi::{KpiCard, RevenueChart};
pub use layout::{Layout, Route};
pub use pagination::{Pagination, page_range};
pub use status_badge::StatusBadge;
