pub mod client_detail;
mod client_tabs;
pub mod clients;
pub mod dashboard;
pub mod orders;
