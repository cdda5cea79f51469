//! Miami-Dade traffic-incident study, served as a sidebar-navigated report.

pub mod config;
pub mod navigation;
pub mod page;
pub mod report;
pub mod routes;
pub mod state;
