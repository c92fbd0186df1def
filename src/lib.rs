//! SalesOps Commission Engine
//!
//! Commission, bonus and tier rules for distributor sales teams, plus the
//! small HTTP service the dashboards call them through.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::commissions;
pub use modules::commissions::{CommissionEngine, CommissionRates};
