pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CommissionBreakdown, CommissionRates, SaleCommission, SaleInput, Tier};
pub use services::CommissionEngine;
