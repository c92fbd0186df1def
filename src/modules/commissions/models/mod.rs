pub mod commission;
pub mod rate_table;
pub mod sale;
pub mod tier;

pub use commission::{CommissionBreakdown, CommissionStatus, IneligibilityReason, SaleCommission};
pub use rate_table::{BonusBand, CommissionRates, PackageRate, UpfrontRates};
pub use sale::{Package, PaymentStatus, SaleInput, SaleType};
pub use tier::Tier;
