pub mod bonus_calculator;
pub mod commission_calculator;
pub mod engine;
pub mod monthly_summary;
pub mod tenure;
pub mod tier_classifier;

pub use bonus_calculator::BonusCalculator;
pub use commission_calculator::CommissionCalculator;
pub use engine::CommissionEngine;
pub use monthly_summary::{MonthlyCommissionSummary, MonthlySummaryInput, MonthlySummaryService};
pub use tenure::months_working;
pub use tier_classifier::{TierClassifier, TierRule, DEFAULT_TIER_LADDER};
