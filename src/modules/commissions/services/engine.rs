use std::sync::Arc;

use rust_decimal::Decimal;

use super::monthly_summary::{MonthlyCommissionSummary, MonthlySummaryInput, MonthlySummaryService};
use super::{BonusCalculator, CommissionCalculator, TierClassifier};
use crate::core::Result;
use crate::modules::commissions::models::{CommissionRates, SaleCommission, SaleInput, Tier};

/// Entry point bundling every commission operation over one rate table
///
/// Cheap to clone; the rate table is shared. Built once at startup and handed
/// to request handlers.
#[derive(Debug, Clone)]
pub struct CommissionEngine {
    rates: Arc<CommissionRates>,
    commission: CommissionCalculator,
    bonus: BonusCalculator,
    classifier: TierClassifier,
}

impl CommissionEngine {
    pub fn new(rates: CommissionRates) -> Self {
        Self::with_classifier(rates, TierClassifier::default())
    }

    pub fn with_classifier(rates: CommissionRates, classifier: TierClassifier) -> Self {
        let rates = Arc::new(rates);
        Self {
            commission: CommissionCalculator::new(Arc::clone(&rates)),
            bonus: BonusCalculator::new(Arc::clone(&rates)),
            classifier,
            rates,
        }
    }

    pub fn rates(&self) -> &CommissionRates {
        &self.rates
    }

    pub fn calculate_sale_commission(&self, sale: &SaleInput) -> SaleCommission {
        self.commission.calculate_sale_commission(sale)
    }

    pub fn calculate_bonus_commission(&self, tier: Tier, monthly_sales_count: u32) -> Decimal {
        self.bonus.calculate_bonus_commission(tier, monthly_sales_count)
    }

    /// DSR tier for the month
    pub fn dsr_tier(&self, monthly_sales_count: u32, months_working: u32) -> Tier {
        self.classifier.classify(monthly_sales_count, months_working)
    }

    pub fn monthly_summary(&self, input: &MonthlySummaryInput) -> Result<MonthlyCommissionSummary> {
        MonthlySummaryService::new(
            self.commission.clone(),
            self.bonus.clone(),
            self.classifier.clone(),
        )
        .summarize(input)
    }
}

impl Default for CommissionEngine {
    fn default() -> Self {
        Self::new(CommissionRates::default())
    }
}
