use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::commissions::models::{CommissionRates, Tier};

/// Monthly bonus lookup over the ordered band table
#[derive(Debug, Clone)]
pub struct BonusCalculator {
    rates: Arc<CommissionRates>,
}

impl BonusCalculator {
    pub fn new(rates: Arc<CommissionRates>) -> Self {
        Self { rates }
    }

    /// Flat bonus for `tier` at `monthly_sales_count` sales
    ///
    /// Bands are scanned in declaration order and the first one whose tier
    /// and inclusive range match wins. No match pays nothing.
    pub fn calculate_bonus_commission(&self, tier: Tier, monthly_sales_count: u32) -> Decimal {
        let bonus = self
            .rates
            .bonus_bands
            .iter()
            .find(|band| band.matches(tier, monthly_sales_count))
            .map(|band| band.bonus_amount)
            .unwrap_or(Decimal::ZERO);

        debug!(
            tier = %tier,
            monthly_sales_count,
            bonus = %bonus,
            "Calculated bonus commission"
        );

        bonus
    }
}

impl Default for BonusCalculator {
    fn default() -> Self {
        Self::new(Arc::new(CommissionRates::default()))
    }
}
