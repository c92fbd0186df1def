use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::tenure::months_working;
use super::{BonusCalculator, CommissionCalculator, TierClassifier};
use crate::core::{AppError, Result};
use crate::modules::commissions::models::{CommissionStatus, SaleCommission, SaleInput, Tier};

/// One representative's sales for a month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummaryInput {
    #[serde(default)]
    pub representative_id: Option<String>,

    /// Tenure in whole months. Takes precedence over `joined_on`.
    #[serde(default)]
    pub months_working: Option<u32>,

    /// Account start date, used when `months_working` is not supplied
    #[serde(default)]
    pub joined_on: Option<NaiveDate>,

    /// Reference date for tenure; defaults to today (UTC)
    #[serde(default)]
    pub as_of: Option<NaiveDate>,

    #[serde(default)]
    pub sales: Vec<SaleInput>,
}

impl MonthlySummaryInput {
    /// Resolve tenure from the explicit count or the join date
    pub fn resolve_months_working(&self) -> Result<u32> {
        if let Some(months) = self.months_working {
            return Ok(months);
        }

        let joined_on = self
            .joined_on
            .ok_or_else(|| AppError::validation("months_working or joined_on is required"))?;
        let as_of = self.as_of.unwrap_or_else(|| Utc::now().date_naive());

        Ok(months_working(joined_on, as_of))
    }
}

/// Month-level commission totals for one representative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCommissionSummary {
    pub representative_id: Option<String>,
    pub months_working: u32,
    /// Every sale submitted for the month, whatever its status
    pub monthly_sales_count: u32,
    pub tier: Tier,
    pub eligible_count: u32,
    pub pending_count: u32,
    pub not_eligible_count: u32,
    /// Sum of per-sale totals; withheld sales contribute nothing
    pub sales_commission_total: Decimal,
    pub bonus_commission: Decimal,
    /// `sales_commission_total + bonus_commission`
    pub total_commission: Decimal,
    pub sales: Vec<SaleCommission>,
}

/// Aggregates a month of sales into tier, bonus and totals
///
/// This is the caller-side aggregation the per-sale calculator leaves out:
/// bonus is only added here, never inside a sale's breakdown.
#[derive(Debug, Clone)]
pub struct MonthlySummaryService {
    commission: CommissionCalculator,
    bonus: BonusCalculator,
    classifier: TierClassifier,
}

impl MonthlySummaryService {
    pub fn new(
        commission: CommissionCalculator,
        bonus: BonusCalculator,
        classifier: TierClassifier,
    ) -> Self {
        Self {
            commission,
            bonus,
            classifier,
        }
    }

    pub fn summarize(&self, input: &MonthlySummaryInput) -> Result<MonthlyCommissionSummary> {
        let months_working = input.resolve_months_working()?;
        let monthly_sales_count = u32::try_from(input.sales.len())
            .map_err(|_| AppError::validation("Too many sales in one month"))?;

        let sales: Vec<SaleCommission> = input
            .sales
            .iter()
            .map(|sale| self.commission.calculate_sale_commission(sale))
            .collect();

        let count_of = |status: CommissionStatus| {
            sales.iter().filter(|sale| sale.status == status).count() as u32
        };
        let eligible_count = count_of(CommissionStatus::Eligible);
        let pending_count = count_of(CommissionStatus::PendingApproval);
        let not_eligible_count = count_of(CommissionStatus::NotEligible);

        let sales_commission_total: Decimal = sales
            .iter()
            .map(|sale| sale.breakdown.total_commission)
            .sum();

        let tier = self.classifier.classify(monthly_sales_count, months_working);
        let bonus_commission = self.bonus.calculate_bonus_commission(tier, monthly_sales_count);
        let total_commission = sales_commission_total + bonus_commission;

        info!(
            representative_id = ?input.representative_id,
            monthly_sales_count,
            eligible_count,
            tier = %tier,
            total = %total_commission,
            "Generated monthly commission summary"
        );

        Ok(MonthlyCommissionSummary {
            representative_id: input.representative_id.clone(),
            months_working,
            monthly_sales_count,
            tier,
            eligible_count,
            pending_count,
            not_eligible_count,
            sales_commission_total,
            bonus_commission,
            total_commission,
            sales,
        })
    }
}
