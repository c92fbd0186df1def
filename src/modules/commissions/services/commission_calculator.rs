use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::commissions::models::{
    CommissionBreakdown, CommissionRates, CommissionStatus, IneligibilityReason, PaymentStatus,
    SaleCommission, SaleInput, SaleType,
};

/// Per-sale commission calculator
///
/// Decides whether a sale's commission is payable and, when it is, splits it
/// into upfront, activation and package components. Pure: the same sale and
/// rate table always give the same result.
#[derive(Debug, Clone)]
pub struct CommissionCalculator {
    rates: Arc<CommissionRates>,
}

impl CommissionCalculator {
    pub fn new(rates: Arc<CommissionRates>) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &CommissionRates {
        &self.rates
    }

    /// Calculate the commission for one sale
    ///
    /// Non-eligible and pending sales carry a reason and an all-zero
    /// breakdown. `stock_id` is not consulted.
    pub fn calculate_sale_commission(&self, sale: &SaleInput) -> SaleCommission {
        let result = match self.check_eligibility(sale) {
            Ok(()) => SaleCommission::eligible(sale.sale_id.clone(), self.breakdown_for(sale)),
            Err((status, reason)) => SaleCommission::withheld(sale.sale_id.clone(), status, reason),
        };

        debug!(
            sale_id = %sale.sale_id,
            sale_type = %sale.sale_type,
            status = %result.status,
            total = %result.breakdown.total_commission,
            "Calculated sale commission"
        );

        result
    }

    /// Eligibility ladder. DVS sales only need admin approval; every other
    /// type is checked for payment first, then approval, then package.
    fn check_eligibility(
        &self,
        sale: &SaleInput,
    ) -> Result<(), (CommissionStatus, IneligibilityReason)> {
        if sale.sale_type == SaleType::DigitalVirtualStock {
            return Self::check_approval(sale.admin_approved);
        }

        if sale.payment_status == PaymentStatus::Unpaid {
            return Err((
                CommissionStatus::NotEligible,
                IneligibilityReason::StockUnpaid,
            ));
        }

        Self::check_approval(sale.admin_approved)?;

        if sale.package().is_none() {
            return Err((CommissionStatus::NotEligible, IneligibilityReason::NoPackage));
        }

        Ok(())
    }

    fn check_approval(
        admin_approved: Option<bool>,
    ) -> Result<(), (CommissionStatus, IneligibilityReason)> {
        match admin_approved {
            None => Err((
                CommissionStatus::PendingApproval,
                IneligibilityReason::AwaitingApproval,
            )),
            Some(false) => Err((
                CommissionStatus::NotEligible,
                IneligibilityReason::AdminRejected,
            )),
            Some(true) => Ok(()),
        }
    }

    fn breakdown_for(&self, sale: &SaleInput) -> CommissionBreakdown {
        let upfront = self.rates.upfront_for(sale.sale_type);
        let package = sale
            .package()
            .map(|package| self.rates.package_rate(&package))
            .unwrap_or(Decimal::ZERO);

        CommissionBreakdown::new(upfront, self.rates.activation, package)
    }
}

impl Default for CommissionCalculator {
    fn default() -> Self {
        Self::new(Arc::new(CommissionRates::default()))
    }
}
