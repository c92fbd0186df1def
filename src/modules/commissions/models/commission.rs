use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a sale's commission is payable right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionStatus {
    Eligible,
    PendingApproval,
    NotEligible,
}

impl fmt::Display for CommissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommissionStatus::Eligible => write!(f, "eligible"),
            CommissionStatus::PendingApproval => write!(f, "pending_approval"),
            CommissionStatus::NotEligible => write!(f, "not_eligible"),
        }
    }
}

/// Business reason a sale is not (yet) eligible
///
/// Serialized as the human-readable message shown on the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IneligibilityReason {
    #[serde(rename = "Awaiting admin approval")]
    AwaitingApproval,

    #[serde(rename = "Admin rejected")]
    AdminRejected,

    #[serde(rename = "Stock unpaid")]
    StockUnpaid,

    #[serde(rename = "No package selected")]
    NoPackage,
}

impl IneligibilityReason {
    pub fn message(&self) -> &'static str {
        match self {
            IneligibilityReason::AwaitingApproval => "Awaiting admin approval",
            IneligibilityReason::AdminRejected => "Admin rejected",
            IneligibilityReason::StockUnpaid => "Stock unpaid",
            IneligibilityReason::NoPackage => "No package selected",
        }
    }
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Monetary split of one sale's commission
///
/// `total_commission` is always `upfront + activation + package`. The bonus
/// column exists for reporting but is earned monthly, so per-sale results
/// leave it at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    pub upfront_commission: Decimal,
    pub activation_commission: Decimal,
    pub package_commission: Decimal,
    pub bonus_commission: Decimal,
    pub total_commission: Decimal,
}

impl CommissionBreakdown {
    /// Breakdown for a sale that earns nothing
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(upfront: Decimal, activation: Decimal, package: Decimal) -> Self {
        Self {
            upfront_commission: upfront,
            activation_commission: activation,
            package_commission: package,
            bonus_commission: Decimal::ZERO,
            total_commission: upfront + activation + package,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.upfront_commission.is_zero()
            && self.activation_commission.is_zero()
            && self.package_commission.is_zero()
            && self.bonus_commission.is_zero()
            && self.total_commission.is_zero()
    }
}

/// Commission outcome for a single sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleCommission {
    pub sale_id: String,
    pub status: CommissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<IneligibilityReason>,
    pub breakdown: CommissionBreakdown,
}

impl SaleCommission {
    pub fn eligible(sale_id: impl Into<String>, breakdown: CommissionBreakdown) -> Self {
        Self {
            sale_id: sale_id.into(),
            status: CommissionStatus::Eligible,
            reason: None,
            breakdown,
        }
    }

    pub fn withheld(
        sale_id: impl Into<String>,
        status: CommissionStatus,
        reason: IneligibilityReason,
    ) -> Self {
        Self {
            sale_id: sale_id.into(),
            status,
            reason: Some(reason),
            breakdown: CommissionBreakdown::zero(),
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.status == CommissionStatus::Eligible
    }
}
