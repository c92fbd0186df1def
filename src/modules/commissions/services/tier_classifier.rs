use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::modules::commissions::models::Tier;

/// One rung of the tier ladder: reps meeting both minimums get `tier`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRule {
    pub min_sales: u32,
    pub min_months_working: u32,
    pub tier: Tier,
}

impl TierRule {
    pub const fn new(min_sales: u32, min_months_working: u32, tier: Tier) -> Self {
        Self {
            min_sales,
            min_months_working,
            tier,
        }
    }

    pub fn matches(&self, monthly_sales_count: u32, months_working: u32) -> bool {
        monthly_sales_count >= self.min_sales && months_working >= self.min_months_working
    }
}

/// Ladder the dashboards classify DSRs with. Evaluated top-down; the rungs
/// overlap, so order is significant. The duplicated DHAHABU and SHABA rungs
/// are intentional.
pub const DEFAULT_TIER_LADDER: [TierRule; 8] = [
    TierRule::new(20, 6, Tier::Tanzanite),
    TierRule::new(25, 0, Tier::Dhahabu),
    TierRule::new(20, 0, Tier::Dhahabu),
    TierRule::new(15, 0, Tier::Fedha),
    TierRule::new(10, 0, Tier::Shaba),
    TierRule::new(5, 0, Tier::Shaba),
    // more than one month on the job
    TierRule::new(0, 2, Tier::Chuma),
    TierRule::new(0, 0, Tier::Kuruta),
];

/// Classifies a representative from monthly sales volume and tenure
#[derive(Debug, Clone)]
pub struct TierClassifier {
    ladder: Vec<TierRule>,
}

impl TierClassifier {
    pub fn new() -> Self {
        Self::with_ladder(DEFAULT_TIER_LADDER.to_vec())
    }

    /// Use a custom ladder. Reps matching no rung fall back to KURUTA.
    pub fn with_ladder(ladder: Vec<TierRule>) -> Self {
        Self { ladder }
    }

    pub fn ladder(&self) -> &[TierRule] {
        &self.ladder
    }

    /// Current tier for `monthly_sales_count` sales and `months_working` whole months of tenure
    pub fn classify(&self, monthly_sales_count: u32, months_working: u32) -> Tier {
        let tier = self
            .ladder
            .iter()
            .find(|rule| rule.matches(monthly_sales_count, months_working))
            .map(|rule| rule.tier)
            .unwrap_or(Tier::Kuruta);

        debug!(
            monthly_sales_count,
            months_working,
            tier = %tier,
            "Classified DSR tier"
        );

        tier
    }
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::new()
    }
}
