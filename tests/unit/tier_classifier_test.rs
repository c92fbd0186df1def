// DSR tier ladder

use proptest::prelude::*;
use salesops_commission::commissions::models::Tier;
use salesops_commission::commissions::services::{TierClassifier, TierRule, DEFAULT_TIER_LADDER};

#[test]
fn test_reference_tiers() {
    let classifier = TierClassifier::new();

    assert_eq!(classifier.classify(22, 7), Tier::Tanzanite);
    assert_eq!(classifier.classify(22, 3), Tier::Dhahabu);
    assert_eq!(classifier.classify(3, 0), Tier::Kuruta);
    assert_eq!(classifier.classify(3, 2), Tier::Chuma);
}

#[test]
fn test_default_ladder_keeps_redundant_rungs() {
    assert_eq!(DEFAULT_TIER_LADDER.len(), 8);
    assert_eq!(DEFAULT_TIER_LADDER[1], TierRule::new(25, 0, Tier::Dhahabu));
    assert_eq!(DEFAULT_TIER_LADDER[2], TierRule::new(20, 0, Tier::Dhahabu));
}

#[test]
fn test_reordered_ladder_changes_outcome() {
    // Tenure-gated rung moved below the volume rungs never fires
    let mut ladder = DEFAULT_TIER_LADDER.to_vec();
    let tanzanite = ladder.remove(0);
    ladder.insert(3, tanzanite);

    let classifier = TierClassifier::with_ladder(ladder);
    assert_eq!(classifier.classify(22, 7), Tier::Dhahabu);
}

/// Straight transcription of the ladder as nested conditions
fn expected_tier(sales: u32, months: u32) -> Tier {
    if sales >= 20 && months >= 6 {
        Tier::Tanzanite
    } else if sales >= 20 {
        Tier::Dhahabu
    } else if sales >= 15 {
        Tier::Fedha
    } else if sales >= 5 {
        Tier::Shaba
    } else if months > 1 {
        Tier::Chuma
    } else {
        Tier::Kuruta
    }
}

proptest! {
    #[test]
    fn test_classifier_matches_ladder(sales in 0u32..60, months in 0u32..36) {
        let classifier = TierClassifier::new();
        prop_assert_eq!(classifier.classify(sales, months), expected_tier(sales, months));
    }

    #[test]
    fn test_more_sales_never_lowers_tier(sales in 0u32..60, months in 0u32..36, extra in 0u32..20) {
        let classifier = TierClassifier::new();
        prop_assert!(classifier.classify(sales + extra, months) >= classifier.classify(sales, months));
    }
}
