// Monthly bonus band lookup

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salesops_commission::commissions::models::{CommissionRates, Tier};
use salesops_commission::commissions::services::BonusCalculator;

#[test]
fn test_reference_bonuses() {
    let calculator = BonusCalculator::default();

    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 7), dec!(50000));
    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 12), dec!(115000));
    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 100), dec!(0));
}

#[test]
fn test_shadowed_dhahabu_band_never_pays() {
    let calculator = BonusCalculator::default();

    for count in 20..=24 {
        assert_eq!(
            calculator.calculate_bonus_commission(Tier::Dhahabu, count),
            dec!(300000),
            "count {}",
            count
        );
    }
}

#[test]
fn test_band_edges_are_inclusive() {
    let calculator = BonusCalculator::default();

    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 4), dec!(0));
    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 5), dec!(50000));
    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 9), dec!(50000));
    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 10), dec!(115000));
    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 14), dec!(115000));
    assert_eq!(calculator.calculate_bonus_commission(Tier::Shaba, 15), dec!(0));
}

proptest! {
    #[test]
    fn test_bonus_comes_from_first_matching_band(
        tier_index in 0usize..6,
        count in 0u32..200,
    ) {
        let rates = CommissionRates::default();
        let tier = Tier::ALL[tier_index];
        let expected = rates
            .bonus_bands
            .iter()
            .find(|band| band.tier == tier && band.min_sales <= count && count <= band.max_sales)
            .map(|band| band.bonus_amount)
            .unwrap_or(Decimal::ZERO);

        let calculator = BonusCalculator::default();
        prop_assert_eq!(calculator.calculate_bonus_commission(tier, count), expected);
    }

    #[test]
    fn test_bonus_is_never_negative(tier_index in 0usize..6, count in any::<u32>()) {
        let calculator = BonusCalculator::default();
        let bonus = calculator.calculate_bonus_commission(Tier::ALL[tier_index], count);
        prop_assert!(bonus >= Decimal::ZERO);
    }
}
