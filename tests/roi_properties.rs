//! Property tests for cart accumulation and the ROI calculator.

use proptest::prelude::*;

use automation_journey::domain::cart::{AccumulatedSavings, Cart};
use automation_journey::domain::catalog::Catalog;
use automation_journey::domain::roi::{ProjectionYear, RoiCalculator, RoiInputs};

fn catalog() -> Catalog {
    Catalog::bundled().unwrap()
}

fn chapter_ids() -> Vec<String> {
    catalog().chapter_ids().into_iter().map(String::from).collect()
}

fn cart_of(catalog: &Catalog, ids: &[String]) -> Cart {
    let mut cart = Cart::new();
    for id in ids {
        cart.add(catalog.chapter(id).unwrap());
    }
    cart
}

/// Whole-number slider values, including zero and values past the UI ranges.
fn inputs() -> impl Strategy<Value = RoiInputs> {
    (0u32..=500, 0u32..=200, 0u32..=100).prop_map(|(cost, hours, rate)| {
        RoiInputs::new(f64::from(cost), f64::from(hours), f64::from(rate))
    })
}

/// One chapter selection in two independently shuffled orders.
fn two_orderings_of_one_selection() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    proptest::sample::subsequence(chapter_ids(), 0..=6).prop_flat_map(|ids| {
        (Just(ids.clone()).prop_shuffle(), Just(ids).prop_shuffle())
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn accumulation_ignores_selection_order(
        (first, second) in two_orderings_of_one_selection(),
    ) {
        let catalog = catalog();

        let a = cart_of(&catalog, &first).accumulated_savings();
        let b = cart_of(&catalog, &second).accumulated_savings();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn re_adding_a_chapter_changes_nothing(
        ids in proptest::sample::subsequence(chapter_ids(), 1..=6),
        pick in any::<prop::sample::Index>(),
    ) {
        let catalog = catalog();
        let mut cart = cart_of(&catalog, &ids);
        let before = cart.accumulated_savings();
        let again = pick.get(&ids);

        prop_assert!(!cart.add(catalog.chapter(again).unwrap()));
        prop_assert_eq!(cart.len(), ids.len());
        prop_assert_eq!(cart.accumulated_savings(), before);
    }

    #[test]
    fn add_then_remove_restores_totals(
        ids in proptest::sample::subsequence(chapter_ids(), 0..6),
    ) {
        let catalog = catalog();
        let mut cart = cart_of(&catalog, &ids);
        let before = cart.accumulated_savings();

        let extra = catalog
            .chapter_ids()
            .into_iter()
            .find(|id| !ids.iter().any(|chosen| chosen.as_str() == *id))
            .unwrap();
        prop_assert!(cart.add(catalog.chapter(extra).unwrap()));
        prop_assert!(cart.remove(extra));

        prop_assert_eq!(cart.accumulated_savings(), before);
    }

    #[test]
    fn cost_totals_are_sums_of_chapter_prices(
        ids in proptest::sample::subsequence(chapter_ids(), 0..=6),
    ) {
        let catalog = catalog();
        let totals = cart_of(&catalog, &ids).accumulated_savings();
        let expected: u64 = ids
            .iter()
            .map(|id| catalog.chapter(id).unwrap().pricing.cost_usd)
            .sum();

        prop_assert_eq!(totals.total_cost_usd, expected);
    }

    #[test]
    fn annual_hours_scale_linearly(hours in 0u32..=200, rate in 0u32..=100) {
        let single = RoiCalculator::annual_hours_saved(f64::from(hours), f64::from(rate));
        let double = RoiCalculator::annual_hours_saved(f64::from(hours) * 2.0, f64::from(rate));

        prop_assert_eq!(double, single * 2.0);
    }

    #[test]
    fn payback_is_never_exactly_when_nothing_is_saved(
        inputs in inputs(),
        ids in proptest::sample::subsequence(chapter_ids(), 0..=6),
    ) {
        let catalog = catalog();
        let savings = cart_of(&catalog, &ids).accumulated_savings();

        let calculation = RoiCalculator::calculate_full_roi(&inputs, &savings);

        let saves_anything = inputs.avg_hourly_cost > 0.0
            && inputs.hours_saved_per_week > 0.0
            && inputs.automation_uptake_rate > 0.0;
        prop_assert_eq!(calculation.estimated_payback_period.is_never(), !saves_anything);
        if saves_anything {
            prop_assert!(calculation.estimated_payback_period.months() >= 0.0);
        }
    }

    #[test]
    fn later_years_never_return_less(
        inputs in inputs(),
        ids in proptest::sample::subsequence(chapter_ids(), 0..=6),
    ) {
        let catalog = catalog();
        let savings = cart_of(&catalog, &ids).accumulated_savings();

        let calculation = RoiCalculator::calculate_full_roi(&inputs, &savings);

        prop_assert!(calculation.net_roi_for(ProjectionYear::Two) >= calculation.net_roi_for(ProjectionYear::One));
        prop_assert!(calculation.net_roi_for(ProjectionYear::Three) >= calculation.net_roi_for(ProjectionYear::Two));
    }

    #[test]
    fn implementation_time_comes_from_the_cart(
        inputs in inputs(),
        ids in proptest::sample::subsequence(chapter_ids(), 0..=6),
    ) {
        let catalog = catalog();
        let savings = cart_of(&catalog, &ids).accumulated_savings();

        let calculation = RoiCalculator::calculate_full_roi(&inputs, &savings);

        prop_assert_eq!(calculation.estimated_implementation_time, savings.total_impl_hours);
    }
}

#[test]
fn empty_cart_pays_back_immediately() {
    let inputs = catalog().default_inputs();

    let calculation = RoiCalculator::calculate_full_roi(&inputs, &AccumulatedSavings::ZERO);

    assert_eq!(calculation.estimated_payback_period.months(), 0.0);
    assert_eq!(calculation.estimated_implementation_time, 0);
    assert_eq!(calculation.estimated_annual_roi, 72188);
}
