//! Accumulated savings - totals derived from the cart contents.

use serde::{Deserialize, Serialize};

use super::CartLineItem;

/// Sum of every line item's savings, hours and cost.
///
/// Always derived from a cart; never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccumulatedSavings {
    pub total_hours_per_week: f64,
    pub total_dollars_per_year: f64,
    pub total_impl_hours: u64,
    pub total_cost_usd: u64,
}

impl AccumulatedSavings {
    /// All-zero totals (the empty cart).
    pub const ZERO: Self = Self {
        total_hours_per_week: 0.0,
        total_dollars_per_year: 0.0,
        total_impl_hours: 0,
        total_cost_usd: 0,
    };

    /// Folds line items into totals.
    ///
    /// Order-independent for the integer fields; the floating-point sums are
    /// exact for the whole and half values catalogs use.
    pub fn accumulate<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a CartLineItem>,
    {
        items
            .into_iter()
            .fold(Self::ZERO, |acc, item| acc.plus_item(item))
    }

    fn plus_item(self, item: &CartLineItem) -> Self {
        Self {
            total_hours_per_week: self.total_hours_per_week + item.savings.hours_per_week,
            total_dollars_per_year: self.total_dollars_per_year + item.savings.dollars_per_year,
            total_impl_hours: self.total_impl_hours.saturating_add(item.impl_hours),
            total_cost_usd: self.total_cost_usd.saturating_add(item.cost_usd),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ChapterSavings;

    fn items() -> Vec<CartLineItem> {
        vec![
            CartLineItem::new(
                "chapter-1",
                "Test Chapter 1",
                2500,
                8,
                ChapterSavings::new(6.0, 15600.0),
            ),
            CartLineItem::new(
                "chapter-2",
                "Test Chapter 2",
                3500,
                12,
                ChapterSavings::new(8.0, 20800.0),
            ),
        ]
    }

    #[test]
    fn accumulate_sums_every_field() {
        let totals = AccumulatedSavings::accumulate(&items());
        assert_eq!(totals.total_hours_per_week, 14.0);
        assert_eq!(totals.total_dollars_per_year, 36400.0);
        assert_eq!(totals.total_impl_hours, 20);
        assert_eq!(totals.total_cost_usd, 6000);
    }

    #[test]
    fn accumulate_empty_is_zero() {
        let totals = AccumulatedSavings::accumulate(&Vec::new());
        assert_eq!(totals, AccumulatedSavings::ZERO);
        assert!(totals.is_zero());
    }

    #[test]
    fn accumulate_single_item() {
        let all = items();
        let totals = AccumulatedSavings::accumulate(&all[..1]);
        assert_eq!(totals.total_hours_per_week, 6.0);
        assert_eq!(totals.total_cost_usd, 2500);
    }

    #[test]
    fn accumulate_is_order_independent() {
        let mut reversed = items();
        reversed.reverse();
        assert_eq!(
            AccumulatedSavings::accumulate(&items()),
            AccumulatedSavings::accumulate(&reversed)
        );
    }

    #[test]
    fn accumulated_savings_serialize_snake_case() {
        let json = serde_json::to_value(AccumulatedSavings::accumulate(&items())).unwrap();
        assert_eq!(json["total_cost_usd"], 6000);
        assert_eq!(json["total_impl_hours"], 20);
    }
}
