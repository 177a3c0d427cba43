//! Proportional budget allocation across categories.
//!
//! # Invariant
//! The category amounts always sum to the effective budget to the cent. Each
//! category is rounded independently and the leftover cents go to the
//! largest category.

use tracing::debug;

use crate::{
    error::Result,
    types::{
        money::from_cents, BudgetAllocation, Category, CategoryWeights, NormalizationWarning,
        TripInput,
    },
};

/// Output of [`allocate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Allocated {
    pub allocation: BudgetAllocation,
    /// Weights actually applied, summing to 1.0
    pub weights: CategoryWeights,
    pub warning: Option<NormalizationWarning>,
}

/// Split the effective budget of `input` by `weights`.
///
/// # Errors
/// `InvalidInput` when the trip fails validation or a weight is negative.
pub fn allocate(input: &TripInput, weights: &CategoryWeights) -> Result<Allocated> {
    input.validate()?;
    let (weights, warning) = weights.normalize()?;

    let total = input.effective_cents();
    let mut cents = Category::ALL.map(|category| (total as f64 * weights.get(category)).round() as i64);

    let remainder = total - cents.iter().sum::<i64>();
    if remainder != 0 {
        let largest = largest_index(&cents);
        cents[largest] += remainder;
        debug!(
            remainder,
            category = Category::ALL[largest].key(),
            "assigned rounding remainder"
        );
    }

    let mut allocation = BudgetAllocation::default();
    for (category, amount) in Category::ALL.into_iter().zip(cents) {
        allocation.set_amount(category, from_cents(amount));
    }
    allocation.per_day_total = from_cents((total as f64 / f64::from(input.days)).round() as i64);

    debug!(
        effective_cents = total,
        per_day_total = allocation.per_day_total,
        "allocated budget"
    );

    Ok(Allocated {
        allocation,
        weights,
        warning,
    })
}

/// Index of the largest amount; the first one wins a tie.
fn largest_index(cents: &[i64]) -> usize {
    let mut best = 0;
    for (idx, amount) in cents.iter().enumerate() {
        if *amount > cents[best] {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BudgetMode;
    use proptest::prelude::*;

    fn paris_weights() -> CategoryWeights {
        CategoryWeights::new(0.4, 0.2, 0.15, 0.15, 0.1)
    }

    #[test]
    fn test_paris_example() {
        let input = TripInput::new("Paris", 3, 2, 1000.0, BudgetMode::Total);
        let result = allocate(&input, &paris_weights()).unwrap();
        let allocation = result.allocation;

        assert_eq!(allocation.accommodation, 400.0);
        assert_eq!(allocation.food, 200.0);
        assert_eq!(allocation.transport, 150.0);
        assert_eq!(allocation.activities, 150.0);
        assert_eq!(allocation.shopping, 100.0);
        assert_eq!(allocation.per_day_total, 333.33);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_per_person_mode_multiplies() {
        let input = TripInput::new("Rome", 4, 4, 500.0, BudgetMode::PerPerson);
        let allocation = allocate(&input, &paris_weights()).unwrap().allocation;
        assert_eq!(allocation.total(), 2000.0);
        assert_eq!(allocation.accommodation, 800.0);
        assert_eq!(allocation.per_day_total, 500.0);
    }

    #[test]
    fn test_remainder_goes_to_largest_category() {
        let input = TripInput::new("Oslo", 1, 1, 100.0, BudgetMode::Total);
        let weights = CategoryWeights::new(1.0, 1.0, 1.0, 0.0, 0.0);
        let result = allocate(&input, &weights).unwrap();

        // 10000 cents / 3 = 3333.33 each; the spare cent lands on the first tie.
        assert_eq!(result.allocation.accommodation, 33.34);
        assert_eq!(result.allocation.food, 33.33);
        assert_eq!(result.allocation.transport, 33.33);
        assert_eq!(result.allocation.total(), 100.0);
        assert!(result.warning.is_some());
    }

    #[test]
    fn test_short_weights_are_normalized() {
        let input = TripInput::new("Kandy", 5, 2, 150_000.0, BudgetMode::Total);
        let weights = CategoryWeights::new(0.3, 0.2, 0.15, 0.15, 0.1);
        let result = allocate(&input, &weights).unwrap();

        assert!((result.weights.sum() - 1.0).abs() < 0.001);
        assert_eq!(result.allocation.total(), 150_000.0);
        assert!((result.warning.unwrap().original_sum - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_zero_days_rejected_before_allocation() {
        let input = TripInput::new("Paris", 0, 2, 1000.0, BudgetMode::Total);
        let err = allocate(&input, &paris_weights()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("days"));
    }

    #[test]
    fn test_largest_index_prefers_first() {
        assert_eq!(largest_index(&[5, 9, 9, 1]), 1);
        assert_eq!(largest_index(&[0, 0, 0]), 0);
    }

    proptest! {
        #[test]
        fn allocation_sums_to_effective_budget(
            cents in 1i64..100_000_000,
            days in 1u32..=60,
            travelers in 1u32..=20,
            per_person in any::<bool>(),
            raw in prop::array::uniform5(0.0f64..100.0),
        ) {
            let mode = if per_person { BudgetMode::PerPerson } else { BudgetMode::Total };
            let input = TripInput::new("Anywhere", days, travelers, cents as f64 / 100.0, mode);
            let weights = CategoryWeights::new(raw[0], raw[1], raw[2], raw[3], raw[4]);

            let result = allocate(&input, &weights).unwrap();
            prop_assert_eq!(result.allocation.total_cents(), input.effective_cents());
            prop_assert!((result.weights.sum() - 1.0).abs() <= 0.001);
            for category in Category::ALL {
                prop_assert!(result.allocation.amount(category) >= 0.0);
            }
        }
    }
}
