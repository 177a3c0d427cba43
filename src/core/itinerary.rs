//! Day-by-day itinerary drafting.
//!
//! Each day draws up to [`ITEMS_PER_DAY`] catalog entries, starting at the
//! tier the per-person activity budget affords and falling back to cheaper
//! tiers. Draws are shuffled with an RNG seeded from the destination and day
//! number, so the same trip always yields the same itinerary.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::catalog::{ActivityCatalog, CatalogEntry};
use crate::types::{
    money::{from_cents, to_cents},
    ActivitySuggestion, BudgetAllocation, CostTier, DayPlan, Itinerary, TripInput,
};

/// Maximum suggestions per day
pub const ITEMS_PER_DAY: usize = 3;

/// Per-person daily activity budgets separating the cost tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    /// Budgets below this are LOW
    pub low_max: f64,
    /// Budgets below this (and at least `low_max`) are MEDIUM
    pub medium_max: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low_max: 15.0,
            medium_max: 40.0,
        }
    }
}

impl TierThresholds {
    pub fn tier_for(&self, per_person_budget: f64) -> CostTier {
        if per_person_budget < self.low_max {
            CostTier::Low
        } else if per_person_budget < self.medium_max {
            CostTier::Medium
        } else {
            CostTier::High
        }
    }
}

/// Builds itineraries from an activity catalog.
#[derive(Debug, Clone, Default)]
pub struct ItineraryGenerator {
    catalog: ActivityCatalog,
    thresholds: TierThresholds,
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: ActivityCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    pub fn thresholds(&self) -> TierThresholds {
        self.thresholds
    }

    /// Draft one [`DayPlan`] per trip day.
    pub fn generate(&self, input: &TripInput, allocation: &BudgetAllocation) -> Itinerary {
        let days = input.days.max(1);
        let travelers = input.travelers.max(1);
        let daily_cents = to_cents(allocation.activities) / i64::from(days);
        let per_person = from_cents(daily_cents) / f64::from(travelers);
        let band = self.thresholds.tier_for(per_person);

        debug!(
            destination = %input.destination,
            daily_activity_budget = from_cents(daily_cents),
            per_person,
            tier = %band,
            "generating itinerary"
        );

        (1..=days)
            .map(|day| self.plan_day(input, day, daily_cents, band))
            .collect()
    }

    fn plan_day(&self, input: &TripInput, day: u32, daily_cents: i64, band: CostTier) -> DayPlan {
        let travelers = i64::from(input.travelers.max(1));
        let mut rng = StdRng::seed_from_u64(day_seed(&input.destination, day));
        let mut activities = Vec::with_capacity(ITEMS_PER_DAY);
        let mut spent = 0;

        'tiers: for tier in band.and_cheaper() {
            let mut candidates: Vec<&CatalogEntry> = self.catalog.tier(*tier).collect();
            candidates.shuffle(&mut rng);

            for entry in candidates {
                if activities.len() == ITEMS_PER_DAY {
                    break 'tiers;
                }
                let cost = to_cents(entry.cost_per_person) * travelers;
                if spent + cost <= daily_cents {
                    spent += cost;
                    activities.push(ActivitySuggestion {
                        name: entry.name.clone(),
                        cost_tier: entry.tier,
                        estimated_cost: from_cents(cost),
                    });
                }
            }
        }

        if activities.is_empty() {
            debug!(day, "no catalog entry fits the daily budget, using fallback");
            activities.push(fallback_suggestion(&input.destination));
        }

        DayPlan {
            day,
            date: input.date_of_day(day),
            activities,
            notes: Some(format!(
                "Adjust based on {} opening times.",
                input.destination.trim()
            )),
        }
    }
}

/// Draft an itinerary with the built-in catalog and default thresholds.
pub fn generate(input: &TripInput, allocation: &BudgetAllocation) -> Itinerary {
    ItineraryGenerator::default().generate(input, allocation)
}

/// Stable per-day seed: SHA-256 over the normalized destination and day.
pub fn day_seed(destination: &str, day: u32) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(destination.trim().to_lowercase().as_bytes());
    hasher.update(b":");
    hasher.update(day.to_le_bytes());
    let digest = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed)
}

fn fallback_suggestion(destination: &str) -> ActivitySuggestion {
    ActivitySuggestion {
        name: format!(
            "Budget-friendly: explore {} on foot and picnic with market produce",
            destination.trim()
        ),
        cost_tier: CostTier::Low,
        estimated_cost: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::allocator::allocate;
    use crate::types::{BudgetMode, CategoryWeights};
    use chrono::NaiveDate;

    fn plan_for(input: &TripInput) -> (BudgetAllocation, Itinerary) {
        let allocation = allocate(input, &CategoryWeights::new(0.4, 0.2, 0.15, 0.15, 0.1))
            .unwrap()
            .allocation;
        let itinerary = generate(input, &allocation);
        (allocation, itinerary)
    }

    #[test]
    fn test_one_day_plan_per_trip_day() {
        let input = TripInput::new("Paris", 7, 2, 3000.0, BudgetMode::Total);
        let (_, itinerary) = plan_for(&input);

        assert_eq!(itinerary.len(), 7);
        for (idx, day) in itinerary.iter().enumerate() {
            assert_eq!(day.day as usize, idx + 1);
            assert!(!day.activities.is_empty());
            assert!(day.activities.len() <= ITEMS_PER_DAY);
        }
    }

    #[test]
    fn test_stays_within_daily_activity_budget() {
        let input = TripInput::new("Paris", 3, 2, 1000.0, BudgetMode::Total);
        let (allocation, itinerary) = plan_for(&input);
        let daily = allocation.activities / 3.0;

        for day in &itinerary {
            assert!(day.estimated_cost() <= daily + 1e-9, "{day:?}");
        }
    }

    #[test]
    fn test_same_trip_same_itinerary() {
        let input = TripInput::new("Kandy", 5, 2, 150_000.0, BudgetMode::Total);
        let (_, first) = plan_for(&input);
        let (_, second) = plan_for(&input);
        assert_eq!(first, second);

        let shouty = TripInput::new("  KANDY ", 5, 2, 150_000.0, BudgetMode::Total);
        assert_eq!(day_seed(&input.destination, 3), day_seed(&shouty.destination, 3));
        assert_ne!(day_seed("Kandy", 1), day_seed("Kandy", 2));
    }

    #[test]
    fn test_large_budget_uses_high_tier() {
        let input = TripInput::new("Zurich", 2, 1, 10_000.0, BudgetMode::Total);
        let (_, itinerary) = plan_for(&input);
        let first = &itinerary.days()[0].activities[0];
        assert_eq!(first.cost_tier, CostTier::High);
    }

    #[test]
    fn test_tiny_budget_stays_low() {
        let input = TripInput::new("Hanoi", 4, 3, 200.0, BudgetMode::Total);
        let (_, itinerary) = plan_for(&input);
        for day in &itinerary {
            for activity in &day.activities {
                assert_eq!(activity.cost_tier, CostTier::Low);
            }
        }
    }

    #[test]
    fn test_empty_catalog_falls_back() {
        let input = TripInput::new("Galle", 2, 2, 500.0, BudgetMode::Total);
        let allocation = allocate(&input, &CategoryWeights::default()).unwrap().allocation;
        let generator = ItineraryGenerator::new().with_catalog(ActivityCatalog::new(Vec::new()));

        let itinerary = generator.generate(&input, &allocation);
        assert_eq!(itinerary.len(), 2);
        for day in &itinerary {
            assert_eq!(day.activities.len(), 1);
            assert!(day.activities[0].name.starts_with("Budget-friendly"));
            assert_eq!(day.activities[0].cost_tier, CostTier::Low);
        }
    }

    #[test]
    fn test_dates_follow_start_date() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let input = TripInput::new("Tokyo", 3, 1, 900.0, BudgetMode::Total).with_start_date(start);
        let (_, itinerary) = plan_for(&input);
        assert_eq!(itinerary.days()[2].date, NaiveDate::from_ymd_opt(2026, 3, 3));
    }

    #[test]
    fn test_thresholds() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.tier_for(0.0), CostTier::Low);
        assert_eq!(thresholds.tier_for(15.0), CostTier::Medium);
        assert_eq!(thresholds.tier_for(39.99), CostTier::Medium);
        assert_eq!(thresholds.tier_for(40.0), CostTier::High);
    }
}
