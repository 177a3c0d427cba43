use tracing::info;

use super::{
    allocator::allocate,
    itinerary::{ItineraryGenerator, TierThresholds},
};
use crate::{
    config::PlannerConfig,
    error::Result,
    types::{CategoryWeights, TripInput, TripPlan},
};

/// Runs one full compute cycle: validate, allocate, draft the itinerary.
#[derive(Debug, Clone, Default)]
pub struct TripPlanner {
    generator: ItineraryGenerator,
}

impl TripPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new().with_thresholds(config.thresholds)
    }

    pub fn with_generator(mut self, generator: ItineraryGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.generator = self.generator.with_thresholds(thresholds);
        self
    }

    pub fn generator(&self) -> &ItineraryGenerator {
        &self.generator
    }

    /// Plan a trip. Invalid input is rejected before anything is computed.
    pub fn plan(&self, input: TripInput, weights: &CategoryWeights) -> Result<TripPlan> {
        input.validate()?;

        let allocated = allocate(&input, weights)?;
        let itinerary = self.generator.generate(&input, &allocated.allocation);

        info!(
            destination = %input.destination,
            days = input.days,
            travelers = input.travelers,
            effective_budget = input.effective_budget(),
            normalized = allocated.warning.is_some(),
            "trip planned"
        );

        Ok(TripPlan {
            input,
            weights: allocated.weights,
            allocation: allocated.allocation,
            itinerary,
            warning: allocated.warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BudgetMode;

    #[test]
    fn test_plan_bundles_everything() {
        let input = TripInput::new("Paris", 3, 2, 1000.0, BudgetMode::Total);
        let plan = TripPlanner::new()
            .plan(input, &CategoryWeights::new(40.0, 20.0, 15.0, 15.0, 10.0))
            .unwrap();

        assert_eq!(plan.allocation.accommodation, 400.0);
        assert_eq!(plan.itinerary.len(), 3);
        assert!((plan.weights.sum() - 1.0).abs() < 1e-9);
        assert!(plan.warning.is_some());

        let summary = plan.summary();
        assert_eq!(summary.effective_budget, 1000.0);
        assert_eq!(summary.per_person_per_day, 166.67);
        assert!(summary.end_date.is_none());
    }

    #[test]
    fn test_invalid_input_short_circuits() {
        let input = TripInput::new("", 3, 2, 1000.0, BudgetMode::Total);
        let err = TripPlanner::new()
            .plan(input, &CategoryWeights::default())
            .unwrap_err();
        assert_eq!(err.field(), Some("destination"));
    }
}
