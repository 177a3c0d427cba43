use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    document_schema,
    types::{BudgetAllocation, CategoryWeights, Itinerary, PlanSummary, TripInput, TripPlan},
};

/// Exported travel plan: trip parameters, budget split and draft itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[document_schema(name = "trip_plan")]
pub struct PlanDocument {
    /// Trip parameters as submitted
    pub trip: TripInput,
    /// Normalized category weights, summing to 1.0
    pub weights: CategoryWeights,
    /// Category amounts and the per-day total
    pub allocation: BudgetAllocation,
    /// Headline numbers derived from the trip
    pub summary: PlanSummary,
    /// One entry per trip day
    pub itinerary: Itinerary,
    /// Cost-saving tips
    #[serde(default)]
    pub tips: Vec<String>,
}

impl PlanDocument {
    pub fn from_plan(plan: &TripPlan) -> Self {
        Self {
            trip: plan.input.clone(),
            weights: plan.weights,
            allocation: plan.allocation,
            summary: plan.summary(),
            itinerary: plan.itinerary.clone(),
            tips: plan.tips().iter().map(|tip| tip.to_string()).collect(),
        }
    }

    /// Rebuild the plan. The summary and tips are derived, so they are dropped.
    pub fn into_plan(self) -> TripPlan {
        TripPlan {
            input: self.trip,
            weights: self.weights,
            allocation: self.allocation,
            itinerary: self.itinerary,
            warning: None,
        }
    }
}
