use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    allocation::{AllocationRow, BudgetAllocation},
    category::{CategoryWeights, NormalizationWarning},
    itinerary::Itinerary,
    trip::TripInput,
};

/// Generic money-saving advice shown with every plan.
pub const COST_SAVING_TIPS: [&str; 4] = [
    "Book intercity transport in advance to lock lower fares.",
    "Use day passes for public transport instead of taxis.",
    "Bundle attractions (city pass) if you plan 3+ paid entries.",
    "Eat one local street-food meal per day to cut costs by 20-30%.",
];

/// Everything computed for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    pub input: TripInput,
    /// Weights after normalization
    pub weights: CategoryWeights,
    pub allocation: BudgetAllocation,
    pub itinerary: Itinerary,
    /// Set when the submitted weights had to be rescaled
    pub warning: Option<NormalizationWarning>,
}

/// Headline numbers derived from the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub effective_budget: f64,
    pub per_person_per_day: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl TripPlan {
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            effective_budget: self.input.effective_budget(),
            per_person_per_day: self.input.per_person_per_day(),
            end_date: self.input.end_date(),
        }
    }

    pub fn allocation_rows(&self) -> Vec<AllocationRow> {
        self.allocation.rows(self.input.days)
    }

    pub fn tips(&self) -> &'static [&'static str] {
        &COST_SAVING_TIPS
    }
}
