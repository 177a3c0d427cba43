pub mod allocation;
pub mod category;
pub mod itinerary;
pub mod money;
pub mod plan;
pub mod trip;

pub use allocation::{AllocationRow, BudgetAllocation};
pub use category::{Category, CategoryWeights, NormalizationWarning, WEIGHT_EPSILON};
pub use itinerary::{ActivitySuggestion, CostTier, DayPlan, Itinerary};
pub use money::{round_currency, Currency};
pub use plan::{PlanSummary, TripPlan, COST_SAVING_TIPS};
pub use trip::{BudgetMode, TripInput, MAX_BUDGET, MAX_DAYS, MAX_TRAVELERS};
