//! trip-budget-planner: split a travel budget, draft an itinerary, export the plan
//!
//! Everything here is synchronous and side-effect free apart from logging: a
//! [`TripInput`] and a set of [`CategoryWeights`] go in, a [`TripPlan`] comes
//! out, and the plan can be written as JSON or PDF.
//!
//! # Quick Start
//!
//! ```rust
//! use trip_budget_planner::{BudgetMode, CategoryWeights, TripInput, TripPlanner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let input = TripInput::new("Paris", 3, 2, 1000.0, BudgetMode::Total);
//!     let weights = CategoryWeights::new(0.4, 0.2, 0.15, 0.15, 0.1);
//!
//!     let plan = TripPlanner::new().plan(input, &weights)?;
//!     assert_eq!(plan.allocation.accommodation, 400.0);
//!     assert_eq!(plan.itinerary.len(), 3);
//!
//!     let json = trip_budget_planner::export::to_json(&plan)?;
//!     let pdf = trip_budget_planner::export::to_pdf(&plan)?;
//!     println!("{} bytes of JSON, {} bytes of PDF", json.len(), pdf.len());
//!     Ok(())
//! }
//! ```

extern crate self as trip_budget_planner;

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod schemas;
pub mod types;

pub use crate::core::{
    allocate, generate, ActivityCatalog, Allocated, CatalogEntry, ItineraryGenerator,
    TierThresholds, TripPlanner, ITEMS_PER_DAY,
};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use export::{from_json, to_json, to_pdf, PlanDocument};
pub use schemas::{DocumentSchema, SchemaHandle};
pub use tripplan_macros::document_schema;
pub use types::{
    ActivitySuggestion, AllocationRow, BudgetAllocation, BudgetMode, Category, CategoryWeights,
    CostTier, Currency, DayPlan, Itinerary, NormalizationWarning, PlanSummary, TripInput,
    TripPlan,
};

#[cfg(feature = "cli")]
pub mod cli;
