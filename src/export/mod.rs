//! Plan export to JSON and PDF.
//!
//! Both formats refuse malformed plans with [`PlannerError::Export`]; a
//! failed export leaves the plan itself untouched. Imports go through the
//! same check, so a document with broken weights or amounts never becomes
//! a plan.

pub mod document;
pub mod json;
pub mod pdf;

pub use document::PlanDocument;
pub use json::{from_json, to_json};
pub use pdf::to_pdf;

use crate::{
    error::{PlannerError, Result},
    types::{Category, TripPlan},
};

/// Check that a plan is complete enough to export.
pub fn ensure_exportable(plan: &TripPlan) -> Result<()> {
    if plan.allocation.is_empty() {
        return Err(PlannerError::Export("allocation is empty".to_string()));
    }

    for category in Category::ALL {
        let weight = plan.weights.get(category);
        if !(0.0..=1.0).contains(&weight) {
            return Err(PlannerError::Export(format!(
                "{} weight {} is outside 0..=1",
                category.key(),
                weight
            )));
        }
    }
    if !plan.weights.is_normalized() {
        return Err(PlannerError::Export(format!(
            "weights sum to {} instead of 1.0",
            plan.weights.sum()
        )));
    }

    let expected = plan.input.effective_cents();
    let allocated = plan.allocation.total_cents();
    if allocated != expected {
        return Err(PlannerError::Export(format!(
            "allocation sums to {:.2} but the effective budget is {:.2}",
            plan.allocation.total(),
            plan.input.effective_budget()
        )));
    }

    if plan.itinerary.len() != plan.input.days as usize {
        return Err(PlannerError::Export(format!(
            "itinerary has {} days but the trip has {}",
            plan.itinerary.len(),
            plan.input.days
        )));
    }

    for (idx, day) in plan.itinerary.iter().enumerate() {
        if day.day as usize != idx + 1 {
            return Err(PlannerError::Export(format!(
                "itinerary entry {} is labelled day {}",
                idx + 1,
                day.day
            )));
        }
        if day.activities.is_empty() {
            return Err(PlannerError::Export(format!(
                "day {} has no activities",
                day.day
            )));
        }
    }

    Ok(())
}
