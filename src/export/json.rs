use serde_json::Value;
use tracing::info;

use super::{document::PlanDocument, ensure_exportable};
use crate::{error::Result, schemas::deserialize_document, types::TripPlan};

/// Serialize a plan as a pretty-printed JSON document.
pub fn to_json(plan: &TripPlan) -> Result<String> {
    ensure_exportable(plan)?;
    let document = PlanDocument::from_plan(plan);
    let text = serde_json::to_string_pretty(&document)?;

    info!(bytes = text.len(), days = plan.itinerary.len(), "exported plan as JSON");
    Ok(text)
}

/// Parse a JSON document produced by [`to_json`] back into a plan.
///
/// The document is checked against the `trip_plan` schema, then the trip
/// and the plan's internal consistency are validated again.
pub fn from_json(text: &str) -> Result<TripPlan> {
    let payload: Value = serde_json::from_str(text)?;
    let document: PlanDocument = deserialize_document(payload)?;
    let plan = document.into_plan();

    plan.input.validate()?;
    ensure_exportable(&plan)?;
    Ok(plan)
}
