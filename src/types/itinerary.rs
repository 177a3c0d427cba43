use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse price band for an activity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Low,
    Medium,
    High,
}

impl CostTier {
    /// This tier followed by every cheaper one
    pub fn and_cheaper(self) -> &'static [CostTier] {
        match self {
            CostTier::High => &[CostTier::High, CostTier::Medium, CostTier::Low],
            CostTier::Medium => &[CostTier::Medium, CostTier::Low],
            CostTier::Low => &[CostTier::Low],
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CostTier::Low => "low",
            CostTier::Medium => "medium",
            CostTier::High => "high",
        })
    }
}

/// A suggested activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySuggestion {
    pub name: String,
    pub cost_tier: CostTier,
    /// Estimated spend for the whole party
    #[serde(default)]
    pub estimated_cost: f64,
}

/// Suggested activities for one day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DayPlan {
    /// 1-based day counter
    pub day: u32,
    /// Calendar date, when the trip has a start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Activities in suggested order
    pub activities: Vec<ActivitySuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DayPlan {
    pub fn estimated_cost(&self) -> f64 {
        self.activities
            .iter()
            .map(|activity| activity.estimated_cost)
            .sum()
    }
}

/// Day-by-day plan, one entry per trip day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Itinerary {
    days: Vec<DayPlan>,
}

impl Itinerary {
    pub fn new(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayPlan> {
        self.days.iter()
    }
}

impl FromIterator<DayPlan> for Itinerary {
    fn from_iter<I: IntoIterator<Item = DayPlan>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a DayPlan;
    type IntoIter = std::slice::Iter<'a, DayPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
