use chrono::{Days, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::money::{from_cents, to_cents, Currency};
use crate::error::{PlannerError, Result};

/// Longest trip the planner accepts
pub const MAX_DAYS: u32 = 60;
/// Largest party the planner accepts
pub const MAX_TRAVELERS: u32 = 20;
/// Largest budget amount the planner accepts, in either budget mode.
///
/// Keeps `MAX_BUDGET * MAX_TRAVELERS` in cents exact as `f64` and far
/// inside `i64`.
pub const MAX_BUDGET: f64 = 1_000_000_000_000.0;

/// How the entered budget amount should be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetMode {
    /// The amount covers the whole group
    #[default]
    Total,
    /// The amount is per traveler and gets multiplied by the party size
    PerPerson,
}

impl fmt::Display for BudgetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetMode::Total => f.write_str("Total (group)"),
            BudgetMode::PerPerson => f.write_str("Per person"),
        }
    }
}

impl FromStr for BudgetMode {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "total" | "group" => Ok(BudgetMode::Total),
            "per person" | "person" => Ok(BudgetMode::PerPerson),
            other => Err(PlannerError::invalid_input(
                "budgetMode",
                format!("unknown budget mode `{other}`"),
            )),
        }
    }
}

/// Trip parameters as submitted by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    /// Destination label (e.g., "Kandy" or "Paris, France")
    pub destination: String,
    /// Number of days in the trip
    pub days: u32,
    /// Number of travelers sharing the budget
    pub travelers: u32,
    /// Budget amount as entered, read according to `budgetMode`
    pub total_budget: f64,
    /// Whether `totalBudget` covers the group or each traveler
    pub budget_mode: BudgetMode,
    /// Currency label for every amount in the plan
    #[serde(default)]
    pub currency: Currency,
    /// First day of the trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl TripInput {
    pub fn new(
        destination: impl Into<String>,
        days: u32,
        travelers: u32,
        total_budget: f64,
        budget_mode: BudgetMode,
    ) -> Self {
        Self {
            destination: destination.into(),
            days,
            travelers,
            total_budget,
            budget_mode,
            currency: Currency::default(),
            start_date: None,
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Check every field, reporting the first offending one.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(PlannerError::invalid_input(
                "destination",
                "destination must not be empty",
            ));
        }
        if !(1..=MAX_DAYS).contains(&self.days) {
            return Err(PlannerError::invalid_input(
                "days",
                format!("must be between 1 and {MAX_DAYS}, got {}", self.days),
            ));
        }
        if !(1..=MAX_TRAVELERS).contains(&self.travelers) {
            return Err(PlannerError::invalid_input(
                "travelers",
                format!("must be between 1 and {MAX_TRAVELERS}, got {}", self.travelers),
            ));
        }
        if !self.total_budget.is_finite() || to_cents(self.total_budget) <= 0 {
            return Err(PlannerError::invalid_input(
                "totalBudget",
                format!("must be a positive amount, got {}", self.total_budget),
            ));
        }
        if self.total_budget > MAX_BUDGET {
            return Err(PlannerError::invalid_input(
                "totalBudget",
                format!("must not exceed {MAX_BUDGET:.0}, got {}", self.total_budget),
            ));
        }
        Ok(())
    }

    /// Spendable amount in cents after applying the budget mode.
    ///
    /// Saturates instead of overflowing for input that skipped [`validate`](Self::validate).
    pub(crate) fn effective_cents(&self) -> i64 {
        let entered = to_cents(self.total_budget);
        match self.budget_mode {
            BudgetMode::Total => entered,
            BudgetMode::PerPerson => entered.saturating_mul(i64::from(self.travelers)),
        }
    }

    pub fn effective_budget(&self) -> f64 {
        from_cents(self.effective_cents())
    }

    pub fn per_person_per_day(&self) -> f64 {
        let divisor = f64::from(self.travelers.max(1)) * f64::from(self.days.max(1));
        from_cents((self.effective_cents() as f64 / divisor).round() as i64)
    }

    /// Calendar date of a 1-based trip day, if the start date is known.
    pub fn date_of_day(&self, day: u32) -> Option<NaiveDate> {
        let offset = u64::from(day.checked_sub(1)?);
        self.start_date?.checked_add_days(Days::new(offset))
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.date_of_day(self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> TripInput {
        TripInput::new("Paris", 3, 2, 1000.0, BudgetMode::Total)
    }

    #[test]
    fn test_effective_budget_total() {
        assert_eq!(paris().effective_budget(), 1000.0);
    }

    #[test]
    fn test_effective_budget_per_person() {
        let input = TripInput::new("Lisbon", 5, 4, 500.0, BudgetMode::PerPerson);
        assert_eq!(input.effective_budget(), 2000.0);
        assert_eq!(input.per_person_per_day(), 100.0);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let cases = [
            (TripInput { destination: "  ".into(), ..paris() }, "destination"),
            (TripInput { days: 0, ..paris() }, "days"),
            (TripInput { days: MAX_DAYS + 1, ..paris() }, "days"),
            (TripInput { travelers: 0, ..paris() }, "travelers"),
            (TripInput { total_budget: 0.0, ..paris() }, "totalBudget"),
            (TripInput { total_budget: -10.0, ..paris() }, "totalBudget"),
            (TripInput { total_budget: f64::NAN, ..paris() }, "totalBudget"),
            (TripInput { total_budget: MAX_BUDGET * 2.0, ..paris() }, "totalBudget"),
        ];

        for (input, field) in cases {
            let err = input.validate().unwrap_err();
            assert_eq!(err.field(), Some(field), "{input:?}");
        }
        assert!(paris().validate().is_ok());
    }

    #[test]
    fn test_huge_per_person_budget_is_rejected_not_overflowed() {
        let input = TripInput::new("Oslo", 1, MAX_TRAVELERS, 1e16, BudgetMode::PerPerson);
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), Some("totalBudget"));
        assert!(input.effective_cents() > 0);

        let largest = TripInput::new("Oslo", 1, MAX_TRAVELERS, MAX_BUDGET, BudgetMode::PerPerson);
        assert!(largest.validate().is_ok());
        assert_eq!(largest.effective_budget(), MAX_BUDGET * f64::from(MAX_TRAVELERS));
    }

    #[test]
    fn test_dates() {
        let start = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        let input = paris().with_start_date(start);
        assert_eq!(input.date_of_day(1), Some(start));
        assert_eq!(input.end_date(), NaiveDate::from_ymd_opt(2027, 1, 1));
        assert_eq!(paris().end_date(), None);
    }

    #[test]
    fn test_budget_mode_parsing_and_wire_format() {
        assert_eq!("per-person".parse::<BudgetMode>().unwrap(), BudgetMode::PerPerson);
        assert_eq!("TOTAL".parse::<BudgetMode>().unwrap(), BudgetMode::Total);
        assert_eq!(
            serde_json::to_value(BudgetMode::PerPerson).unwrap(),
            serde_json::json!("PER_PERSON")
        );
    }
}
