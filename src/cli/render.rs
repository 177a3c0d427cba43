use std::fmt;

use crate::types::TripPlan;

const BAR_WIDTH: f64 = 30.0;

/// Terminal rendering of a plan: key numbers, allocation table with share
/// bars, per-day breakdown, itinerary and tips.
pub fn render_plan(plan: &TripPlan) -> String {
    PlanReport(plan).to_string()
}

/// [`fmt::Display`] adapter behind [`render_plan`].
pub struct PlanReport<'a>(pub &'a TripPlan);

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let input = &plan.input;
        let currency = input.currency;
        let summary = plan.summary();

        writeln!(f, "Travel Budget Plan: {}", input.destination.trim())?;
        if let (Some(start), Some(end)) = (input.start_date, summary.end_date) {
            writeln!(f, "Dates: {start} to {end}")?;
        }
        writeln!(
            f,
            "{} day(s), {} traveler(s), budget entered as {}",
            input.days, input.travelers, input.budget_mode
        )?;
        writeln!(f, "Total budget:       {}", currency.format(summary.effective_budget))?;
        writeln!(f, "Per person / day:   {}", currency.format(summary.per_person_per_day))?;
        writeln!(f, "Per day (group):    {}", currency.format(plan.allocation.per_day_total))?;
        if let Some(warning) = plan.warning {
            writeln!(f, "Note: {warning}")?;
        }

        writeln!(f, "\nBudget Allocation")?;
        writeln!(
            f,
            "{:<15} {:>7} {:>20} {:>18}  Share",
            "Category", "Share %", "Amount", "Per day"
        )?;
        for row in plan.allocation_rows() {
            let bar = "#".repeat((row.share / 100.0 * BAR_WIDTH).round() as usize);
            writeln!(
                f,
                "{:<15} {:>7.1} {:>20} {:>18}  {}",
                row.category.label(),
                row.share,
                currency.format(row.amount),
                currency.format(row.per_day),
                bar
            )?;
        }

        writeln!(f, "\nDraft Itinerary")?;
        for day in &plan.itinerary {
            match day.date {
                Some(date) => writeln!(f, "Day {} ({date})", day.day)?,
                None => writeln!(f, "Day {}", day.day)?,
            }
            for activity in &day.activities {
                writeln!(
                    f,
                    "  - {} [{}] ~ {}",
                    activity.name,
                    activity.cost_tier,
                    currency.format(activity.estimated_cost)
                )?;
            }
            if let Some(notes) = &day.notes {
                writeln!(f, "    {notes}")?;
            }
        }

        writeln!(f, "\nCost-Saving Tips")?;
        for tip in plan.tips() {
            writeln!(f, "  - {tip}")?;
        }
        Ok(())
    }
}
