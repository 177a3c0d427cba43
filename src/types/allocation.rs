use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    category::Category,
    money::{from_cents, to_cents},
};

/// Budget split across categories, in the plan currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocation {
    pub accommodation: f64,
    pub food: f64,
    pub transport: f64,
    pub activities: f64,
    pub shopping: f64,
    /// Effective budget divided by trip days
    pub per_day_total: f64,
}

/// One line of the allocation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationRow {
    pub category: Category,
    /// Share of the budget in percent, one decimal
    pub share: f64,
    pub amount: f64,
    pub per_day: f64,
}

impl BudgetAllocation {
    pub fn amount(&self, category: Category) -> f64 {
        match category {
            Category::Accommodation => self.accommodation,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Activities => self.activities,
            Category::Shopping => self.shopping,
        }
    }

    pub(crate) fn set_amount(&mut self, category: Category, amount: f64) {
        match category {
            Category::Accommodation => self.accommodation = amount,
            Category::Food => self.food = amount,
            Category::Transport => self.transport = amount,
            Category::Activities => self.activities = amount,
            Category::Shopping => self.shopping = amount,
        }
    }

    pub(crate) fn total_cents(&self) -> i64 {
        Category::ALL
            .iter()
            .map(|category| to_cents(self.amount(*category)))
            .fold(0i64, i64::saturating_add)
    }

    /// Sum of all category amounts
    pub fn total(&self) -> f64 {
        from_cents(self.total_cents())
    }

    pub fn is_empty(&self) -> bool {
        self.total_cents() == 0
    }

    /// Category amount spread evenly over the trip.
    pub fn per_day(&self, category: Category, days: u32) -> f64 {
        let cents = to_cents(self.amount(category)) as f64 / f64::from(days.max(1));
        from_cents(cents.round() as i64)
    }

    /// Allocation table rows, largest share first. Ties keep display order.
    pub fn rows(&self, days: u32) -> Vec<AllocationRow> {
        let total = self.total_cents();
        let mut rows: Vec<AllocationRow> = Category::ALL
            .into_iter()
            .map(|category| {
                let cents = to_cents(self.amount(category));
                let share = if total == 0 {
                    0.0
                } else {
                    (cents as f64 / total as f64 * 1000.0).round() / 10.0
                };
                AllocationRow {
                    category,
                    share,
                    amount: self.amount(category),
                    per_day: self.per_day(category, days),
                }
            })
            .collect();
        rows.sort_by(|a, b| b.share.total_cmp(&a.share));
        rows
    }
}
