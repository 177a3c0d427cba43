use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::warn;

use crate::error::{PlannerError, Result};

/// Tolerance on the weight sum before weights are rescaled.
pub const WEIGHT_EPSILON: f64 = 0.001;

/// Spending categories a budget is split across.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Accommodation,
    Food,
    Transport,
    Activities,
    Shopping,
}

impl Category {
    /// Display order, also used to break ties.
    pub const ALL: [Category; 5] = [
        Category::Accommodation,
        Category::Food,
        Category::Transport,
        Category::Activities,
        Category::Shopping,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Accommodation => "accommodation",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Activities => "activities",
            Category::Shopping => "shopping",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Accommodation => "Accommodation",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Activities => "Activities",
            Category::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        let key = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| {
                PlannerError::invalid_input("weights", format!("unknown category `{key}`"))
            })
    }
}

/// Relative weight per category.
///
/// Raw weights may use any scale (slider values of 0-100 are typical);
/// [`CategoryWeights::normalize`] turns them into fractions summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryWeights {
    pub accommodation: f64,
    pub food: f64,
    pub transport: f64,
    pub activities: f64,
    pub shopping: f64,
}

/// Raised when weights had to be rescaled. Not fatal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationWarning {
    /// Sum of the weights as supplied
    pub original_sum: f64,
}

impl fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.original_sum == 0.0 {
            write!(f, "all weights were zero; budget split equally")
        } else {
            write!(
                f,
                "weights summed to {:.3}; rescaled to 1.0",
                self.original_sum
            )
        }
    }
}

impl Default for CategoryWeights {
    /// Accommodation 40, food 25, transport 15, activities 15, shopping 5.
    fn default() -> Self {
        Self {
            accommodation: 0.40,
            food: 0.25,
            transport: 0.15,
            activities: 0.15,
            shopping: 0.05,
        }
    }
}

impl CategoryWeights {
    pub fn new(accommodation: f64, food: f64, transport: f64, activities: f64, shopping: f64) -> Self {
        Self {
            accommodation,
            food,
            transport,
            activities,
            shopping,
        }
    }

    pub fn equal() -> Self {
        let share = 1.0 / Category::ALL.len() as f64;
        Self::new(share, share, share, share, share)
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Accommodation => self.accommodation,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Activities => self.activities,
            Category::Shopping => self.shopping,
        }
    }

    pub fn set(&mut self, category: Category, weight: f64) {
        match category {
            Category::Accommodation => self.accommodation = weight,
            Category::Food => self.food = weight,
            Category::Transport => self.transport = weight,
            Category::Activities => self.activities = weight,
            Category::Shopping => self.shopping = weight,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|category| self.get(*category)).sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_EPSILON
    }

    /// Rescale so the weights sum to 1.0.
    ///
    /// Every weight is divided by the sum. A [`NormalizationWarning`] is only
    /// raised when the sum was further than [`WEIGHT_EPSILON`] from 1.0.
    /// All-zero weights fall back to an equal split. Negative or non-finite
    /// weights are rejected.
    pub fn normalize(&self) -> Result<(CategoryWeights, Option<NormalizationWarning>)> {
        for category in Category::ALL {
            let weight = self.get(category);
            if !weight.is_finite() || weight < 0.0 {
                return Err(PlannerError::invalid_input(
                    "weights",
                    format!("{} weight must be a non-negative number, got {}", category.key(), weight),
                ));
            }
        }

        let original_sum = self.sum();
        let warning = if self.is_normalized() {
            None
        } else {
            let warning = NormalizationWarning { original_sum };
            warn!(original_sum, "category weights {}", warning);
            Some(warning)
        };

        if original_sum == 0.0 {
            return Ok((Self::equal(), warning));
        }
        if original_sum == 1.0 {
            return Ok((*self, warning));
        }

        let mut normalized = *self;
        for category in Category::ALL {
            normalized.set(category, self.get(category) / original_sum);
        }
        Ok((normalized, warning))
    }

    /// Share of a category as a percentage with one decimal.
    pub fn share_percent(&self, category: Category) -> f64 {
        let sum = self.sum();
        if sum == 0.0 {
            return 0.0;
        }
        (self.get(category) / sum * 1000.0).round() / 10.0
    }
}

impl FromStr for CategoryWeights {
    type Err = PlannerError;

    /// Parse `accommodation=40,food=25,...`. Categories left out weigh zero.
    fn from_str(value: &str) -> Result<Self> {
        let mut weights = CategoryWeights::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let mut seen = Vec::new();

        for pair in value.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (key, raw) = pair.split_once('=').ok_or_else(|| {
                PlannerError::invalid_input("weights", format!("expected `category=weight`, got `{pair}`"))
            })?;
            let category: Category = key.parse()?;
            if seen.contains(&category) {
                return Err(PlannerError::invalid_input(
                    "weights",
                    format!("{} listed more than once", category.key()),
                ));
            }
            let weight: f64 = raw.trim().parse().map_err(|_| {
                PlannerError::invalid_input("weights", format!("`{}` is not a number", raw.trim()))
            })?;
            weights.set(category, weight);
            seen.push(category);
        }

        if seen.is_empty() {
            return Err(PlannerError::invalid_input("weights", "no category weights given"));
        }
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_weights_pass_through() {
        let weights = CategoryWeights::new(0.4, 0.2, 0.15, 0.15, 0.1);
        let (normalized, warning) = weights.normalize().unwrap();
        assert!(warning.is_none());
        for category in Category::ALL {
            assert!((normalized.get(category) - weights.get(category)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_near_one_weights_rescaled_without_warning() {
        let weights = CategoryWeights::new(0.4, 0.25, 0.15, 0.15, 0.0509);
        let (normalized, warning) = weights.normalize().unwrap();
        assert!(warning.is_none());
        assert!((normalized.sum() - 1.0).abs() < 1e-12);
        assert!((normalized.accommodation - 0.4 / 1.0009).abs() < 1e-12);
    }

    #[test]
    fn test_rescales_short_sum() {
        let weights = CategoryWeights::new(0.3, 0.2, 0.15, 0.15, 0.1);
        let (normalized, warning) = weights.normalize().unwrap();
        assert!((normalized.sum() - 1.0).abs() < 1e-9);
        assert!((warning.unwrap().original_sum - 0.9).abs() < 1e-9);
        assert!((normalized.accommodation - 0.3 / 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_slider_scale_weights() {
        let weights = CategoryWeights::new(40.0, 25.0, 15.0, 15.0, 5.0);
        let (normalized, warning) = weights.normalize().unwrap();
        assert!(warning.is_some());
        assert!((normalized.accommodation - 0.4).abs() < 1e-12);
        assert!((normalized.shopping - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weights_split_equally() {
        let weights = CategoryWeights::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let (normalized, warning) = weights.normalize().unwrap();
        assert_eq!(normalized, CategoryWeights::equal());
        assert_eq!(warning.unwrap().original_sum, 0.0);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = CategoryWeights::new(0.5, -0.1, 0.2, 0.2, 0.2);
        let err = weights.normalize().unwrap_err();
        assert_eq!(err.field(), Some("weights"));
    }

    #[test]
    fn test_parse_pairs() {
        let weights: CategoryWeights = "accommodation=50, food=30,activities=20".parse().unwrap();
        assert_eq!(weights.accommodation, 50.0);
        assert_eq!(weights.food, 30.0);
        assert_eq!(weights.transport, 0.0);
        assert_eq!(weights.activities, 20.0);

        assert!("hotel=10".parse::<CategoryWeights>().is_err());
        assert!("food=ten".parse::<CategoryWeights>().is_err());
        assert!("food=1,food=2".parse::<CategoryWeights>().is_err());
        assert!("".parse::<CategoryWeights>().is_err());
    }

    #[test]
    fn test_share_percent() {
        let weights = CategoryWeights::new(40.0, 25.0, 15.0, 15.0, 5.0);
        assert_eq!(weights.share_percent(Category::Accommodation), 40.0);
        assert_eq!(weights.share_percent(Category::Shopping), 5.0);
    }
}
