//! Planner defaults sourced from the environment.
//!
//! Recognized variables (a `.env` file is loaded by the CLI first):
//! - `TRIP_PLANNER_CURRENCY` - default currency code
//! - `TRIP_PLANNER_WEIGHTS` - default weights, `accommodation=40,food=25,...`
//! - `TRIP_PLANNER_LOW_TIER_MAX` / `TRIP_PLANNER_MEDIUM_TIER_MAX` - tier thresholds
//! - `TRIP_PLANNER_OUTPUT_DIR` - base directory for relative export paths

use std::path::{Path, PathBuf};

use crate::{
    core::TierThresholds,
    error::{PlannerError, Result},
    types::{CategoryWeights, Currency},
};

pub const CURRENCY_VAR: &str = "TRIP_PLANNER_CURRENCY";
pub const WEIGHTS_VAR: &str = "TRIP_PLANNER_WEIGHTS";
pub const LOW_TIER_VAR: &str = "TRIP_PLANNER_LOW_TIER_MAX";
pub const MEDIUM_TIER_VAR: &str = "TRIP_PLANNER_MEDIUM_TIER_MAX";
pub const OUTPUT_DIR_VAR: &str = "TRIP_PLANNER_OUTPUT_DIR";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerConfig {
    pub currency: Currency,
    pub weights: CategoryWeights,
    pub thresholds: TierThresholds,
    pub output_dir: Option<PathBuf>,
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(code) = lookup(CURRENCY_VAR) {
            config.currency = code
                .parse::<Currency>()
                .map_err(|err| config_error(CURRENCY_VAR, err))?;
        }
        if let Some(weights) = lookup(WEIGHTS_VAR) {
            config.weights = weights
                .parse::<CategoryWeights>()
                .map_err(|err| config_error(WEIGHTS_VAR, err))?;
        }
        if let Some(value) = lookup(LOW_TIER_VAR) {
            config.thresholds.low_max = parse_amount(LOW_TIER_VAR, &value)?;
        }
        if let Some(value) = lookup(MEDIUM_TIER_VAR) {
            config.thresholds.medium_max = parse_amount(MEDIUM_TIER_VAR, &value)?;
        }
        if config.thresholds.low_max > config.thresholds.medium_max {
            return Err(PlannerError::Config(format!(
                "{LOW_TIER_VAR} ({}) must not exceed {MEDIUM_TIER_VAR} ({})",
                config.thresholds.low_max, config.thresholds.medium_max
            )));
        }
        config.output_dir = lookup(OUTPUT_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Resolve an export path against `output_dir` when it is relative.
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

fn config_error(key: &str, err: PlannerError) -> PlannerError {
    PlannerError::Config(format!("{key}: {err}"))
}

fn parse_amount(key: &str, value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(PlannerError::Config(format!(
            "{key}: expected a non-negative number, got `{value}`"
        ))),
    }
}
