mod render;

pub use render::{render_plan, PlanReport};

use crate::{
    config::PlannerConfig,
    error::PlannerError,
    export::{from_json, to_json, to_pdf, PlanDocument},
    schemas::DocumentSchema,
    types::{BudgetMode, CategoryWeights, Currency, TripInput, TripPlan},
    TripPlanner,
};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub fn command() -> Command {
    Command::new("trip-planner")
        .version("0.1.0")
        .about("Split a travel budget across categories and draft a day-by-day itinerary")
        .arg(
            Arg::new("destination")
                .help("Where the trip goes")
                .required_unless_present_any(["import", "schema"])
                .index(1),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("N")
                .help("Number of days (1-60)")
                .value_parser(value_parser!(u32))
                .default_value("5"),
        )
        .arg(
            Arg::new("travelers")
                .short('t')
                .long("travelers")
                .value_name("N")
                .help("Number of travelers (1-20)")
                .value_parser(value_parser!(u32))
                .default_value("2"),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("AMOUNT")
                .help("Budget amount")
                .value_parser(value_parser!(f64))
                .default_value("150000"),
        )
        .arg(
            Arg::new("per-person")
                .short('p')
                .long("per-person")
                .help("Treat the budget as per traveler instead of for the whole group")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("currency")
                .short('c')
                .long("currency")
                .value_name("CODE")
                .help("LKR, USD, EUR or INR (or set TRIP_PLANNER_CURRENCY)"),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("YYYY-MM-DD")
                .help("First day of the trip"),
        )
        .arg(
            Arg::new("weights")
                .short('w')
                .long("weights")
                .value_name("PAIRS")
                .help("Category weights, e.g. accommodation=40,food=25,transport=15,activities=15,shopping=5"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .value_name("PATH")
                .help("Write the plan as JSON"),
        )
        .arg(
            Arg::new("pdf")
                .long("pdf")
                .value_name("PATH")
                .help("Write the plan as PDF"),
        )
        .arg(
            Arg::new("import")
                .long("import")
                .value_name("PATH")
                .help("Load a previously exported JSON plan instead of planning a new one"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .help("Print the JSON Schema of exported plans and exit")
                .action(ArgAction::SetTrue),
        )
}

/// CLI entry point for the trip-planner tool
pub fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();
    let config = PlannerConfig::from_env()?;

    if matches.get_flag("schema") {
        let schema = serde_json::to_string_pretty(PlanDocument::schema().schema_json())?;
        println!("{schema}");
        return Ok(());
    }

    let plan = match matches.get_one::<String>("import") {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {path}"))?;
            let plan = from_json(&text).with_context(|| format!("importing {path}"))?;
            info!("Imported plan from {}", path);
            plan
        }
        None => plan_from_args(&matches, &config)?,
    };

    print!("{}", render_plan(&plan));

    if let Some(path) = matches.get_one::<String>("json") {
        let text = to_json(&plan)?;
        let written = write_export(&config, Path::new(path), text.as_bytes())?;
        println!("\nSaved JSON plan to {}", written.display());
    }
    if let Some(path) = matches.get_one::<String>("pdf") {
        let bytes = to_pdf(&plan)?;
        let written = write_export(&config, Path::new(path), &bytes)?;
        println!("Saved PDF plan to {}", written.display());
    }

    Ok(())
}

fn plan_from_args(matches: &ArgMatches, config: &PlannerConfig) -> anyhow::Result<TripPlan> {
    let input = input_from_args(matches, config)?;
    let weights = match matches.get_one::<String>("weights") {
        Some(pairs) => pairs.parse::<CategoryWeights>()?,
        None => config.weights,
    };

    info!("Planning trip to {}", input.destination);
    match TripPlanner::from_config(config).plan(input, &weights) {
        Ok(plan) => Ok(plan),
        Err(err) => {
            error!("Planning failed: {}", err);
            Err(err.into())
        }
    }
}

fn input_from_args(matches: &ArgMatches, config: &PlannerConfig) -> Result<TripInput, PlannerError> {
    let destination = matches
        .get_one::<String>("destination")
        .cloned()
        .unwrap_or_default();
    let days = matches.get_one::<u32>("days").copied().unwrap_or(5);
    let travelers = matches.get_one::<u32>("travelers").copied().unwrap_or(2);
    let budget = matches.get_one::<f64>("budget").copied().unwrap_or(150_000.0);
    let mode = if matches.get_flag("per-person") {
        BudgetMode::PerPerson
    } else {
        BudgetMode::Total
    };

    let currency = match matches.get_one::<String>("currency") {
        Some(code) => code.parse::<Currency>()?,
        None => config.currency,
    };

    let mut input = TripInput::new(destination, days, travelers, budget, mode).with_currency(currency);
    if let Some(start) = matches.get_one::<String>("start") {
        input = input.with_start_date(parse_date(start)?);
    }
    Ok(input)
}

fn parse_date(value: &str) -> Result<NaiveDate, PlannerError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|err| {
        PlannerError::invalid_input("startDate", format!("`{value}` is not a YYYY-MM-DD date: {err}"))
    })
}

/// Write export bytes, creating parent directories as needed.
pub fn write_export(config: &PlannerConfig, path: &Path, bytes: &[u8]) -> crate::Result<PathBuf> {
    let target = config.resolve_output(path);
    if let Some(parent) = target.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, bytes)?;
    info!("Wrote {} bytes to {}", bytes.len(), target.display());
    Ok(target)
}
