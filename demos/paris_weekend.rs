use chrono::NaiveDate;
use trip_budget_planner::{
    cli::render_plan,
    export::{to_json, to_pdf},
    BudgetMode, CategoryWeights, Currency, TripInput, TripPlanner,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let input = TripInput::new("Paris, France", 3, 2, 1000.0, BudgetMode::Total)
        .with_currency(Currency::Eur)
        .with_start_date(NaiveDate::from_ymd_opt(2026, 5, 15).ok_or("bad date")?);
    let weights = CategoryWeights::new(0.4, 0.2, 0.15, 0.15, 0.1);

    let plan = TripPlanner::new().plan(input, &weights)?;
    print!("{}", render_plan(&plan));

    let json = to_json(&plan)?;
    let pdf = to_pdf(&plan)?;
    std::fs::write("paris_weekend.json", &json)?;
    std::fs::write("paris_weekend.pdf", &pdf)?;
    println!("\nWrote paris_weekend.json ({} bytes) and paris_weekend.pdf ({} bytes)", json.len(), pdf.len());
    Ok(())
}
