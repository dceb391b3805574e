/// quick start - prorate a single bill by occupancy start dates
use bill_split_rs::{BillingPeriod, ConsiderBounds, Money, OccupancyWindow, ProrationEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let period = BillingPeriod::parse("01/01/2024", "31/01/2024")?;
    let upper = OccupancyWindow::parse("10/01/2024", None)?;
    let lower = OccupancyWindow::parse("01/01/2024", None)?;

    let allocation = ProrationEngine::new(ConsiderBounds::START_ONLY).allocate(
        Money::from_major(300),
        &period,
        &upper,
        &lower,
    );

    println!("upper: {} days, {} -> {}", allocation.upper.days, allocation.upper.proportion, allocation.upper.amount);
    println!("lower: {} days, {} -> {}", allocation.lower.days, allocation.lower.proportion, allocation.lower.amount);

    Ok(())
}
