use std::path::PathBuf;

use bill_split_rs::chrono::{Duration, Local};
use bill_split_rs::logging::init_cli_logger;
use bill_split_rs::{process, BillingRequest, ConfigStore, JsonFileStore};
use clap::Parser;

/// Split a utility bill between the upper and lower units
#[derive(Parser, Debug)]
#[command(name = "billsplit", version, about)]
struct Cli {
    /// service: 1/hydro, 2/gas, 3/water, or any custom label
    #[arg(short, long)]
    service: String,

    /// bill amount (single-amount services)
    #[arg(short, long)]
    amount: Option<String>,

    /// water/sewer amount (water & solid waste service)
    #[arg(long)]
    water_amount: Option<String>,

    /// solid waste amount (water & solid waste service)
    #[arg(long)]
    waste_amount: Option<String>,

    /// period start, DD/MM/YYYY (defaults to today)
    #[arg(long)]
    from: Option<String>,

    /// period end, DD/MM/YYYY (defaults to 30 days after today)
    #[arg(long)]
    to: Option<String>,

    /// period as "<from> to <to>"
    #[arg(long, conflicts_with_all = ["from", "to"])]
    range: Option<String>,

    /// prorate by occupancy start dates
    #[arg(long)]
    consider_start: bool,

    /// prorate by occupancy end dates
    #[arg(long)]
    consider_end: bool,

    /// new upper unit start date, saved when start dates are considered
    #[arg(long)]
    upper_start: Option<String>,

    /// new lower unit start date, saved when start dates are considered
    #[arg(long)]
    lower_start: Option<String>,

    #[arg(long)]
    upper_end: Option<String>,

    #[arg(long)]
    lower_end: Option<String>,

    /// due date, printed verbatim
    #[arg(short, long)]
    due_date: String,

    /// "amount due if paid before" date
    #[arg(long)]
    early_payment_date: Option<String>,

    /// early payment discount amount
    #[arg(long)]
    discount: Option<String>,

    /// amount owed when paid after the due date
    #[arg(long)]
    late_amount: Option<String>,

    /// defaults file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_request(self) -> BillingRequest {
        let today = Local::now().date_naive();
        let (period_from, period_to) = if self.range.is_some() {
            (None, None)
        } else {
            (
                Some(self.from.unwrap_or_else(|| today.format("%d/%m/%Y").to_string())),
                Some(self.to.unwrap_or_else(|| (today + Duration::days(30)).format("%d/%m/%Y").to_string())),
            )
        };

        BillingRequest {
            service: Some(self.service),
            amount: self.amount,
            water_amount: self.water_amount,
            waste_amount: self.waste_amount,
            period_from,
            period_to,
            period_range: self.range,
            upper_start: self.upper_start,
            lower_start: self.lower_start,
            upper_end: self.upper_end,
            lower_end: self.lower_end,
            consider_start: Some(self.consider_start),
            consider_end: Some(self.consider_end),
            due_date: Some(self.due_date),
            early_payment_date: self.early_payment_date,
            early_payment_discount: self.discount,
            late_amount: self.late_amount,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);
    tracing::debug!("cli args: {:?}", cli);

    let store = JsonFileStore::new(cli.config.clone());
    let config = store.load()?;

    let outcome = match process(&cli.into_request(), config) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("billing request failed: {}", err);
            return Err(err.into());
        }
    };

    if let Some(updated) = &outcome.config {
        store.save(updated)?;
    }

    println!("{}", outcome.text);
    Ok(())
}
